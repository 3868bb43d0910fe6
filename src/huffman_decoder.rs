use bitvec::prelude::*;

use crate::{
    error::{HuffmanError, Result},
    huffman::{code_string, Code, CodeTable},
    huffman_encoder::PackedBitStream,
    symbol::Symbol,
};

pub struct HuffmanDecoder<'t, S: Symbol> {
    table: &'t CodeTable<S>,
}

impl<'t, S: Symbol> HuffmanDecoder<'t, S> {
    pub fn new(table: &'t CodeTable<S>) -> Self {
        Self { table }
    }

    /// Strips `pad` trailing bits from `packed` and decodes the rest.
    ///
    /// Every payload bit must belong to a complete code and every padding
    /// bit must be zero.
    pub fn unpack(&self, packed: &[u8], pad: u8) -> Result<Vec<S>> {
        if pad > 7 {
            return Err(HuffmanError::InvalidPad(pad));
        }

        let bits = packed.view_bits::<Msb0>();
        let pad_len = pad as usize;
        if pad_len > bits.len() {
            return Err(HuffmanError::InvalidPad(pad));
        }

        let (payload, padding) = bits.split_at(bits.len() - pad_len);
        if padding.any() {
            return Err(HuffmanError::CorruptPadding);
        }

        let max_code_len = self.table.max_code_len();
        let mut decoded = Vec::new();
        let mut current = Code::with_capacity(max_code_len);

        for bit in payload.iter().by_vals() {
            current.push(bit);

            if let Some(symbol) = self.table.symbol(&current) {
                decoded.push(symbol);
                current.clear();
            } else if current.len() >= max_code_len {
                return Err(HuffmanError::InvalidCode(code_string(&current)));
            }
        }

        if !current.is_empty() {
            return Err(HuffmanError::UnmatchedTrailingBits {
                bits: current.len(),
            });
        }

        log::debug!(
            "decoded {} symbols from {} payload bits",
            decoded.len(),
            payload.len()
        );

        Ok(decoded)
    }

    pub fn unpack_stream(&self, stream: &PackedBitStream) -> Result<Vec<S>> {
        self.unpack(&stream.bytes, stream.pad)
    }
}
