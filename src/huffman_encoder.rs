use bitvec::prelude::*;

use crate::{
    error::{HuffmanError, Result},
    huffman::CodeTable,
    symbol::Symbol,
};

/// Encoded payload padded with zero bits to a whole number of bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedBitStream {
    pub bytes: Vec<u8>,
    /// Number of zero bits appended after the last code, 0..=7.
    pub pad: u8,
}

impl PackedBitStream {
    /// Payload length in bits, excluding padding.
    pub fn bit_len(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.pad as usize)
    }

    /// Single buffer with the pad length as its leading byte.
    pub fn to_framed(&self) -> Vec<u8> {
        let mut framed = Vec::with_capacity(self.bytes.len() + 1);
        framed.push(self.pad);
        framed.extend_from_slice(&self.bytes);
        framed
    }

    pub fn from_framed(framed: &[u8]) -> Result<Self> {
        let (&pad, bytes) = framed
            .split_first()
            .ok_or_else(|| HuffmanError::invalid_archive("framed stream has no pad byte"))?;

        if pad > 7 {
            return Err(HuffmanError::InvalidPad(pad));
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            pad,
        })
    }
}

pub struct HuffmanEncoder<'t, S: Symbol> {
    table: &'t CodeTable<S>,
    compressed: BitVec<u8, Msb0>,
}

impl<'t, S: Symbol> HuffmanEncoder<'t, S> {
    pub fn new(table: &'t CodeTable<S>) -> Self {
        Self {
            table,
            compressed: BitVec::new(),
        }
    }

    /// Appends the codes of `data` in order. Can be called repeatedly.
    ///
    /// On error nothing from `data` is kept.
    pub fn pack(&mut self, data: &[S]) -> Result<()> {
        let start = self.compressed.len();

        for symbol in data {
            match self.table.code(symbol) {
                Some(code) => self.compressed.extend_from_bitslice(code),
                None => {
                    self.compressed.truncate(start);
                    return Err(HuffmanError::UnknownSymbol(format!("{:?}", symbol)));
                }
            }
        }

        Ok(())
    }

    /// Bits packed so far, before padding.
    pub fn bit_len(&self) -> usize {
        self.compressed.len()
    }

    pub fn finish(mut self) -> PackedBitStream {
        let bit_len = self.compressed.len();
        let pad = (8 - bit_len % 8) % 8;
        self.compressed.resize(bit_len + pad, false);

        let bytes = self.compressed.into_vec();

        log::debug!(
            "packed {} bits into {} bytes (pad {})",
            bit_len,
            bytes.len(),
            pad
        );

        PackedBitStream {
            bytes,
            pad: pad as u8,
        }
    }
}
