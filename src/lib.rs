//! # huffpack
//!
//! Static Huffman coding for byte and character streams.
//!
//! ```rust
//! let text = "abracadabra";
//! let compressed = huffpack::compress_str(text)?;
//! let restored = huffpack::decompress_to_string(
//!     &compressed.packed,
//!     compressed.pad,
//!     &compressed.code_table,
//! )?;
//! assert_eq!(restored, text);
//!
//! // Or carry the frequency table inside the artifact.
//! let archive = huffpack::to_archive_bytes(text.as_bytes())?;
//! let bytes: Vec<u8> = huffpack::from_archive_bytes(&archive)?;
//! assert_eq!(bytes, text.as_bytes());
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod archive;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod huffman_decoder;
pub mod huffman_encoder;
pub mod huffman_tree;
pub mod symbol;

pub use archive::{from_archive_bytes, read_archive, to_archive_bytes, write_archive};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman::{Code, CodeTable};
pub use huffman_decoder::HuffmanDecoder;
pub use huffman_encoder::{HuffmanEncoder, PackedBitStream};
pub use huffman_tree::{HuffmanNode, HuffmanTree};
pub use symbol::Symbol;

/// Output of [`compress`].
///
/// `frequencies` is what a later decoder needs to rebuild `code_table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed<S: Symbol> {
    pub packed: Vec<u8>,
    pub pad: u8,
    pub code_table: CodeTable<S>,
    pub frequencies: FrequencyTable<S>,
}

impl<S: Symbol> Compressed<S> {
    /// Number of symbols that were compressed.
    pub fn symbol_count(&self) -> u64 {
        self.frequencies.total()
    }
}

/// Builds a code table from `symbols` and packs them with it. Fails only with
/// `UnknownSymbol`, which a table built from the same input never raises.
pub fn compress<S: Symbol>(symbols: &[S]) -> Result<Compressed<S>> {
    let frequencies = FrequencyTable::from_symbols(symbols);
    let tree = HuffmanTree::from_frequencies(&frequencies);
    let code_table = CodeTable::from_tree(&tree);

    let mut encoder = HuffmanEncoder::new(&code_table);
    encoder.pack(symbols)?;
    let PackedBitStream { bytes, pad } = encoder.finish();

    Ok(Compressed {
        packed: bytes,
        pad,
        code_table,
        frequencies,
    })
}

/// Decodes `packed` with `code_table` after stripping `pad` bits. Fails with
/// `InvalidPad`, `CorruptPadding`, `InvalidCode` or `UnmatchedTrailingBits`.
pub fn decompress<S: Symbol>(packed: &[u8], pad: u8, code_table: &CodeTable<S>) -> Result<Vec<S>> {
    HuffmanDecoder::new(code_table).unpack(packed, pad)
}

/// Compresses text at character granularity.
pub fn compress_str(text: &str) -> Result<Compressed<char>> {
    let chars: Vec<char> = text.chars().collect();
    compress(&chars)
}

pub fn decompress_to_string(packed: &[u8], pad: u8, code_table: &CodeTable<char>) -> Result<String> {
    Ok(decompress(packed, pad, code_table)?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_bytes() {
        let data = b"hello world! this is a test message for huffman coding.";
        let compressed = compress(data).unwrap();
        let decoded = decompress(&compressed.packed, compressed.pad, &compressed.code_table).unwrap();
        assert_eq!(decoded, data.to_vec());
    }

    #[test]
    fn test_round_trip_text() {
        let text = "naïve café « ünïcödé » text with ☃ and 🦀";
        let compressed = compress_str(text).unwrap();
        assert_eq!(compressed.symbol_count(), text.chars().count() as u64);

        let restored =
            decompress_to_string(&compressed.packed, compressed.pad, &compressed.code_table)
                .unwrap();
        assert_eq!(restored, text);
    }

    #[test]
    fn test_single_symbol_input() {
        let compressed = compress_str("aaaa").unwrap();
        assert_eq!(compressed.code_table.code(&'a').map(|c| c.len()), Some(1));
        assert_eq!(compressed.packed, vec![0x00]);
        assert_eq!(compressed.pad, 4);

        let restored =
            decompress_to_string(&compressed.packed, compressed.pad, &compressed.code_table)
                .unwrap();
        assert_eq!(restored, "aaaa");
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress_str("").unwrap();
        assert!(compressed.packed.is_empty());
        assert_eq!(compressed.pad, 0);
        assert!(compressed.code_table.is_empty());

        let restored =
            decompress_to_string(&compressed.packed, compressed.pad, &compressed.code_table)
                .unwrap();
        assert_eq!(restored, "");
    }

    #[test]
    fn test_decompress_rejects_invalid_pad() {
        let compressed = compress(b"abc").unwrap();
        assert!(matches!(
            decompress(&compressed.packed, 9, &compressed.code_table),
            Err(HuffmanError::InvalidPad(9))
        ));
    }
}
