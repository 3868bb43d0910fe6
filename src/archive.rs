//! Self-describing container for a compressed stream.
//!
//! The code table itself is not stored. The header carries the frequency
//! table instead and the reader rebuilds the same tree, which yields the
//! same codes because tree construction is deterministic.
//!
//! Layout, integers big-endian:
//!
//! | field         | size                         |
//! |---------------|------------------------------|
//! | magic `HUFP`  | 4                            |
//! | version       | 1                            |
//! | symbol kind   | 1                            |
//! | entry count   | 4                            |
//! | entries       | count x (symbol, u64 weight) |
//! | symbol total  | 8                            |
//! | pad           | 1                            |
//! | payload       | remainder                    |

use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use itertools::Itertools;

use crate::{
    compress,
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
    huffman::CodeTable,
    huffman_decoder::HuffmanDecoder,
    symbol::Symbol,
    Compressed,
};

pub const MAGIC: &[u8; 4] = b"HUFP";
pub const VERSION: u8 = 1;

pub fn write_archive<S: Symbol, W: Write>(writer: &mut W, compressed: &Compressed<S>) -> Result<()> {
    let entry_count = u32::try_from(compressed.frequencies.len())
        .map_err(|_| HuffmanError::invalid_archive("too many distinct symbols"))?;

    writer.write_all(MAGIC)?;
    writer.write_u8(VERSION)?;
    writer.write_u8(S::KIND)?;
    writer.write_u32::<BigEndian>(entry_count)?;

    for (symbol, weight) in compressed.frequencies.iter() {
        symbol.write_to(writer)?;
        writer.write_u64::<BigEndian>(weight)?;
    }

    writer.write_u64::<BigEndian>(compressed.symbol_count())?;
    writer.write_u8(compressed.pad)?;
    writer.write_all(&compressed.packed)?;

    Ok(())
}

pub fn read_archive<S: Symbol, R: Read>(reader: &mut R) -> Result<Vec<S>> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(HuffmanError::invalid_archive("bad magic"));
    }

    let version = reader.read_u8()?;
    if version != VERSION {
        return Err(HuffmanError::invalid_archive(format!(
            "unsupported version {}",
            version
        )));
    }

    let kind = reader.read_u8()?;
    if kind != S::KIND {
        return Err(HuffmanError::invalid_archive(format!(
            "symbol kind {} does not match expected {}",
            kind,
            S::KIND
        )));
    }

    let entry_count = reader.read_u32::<BigEndian>()?;
    let entries = (0..entry_count)
        .map(|_| {
            let symbol = S::read_from(&mut *reader)?;
            let weight = reader.read_u64::<BigEndian>()?;
            Ok((symbol, weight))
        })
        .collect::<Result<Vec<(S, u64)>>>()?;

    if entries.iter().tuple_windows().any(|(a, b)| a.0 >= b.0) {
        return Err(HuffmanError::invalid_archive(
            "frequency entries are not in strictly ascending symbol order",
        ));
    }
    if entries.iter().any(|(_, weight)| *weight == 0) {
        return Err(HuffmanError::invalid_archive("frequency entry with zero weight"));
    }

    let expected = reader.read_u64::<BigEndian>()?;
    let header_total = entries
        .iter()
        .try_fold(0u64, |acc, (_, weight)| acc.checked_add(*weight))
        .ok_or_else(|| HuffmanError::invalid_archive("frequency total overflows"))?;
    if header_total != expected {
        return Err(HuffmanError::invalid_archive(format!(
            "frequency total {} does not match symbol total {}",
            header_total, expected
        )));
    }

    let pad = reader.read_u8()?;
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;

    log::debug!(
        "read archive: {} distinct symbols, {} symbols, {} payload bytes",
        entries.len(),
        expected,
        payload.len()
    );

    let frequencies: FrequencyTable<S> = entries.into_iter().collect();
    let table = CodeTable::from_frequencies(&frequencies);
    let decoded = HuffmanDecoder::new(&table).unpack(&payload, pad)?;

    if decoded.len() as u64 != expected {
        return Err(HuffmanError::LengthMismatch {
            expected,
            actual: decoded.len() as u64,
        });
    }

    Ok(decoded)
}

pub fn to_archive_bytes<S: Symbol>(symbols: &[S]) -> Result<Vec<u8>> {
    let compressed = compress(symbols)?;
    let mut out = Vec::new();
    write_archive(&mut out, &compressed)?;
    Ok(out)
}

pub fn from_archive_bytes<S: Symbol>(mut bytes: &[u8]) -> Result<Vec<S>> {
    read_archive(&mut bytes)
}
