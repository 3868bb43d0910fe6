//! Input alphabets.
//!
//! A symbol is the unit the frequency counter, tree and code table work on.
//! Bytes cover arbitrary binary input; `char` covers text at the granularity
//! of Unicode scalar values.

use std::{
    fmt::Debug,
    hash::Hash,
    io::{Read, Write},
};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{HuffmanError, Result};

pub trait Symbol: Copy + Ord + Hash + Debug {
    /// Tag recorded in archive headers so streams of one alphabet are never
    /// decoded as another.
    const KIND: u8;

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()>;

    fn read_from<R: Read>(reader: &mut R) -> Result<Self>;
}

impl Symbol for u8 {
    const KIND: u8 = 0;

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u8(*self)?;
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_u8()?)
    }
}

impl Symbol for char {
    const KIND: u8 = 1;

    fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<BigEndian>(*self as u32)?;
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let scalar = reader.read_u32::<BigEndian>()?;
        char::from_u32(scalar).ok_or_else(|| {
            HuffmanError::invalid_archive(format!("{:#x} is not a unicode scalar value", scalar))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_char_is_written_as_big_endian_scalar() {
        let mut out = Vec::new();
        'é'.write_to(&mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x00, 0x00, 0xe9]);

        let back = char::read_from(&mut Cursor::new(out)).unwrap();
        assert_eq!(back, 'é');
    }

    #[test]
    fn test_surrogate_scalar_is_rejected() {
        let mut cursor = Cursor::new(vec![0x00, 0x00, 0xd8, 0x00]);
        assert!(matches!(
            char::read_from(&mut cursor),
            Err(HuffmanError::InvalidArchive(_))
        ));
    }

    #[test]
    fn test_truncated_symbol_is_io_error() {
        let mut cursor = Cursor::new(vec![0x00, 0x41]);
        assert!(matches!(
            char::read_from(&mut cursor),
            Err(HuffmanError::Io(_))
        ));
    }
}
