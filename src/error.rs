use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("pad length {0} is invalid for this stream")]
    InvalidPad(u8),

    #[error("stream ended with {bits} bits that do not form a complete code")]
    UnmatchedTrailingBits { bits: usize },

    #[error("padding bits are not zero")]
    CorruptPadding,

    #[error("symbol {0} is not present in the code table")]
    UnknownSymbol(String),

    #[error("bit sequence {0} does not match any code")]
    InvalidCode(String),

    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    #[error("decoded {actual} symbols, expected {expected}")]
    LengthMismatch { expected: u64, actual: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    pub(crate) fn invalid_archive<S: Into<String>>(message: S) -> Self {
        Self::InvalidArchive(message.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
