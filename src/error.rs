use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Invalid framing: trailing byte count {trailing} is outside 0..=3")]
    InvalidFraming { trailing: usize },

    #[error("Invalid code {code}: dictionary only holds {size} entries")]
    InvalidCode { code: u16, size: usize },
}

/// Failures of the streaming and file-level operations.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Cannot open {}", path.display())]
    ResourceUnavailable {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O failure")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decompression(#[from] DecompressionError),
}
