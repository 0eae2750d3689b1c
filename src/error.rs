//! Error types for the conversion pipeline.

use std::path::PathBuf;

/// Errors produced while decoding a `.foo` payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),

    #[error("image dimensions {width}x{height} are too large")]
    DimensionsOverflow { width: usize, height: usize },

    #[error("payload size mismatch: expected {expected} bytes, found {actual}")]
    PayloadSizeMismatch {
        /// `width * height`
        expected: usize,
        /// Bytes available after the header
        actual: usize,
    },
}

/// Errors that terminate a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot open input '{}': {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read input '{}': {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open output '{}': {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write failed for '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl From<clap::Error> for ConvertError {
    fn from(err: clap::Error) -> Self {
        ConvertError::Usage(err.render().to_string())
    }
}

impl ConvertError {
    /// True for argument errors detected before any file I/O.
    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::Usage(_))
    }
}
