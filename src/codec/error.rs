//! Error types for preset codecs.

use thiserror::Error;

/// Errors raised by parsers and text codecs.
#[derive(Error, Debug)]
pub enum CodecError {
    /// JSON could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A binary game record could not be decoded.
    #[error("binary record error: {0}")]
    Binary(#[from] bincode::Error),

    /// The record decoded but its contents are unusable.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
