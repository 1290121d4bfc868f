//! Error types for library operations.

use thiserror::Error;

use crate::codec::CodecError;
use crate::core::message::{
    format_positional, MessageCatalog, EXPORT_INVALID_INDEX_FALLBACK, EXPORT_INVALID_INDEX_KEY,
};

/// Errors that can occur in library operations.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No preset at the requested position.
    #[error("no preset exists at index {index} (library holds {len})")]
    InvalidIndex { index: usize, len: usize },

    /// The external record parser rejected the record.
    #[error("failed to convert external preset: {0}")]
    Conversion(#[source] CodecError),

    /// The text codec could not decode the input.
    #[error("failed to deserialize preset: {0}")]
    Deserialization(#[source] CodecError),

    /// The text decoded, but to nothing.
    #[error("deserialized input resulted in no preset")]
    EmptyDeserialization,

    /// The text codec could not encode the preset.
    #[error("failed to serialize preset: {0}")]
    Serialization(#[source] CodecError),
}

impl LibraryError {
    /// Message for showing to the user.
    ///
    /// Invalid indices use the catalog's translation; everything else is the
    /// `Display` text.
    pub fn localized(&self, catalog: &dyn MessageCatalog) -> String {
        match self {
            LibraryError::InvalidIndex { index, .. } => {
                let template = catalog.localize(EXPORT_INVALID_INDEX_KEY, EXPORT_INVALID_INDEX_FALLBACK);
                format_positional(&template, &[index])
            }
            other => other.to_string(),
        }
    }
}

/// Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
