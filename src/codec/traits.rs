//! Collaborator traits for getting presets in and out of the library.

use super::error::CodecResult;
use crate::core::Preset;

/// Converts an external record (e.g. the game's own preset slot) into a preset.
pub trait RecordParser {
    /// The external record type.
    type Record;

    /// Parse a record. The returned preset's name is replaced by the library.
    fn parse(&self, record: &Self::Record) -> CodecResult<Preset>;
}

/// Text form used for sharing single presets.
pub trait TextCodec {
    fn serialize(&self, preset: &Preset) -> CodecResult<String>;

    /// Decode `text`. `Ok(None)` means the text decoded to nothing.
    fn deserialize(&self, text: &str) -> CodecResult<Option<Preset>>;
}
