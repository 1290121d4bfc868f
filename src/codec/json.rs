//! JSON text codec.

use super::error::{CodecError, CodecResult};
use super::traits::TextCodec;
use crate::core::Preset;

/// Shares presets as single-line JSON objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON instead.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl TextCodec for JsonCodec {
    /// Fails on NaN or infinite coordinates; JSON writes those as `null`,
    /// which would not decode again.
    fn serialize(&self, preset: &Preset) -> CodecResult<String> {
        if let Some(id) = preset.first_non_finite() {
            return Err(CodecError::InvalidRecord(format!(
                "waymark {} has a non-finite coordinate",
                id.label()
            )));
        }

        let text = if self.pretty {
            serde_json::to_string_pretty(preset)?
        } else {
            serde_json::to_string(preset)?
        };
        Ok(text)
    }

    fn deserialize(&self, text: &str) -> CodecResult<Option<Preset>> {
        Ok(serde_json::from_str::<Option<Preset>>(text.trim())?)
    }
}
