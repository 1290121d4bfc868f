//! Preset codecs: the collaborators that turn external data into presets.
//!
//! ## Key Types
//!
//! - `RecordParser`: External record -> `Preset` (`GamePresetParser` for the
//!   game's own preset slots)
//! - `TextCodec`: `Preset` <-> shareable text (`JsonCodec`)
//! - `CodecError`: Failures raised by either

pub mod error;
pub mod traits;
pub mod json;
pub mod game;

pub use error::{CodecError, CodecResult};
pub use traits::{RecordParser, TextCodec};
pub use json::JsonCodec;
pub use game::{GamePreset, GamePresetParser};
