//! Core types: zones, presets, configuration, and message lookup.

pub mod zone;
pub mod preset;
pub mod config;
pub mod message;

pub use zone::ZoneId;
pub use preset::{Preset, Waymark, WaymarkId, WAYMARK_COUNT};
pub use config::LibraryConfig;
pub use message::{DefaultMessages, MessageCatalog};
