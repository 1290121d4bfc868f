//! # waymark-library
//!
//! An in-memory library of waymark presets, grouped and sorted by zone.
//!
//! ## Design Principles
//!
//! 1. **Library order is canonical**: Presets live in the order the user
//!    arranged them. Zone sorting only produces views over positions; no
//!    sorted state is stored.
//!
//! 2. **Total operations**: Bad positions and malformed imports are reported
//!    through return values (and a `tracing` warning for imports), never
//!    panics.
//!
//! 3. **Closed set of sorts**: Basic, alphabetical, and custom zone sorts are
//!    an enum dispatched to plain comparison functions.
//!
//! ## Modules
//!
//! - `core`: Zone ids, presets, configuration, message lookup
//! - `zones`: The user-defined zone order
//! - `sort`: Zone sort strategies and zone names
//! - `codec`: Game record parsing and JSON sharing
//! - `library`: The preset library and zone grouping
//!
//! ## Threading
//!
//! Everything here is synchronous and unsynchronized. Share a library across
//! threads behind a single lock.

pub mod core;
pub mod zones;
pub mod sort;
pub mod codec;
pub mod library;

// Re-export commonly used types
pub use crate::core::{
    ZoneId, Preset, Waymark, WaymarkId,
    LibraryConfig, MessageCatalog, DefaultMessages,
};

pub use crate::zones::ZoneOrderList;

pub use crate::sort::{ZoneSortType, ZoneComparer, ZoneNameLookup, ZoneNameTable, NoZoneNames};

pub use crate::codec::{
    CodecError, RecordParser, TextCodec,
    JsonCodec, GamePreset, GamePresetParser,
};

pub use crate::library::{PresetLibrary, ZoneGroups, LibraryError, LibraryResult};
