//! The preset library and its zone grouping.
//!
//! ## Key Types
//!
//! - `PresetLibrary`: Presets in library order plus the custom zone order
//! - `ZoneGroups`: Preset positions grouped by zone, in sort order
//! - `LibraryError`: Failures reported by `try_*` operations and `export`
//!
//! ## Failure reporting
//!
//! Editing operations never panic on bad input. Out-of-range positions give
//! `false`/`None`, and imports that fail give `None` after logging a warning.
//! The `try_import_*` variants return the error instead.

pub mod collection;
pub mod error;
pub mod grouping;

pub use collection::PresetLibrary;
pub use error::{LibraryError, LibraryResult};
pub use grouping::{group_indices, ZoneGroups, ZoneIndices};
