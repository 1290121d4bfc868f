//! Zone sort strategies.
//!
//! ## Key Types
//!
//! - `ZoneSortType`: Closed set of strategies (basic, alphabetical, custom),
//!   selectable by name
//! - `ZoneComparer`: Total-order comparator for one strategy and direction
//! - `ZoneNameLookup`: Display names consulted by the alphabetical sort

pub mod names;
pub mod strategy;

pub use names::{NoZoneNames, ZoneNameLookup, ZoneNameTable};
pub use strategy::{
    compare_alphabetical, compare_custom, compare_numeric, UnknownSortType, ZoneComparer,
    ZoneSortType,
};
