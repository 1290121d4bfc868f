//! Zone ordering.
//!
//! ## Key Types
//!
//! - `ZoneId`: Zone identifier (from `core::zone`)
//! - `ZoneOrderList`: User-defined, duplicate-free zone order behind the
//!   custom sort

pub mod order;

pub use order::ZoneOrderList;

// Re-export zone id from core for convenience
pub use crate::core::zone::ZoneId;
