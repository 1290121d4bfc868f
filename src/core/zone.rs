//! Zone identification.
//!
//! Every preset is tagged with the zone (map) it was placed in. Zones are
//! identified by the game's `u16` territory id and carry no other data here;
//! display names come from a [`ZoneNameLookup`](crate::sort::ZoneNameLookup).

use serde::{Deserialize, Serialize};

/// Zone identifier (the game's `MapID`).
///
/// Ordering on `ZoneId` is the numeric order of the raw id, which is what the
/// basic sort uses and what every other sort falls back to on ties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u16);

impl ZoneId {
    /// Create a new zone ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for ZoneId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}
