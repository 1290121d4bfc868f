//! Grouping preset positions by zone.
//!
//! Groups are keyed by zone and ordered by a [`ZoneComparer`]. Positions
//! inside a group stay in library order.

use smallvec::SmallVec;

use crate::core::{Preset, ZoneId};
use crate::sort::ZoneComparer;

/// Positions of the presets in one zone, ascending.
pub type ZoneIndices = SmallVec<[usize; 4]>;

/// Preset positions grouped by zone, groups in sort order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneGroups {
    groups: Vec<(ZoneId, ZoneIndices)>,
}

impl ZoneGroups {
    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Positions for `zone`, if any preset uses it.
    #[must_use]
    pub fn get(&self, zone: ZoneId) -> Option<&[usize]> {
        self.groups
            .iter()
            .find(|(z, _)| *z == zone)
            .map(|(_, indices)| indices.as_slice())
    }

    /// Zones in sort order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.groups.iter().map(|(z, _)| *z)
    }

    /// `(zone, positions)` in sort order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &[usize])> {
        self.groups.iter().map(|(z, indices)| (*z, indices.as_slice()))
    }

    /// Total positions across all groups.
    #[must_use]
    pub fn total_presets(&self) -> usize {
        self.groups.iter().map(|(_, indices)| indices.len()).sum()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(ZoneId, ZoneIndices)> {
        self.groups
    }
}

/// Group the positions of `presets` by zone.
///
/// Single pass in library order. A zone's group is created in its sorted
/// slot the first time the zone is seen.
pub fn group_indices<'p, I>(presets: I, comparer: &ZoneComparer<'_>) -> ZoneGroups
where
    I: IntoIterator<Item = &'p Preset>,
{
    let mut groups: Vec<(ZoneId, ZoneIndices)> = Vec::new();

    for (index, preset) in presets.into_iter().enumerate() {
        let zone = preset.map_id;
        match groups.binary_search_by(|(z, _)| comparer.compare(*z, zone)) {
            Ok(slot) => groups[slot].1.push(index),
            Err(slot) => {
                let mut indices = ZoneIndices::new();
                indices.push(index);
                groups.insert(slot, (zone, indices));
            }
        }
    }

    ZoneGroups { groups }
}
