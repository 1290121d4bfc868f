//! User-defined zone ordering.
//!
//! `ZoneOrderList` is the ordered, duplicate-free list of zones behind the
//! custom sort. Earlier entries sort first. Zones not in the list are left to
//! the comparator to place (see [`crate::sort`]).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ZoneId;

/// Ordered list of zones with no duplicates.
///
/// ## Usage
///
/// ```
/// use waymark_library::core::ZoneId;
/// use waymark_library::zones::ZoneOrderList;
///
/// let (a, b, c) = (ZoneId::new(1), ZoneId::new(2), ZoneId::new(3));
/// let mut order = ZoneOrderList::new();
/// order.replace_all(vec![a, b, c], false);
///
/// // Move C to just before B
/// order.add_or_move(c, Some(b));
/// assert_eq!(order.as_slice(), &[a, c, b]);
///
/// // No anchor appends
/// order.add_or_move(ZoneId::new(4), None);
/// assert_eq!(order.len(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneOrderList {
    zones: Vec<ZoneId>,
}

impl ZoneOrderList {
    /// Create an empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `zone`, or move it if already present, to just before `before`.
    ///
    /// With no anchor, or an anchor not in the list, `zone` goes to the end.
    /// Does nothing when `before == Some(zone)`.
    pub fn add_or_move(&mut self, zone: ZoneId, before: Option<ZoneId>) {
        if before == Some(zone) {
            return;
        }

        let existing = self.position(zone);
        let anchor = before.and_then(|b| self.position(b));

        if let Some(i) = existing {
            self.zones.remove(i);
        }

        match anchor {
            None => self.zones.push(zone),
            Some(mut target) => {
                // Removal above shifted the anchor down by one.
                if existing.is_some_and(|i| i < target) {
                    target -= 1;
                }
                self.zones.insert(target, zone);
            }
        }
    }

    /// Remove `zone` if present. Returns whether it was present.
    pub fn remove(&mut self, zone: ZoneId) -> bool {
        match self.position(zone) {
            Some(i) => {
                self.zones.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove every zone.
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Replace the whole order, reversing it first if `descending`.
    ///
    /// The caller must supply a duplicate-free list.
    pub fn replace_all(&mut self, mut order: Vec<ZoneId>, descending: bool) {
        debug_assert!(
            {
                let mut seen = rustc_hash::FxHashSet::default();
                order.iter().all(|z| seen.insert(*z))
            },
            "custom zone order contains duplicates"
        );

        if descending {
            order.reverse();
        }
        self.zones = order;
    }

    /// Independent copy of the current order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ZoneId> {
        self.zones.clone()
    }

    /// Read-only view of the current order.
    #[must_use]
    pub fn as_slice(&self) -> &[ZoneId] {
        &self.zones
    }

    /// Position of `zone`, if listed.
    #[must_use]
    pub fn position(&self, zone: ZoneId) -> Option<usize> {
        self.zones.iter().position(|&z| z == zone)
    }

    #[must_use]
    pub fn contains(&self, zone: ZoneId) -> bool {
        self.zones.contains(&zone)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().copied()
    }

    /// Zone -> position lookup table for repeated comparisons.
    #[must_use]
    pub fn position_map(&self) -> FxHashMap<ZoneId, usize> {
        self.zones.iter().enumerate().map(|(i, &z)| (z, i)).collect()
    }
}
