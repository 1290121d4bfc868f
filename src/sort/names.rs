//! Zone display names for the alphabetical sort.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::core::ZoneId;

/// Source of zone display names.
///
/// Only the alphabetical sort asks for names. Returning `None` (or an empty
/// name) is allowed; such zones tie and fall back to numeric order.
pub trait ZoneNameLookup {
    fn zone_name(&self, zone: ZoneId) -> Option<Cow<'_, str>>;
}

/// Lookup that knows no names.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoZoneNames;

impl ZoneNameLookup for NoZoneNames {
    fn zone_name(&self, _zone: ZoneId) -> Option<Cow<'_, str>> {
        None
    }
}

/// In-memory name table.
///
/// ```
/// use waymark_library::core::ZoneId;
/// use waymark_library::sort::{ZoneNameLookup, ZoneNameTable};
///
/// let mut names = ZoneNameTable::new();
/// names.insert(ZoneId::new(777), "The Weapon's Refrain");
/// assert_eq!(names.zone_name(ZoneId::new(777)).as_deref(), Some("The Weapon's Refrain"));
/// assert!(names.zone_name(ZoneId::new(1)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneNameTable {
    names: FxHashMap<ZoneId, String>,
}

impl ZoneNameTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name for a zone, returning the previous one.
    pub fn insert(&mut self, zone: ZoneId, name: impl Into<String>) -> Option<String> {
        self.names.insert(zone, name.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(ZoneId, S)> for ZoneNameTable {
    fn from_iter<I: IntoIterator<Item = (ZoneId, S)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(z, n)| (z, n.into())).collect(),
        }
    }
}

impl ZoneNameLookup for ZoneNameTable {
    fn zone_name(&self, zone: ZoneId) -> Option<Cow<'_, str>> {
        self.names.get(&zone).map(|n| Cow::Borrowed(n.as_str()))
    }
}

impl<F> ZoneNameLookup for F
where
    F: Fn(ZoneId) -> Option<String>,
{
    fn zone_name(&self, zone: ZoneId) -> Option<Cow<'_, str>> {
        self(zone).map(Cow::Owned)
    }
}
