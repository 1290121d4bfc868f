//! Zone sort strategies.
//!
//! Each strategy is a total order over zone ids. The shared `descending`
//! flag reverses the comparator result, never the data, so every strategy
//! flips the same way.

use std::cmp::Ordering;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::names::ZoneNameLookup;
use crate::core::ZoneId;
use crate::zones::ZoneOrderList;

/// Which zone sort to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneSortType {
    /// Numeric zone id order.
    #[default]
    #[serde(alias = "numeric")]
    Basic,
    /// Zone display name order.
    Alphabetical,
    /// User-defined order from a [`ZoneOrderList`].
    Custom,
}

impl ZoneSortType {
    pub const ALL: [ZoneSortType; 3] = [
        ZoneSortType::Basic,
        ZoneSortType::Alphabetical,
        ZoneSortType::Custom,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneSortType::Basic => "basic",
            ZoneSortType::Alphabetical => "alphabetical",
            ZoneSortType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ZoneSortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized sort name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown zone sort type: {0:?}")]
pub struct UnknownSortType(pub String);

impl FromStr for ZoneSortType {
    type Err = UnknownSortType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "numeric" => Ok(ZoneSortType::Basic),
            "alphabetical" => Ok(ZoneSortType::Alphabetical),
            "custom" => Ok(ZoneSortType::Custom),
            _ => Err(UnknownSortType(s.to_string())),
        }
    }
}

/// Numeric zone id order.
#[must_use]
pub fn compare_numeric(a: ZoneId, b: ZoneId) -> Ordering {
    a.raw().cmp(&b.raw())
}

/// Case-insensitive name order, numeric on ties.
///
/// Missing names compare as empty strings.
#[must_use]
pub fn compare_alphabetical(a: ZoneId, b: ZoneId, names: &dyn ZoneNameLookup) -> Ordering {
    let name_a = names.zone_name(a).map(|n| n.to_lowercase()).unwrap_or_default();
    let name_b = names.zone_name(b).map(|n| n.to_lowercase()).unwrap_or_default();
    name_a
        .cmp(&name_b)
        .then_with(|| compare_numeric(a, b))
}

/// Position order in the custom list.
///
/// Listed zones come before unlisted ones. Two unlisted zones fall back to
/// numeric order.
#[must_use]
pub fn compare_custom(a: ZoneId, b: ZoneId, positions: &FxHashMap<ZoneId, usize>) -> Ordering {
    match (positions.get(&a), positions.get(&b)) {
        (Some(pa), Some(pb)) => pa.cmp(pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_numeric(a, b),
    }
}

/// Comparator for one sort type and direction.
///
/// Built per query; holds a position table for the custom order so each
/// comparison is a hash lookup rather than a list scan.
pub struct ZoneComparer<'a> {
    sort_type: ZoneSortType,
    descending: bool,
    names: &'a dyn ZoneNameLookup,
    positions: FxHashMap<ZoneId, usize>,
}

impl<'a> ZoneComparer<'a> {
    pub fn new(
        sort_type: ZoneSortType,
        descending: bool,
        names: &'a dyn ZoneNameLookup,
        custom_order: &ZoneOrderList,
    ) -> Self {
        let positions = match sort_type {
            ZoneSortType::Custom => custom_order.position_map(),
            _ => FxHashMap::default(),
        };
        Self {
            sort_type,
            descending,
            names,
            positions,
        }
    }

    #[must_use]
    pub fn sort_type(&self) -> ZoneSortType {
        self.sort_type
    }

    #[must_use]
    pub fn descending(&self) -> bool {
        self.descending
    }

    pub fn compare(&self, a: ZoneId, b: ZoneId) -> Ordering {
        let ordering = match self.sort_type {
            ZoneSortType::Basic => compare_numeric(a, b),
            ZoneSortType::Alphabetical => compare_alphabetical(a, b, self.names),
            ZoneSortType::Custom => compare_custom(a, b, &self.positions),
        };

        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}
