//! Waymark presets.
//!
//! A `Preset` is a user-authored set of eight field markers tagged with the
//! zone they belong to. The library only reads the zone for grouping and
//! otherwise treats presets as opaque values that are cloned on import.
//!
//! ## Text form
//!
//! Presets are exchanged between users as JSON objects:
//!
//! ```json
//! { "Name": "P1 spread", "MapID": 777, "Time": 1700000000,
//!   "A": { "X": 100.0, "Y": 0.0, "Z": 95.5, "Active": true }, ... }
//! ```
//!
//! Missing markers deserialize as inactive markers at the origin.

use serde::{Deserialize, Serialize};

use super::zone::ZoneId;

/// Number of field markers in a preset.
pub const WAYMARK_COUNT: usize = 8;

/// The eight field markers, in the order the game stores them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaymarkId {
    A,
    B,
    C,
    D,
    One,
    Two,
    Three,
    Four,
}

impl WaymarkId {
    /// All markers in storage order.
    pub const ALL: [WaymarkId; WAYMARK_COUNT] = [
        WaymarkId::A,
        WaymarkId::B,
        WaymarkId::C,
        WaymarkId::D,
        WaymarkId::One,
        WaymarkId::Two,
        WaymarkId::Three,
        WaymarkId::Four,
    ];

    /// Storage index of this marker.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Marker for a storage index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in game.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            WaymarkId::A => "A",
            WaymarkId::B => "B",
            WaymarkId::C => "C",
            WaymarkId::D => "D",
            WaymarkId::One => "1",
            WaymarkId::Two => "2",
            WaymarkId::Three => "3",
            WaymarkId::Four => "4",
        }
    }
}

/// A single field marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Waymark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default)]
    pub active: bool,
}

impl Waymark {
    /// Create an active marker at the given position.
    #[must_use]
    pub const fn at(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, active: true }
    }

    /// True when no coordinate is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A waymark preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PresetRepr", into = "PresetRepr")]
pub struct Preset {
    /// Display name (user editable).
    pub name: String,

    /// Zone the preset was placed in.
    pub map_id: ZoneId,

    /// Markers indexed by [`WaymarkId::index`].
    pub waymarks: [Waymark; WAYMARK_COUNT],

    /// Last-modified time in Unix seconds, 0 when unknown.
    pub timestamp: i64,
}

impl Preset {
    /// Create a preset with no active markers.
    pub fn new(name: impl Into<String>, map_id: ZoneId) -> Self {
        Self {
            name: name.into(),
            map_id,
            waymarks: [Waymark::default(); WAYMARK_COUNT],
            timestamp: 0,
        }
    }

    /// Set a marker.
    #[must_use]
    pub fn with_waymark(mut self, id: WaymarkId, waymark: Waymark) -> Self {
        self.set_waymark(id, waymark);
        self
    }

    /// Set the last-modified time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn waymark(&self, id: WaymarkId) -> &Waymark {
        &self.waymarks[id.index()]
    }

    pub fn set_waymark(&mut self, id: WaymarkId, waymark: Waymark) {
        self.waymarks[id.index()] = waymark;
    }

    /// Iterate over active markers.
    pub fn active_waymarks(&self) -> impl Iterator<Item = (WaymarkId, &Waymark)> {
        WaymarkId::ALL
            .iter()
            .zip(self.waymarks.iter())
            .filter(|(_, w)| w.active)
            .map(|(&id, w)| (id, w))
    }

    /// First marker with a NaN or infinite coordinate, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<WaymarkId> {
        WaymarkId::ALL
            .into_iter()
            .find(|id| !self.waymarks[id.index()].is_finite())
    }

    /// Number of active markers.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.waymarks.iter().filter(|w| w.active).count()
    }
}

/// Wire layout: one named field per marker.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PresetRepr {
    #[serde(default)]
    name: String,
    #[serde(rename = "MapID")]
    map_id: ZoneId,
    #[serde(default)]
    time: i64,
    #[serde(default)]
    a: Waymark,
    #[serde(default)]
    b: Waymark,
    #[serde(default)]
    c: Waymark,
    #[serde(default)]
    d: Waymark,
    #[serde(default)]
    one: Waymark,
    #[serde(default)]
    two: Waymark,
    #[serde(default)]
    three: Waymark,
    #[serde(default)]
    four: Waymark,
}

impl From<PresetRepr> for Preset {
    fn from(r: PresetRepr) -> Self {
        Self {
            name: r.name,
            map_id: r.map_id,
            waymarks: [r.a, r.b, r.c, r.d, r.one, r.two, r.three, r.four],
            timestamp: r.time,
        }
    }
}

impl From<Preset> for PresetRepr {
    fn from(p: Preset) -> Self {
        let [a, b, c, d, one, two, three, four] = p.waymarks;
        Self {
            name: p.name,
            map_id: p.map_id,
            time: p.timestamp,
            a,
            b,
            c,
            d,
            one,
            two,
            three,
            four,
        }
    }
}
