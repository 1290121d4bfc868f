//! The game's native preset slot.
//!
//! The game stores each saved preset as a fixed-size record: eight marker
//! positions in integer thousandths, a bitmask of which markers are placed,
//! the territory id, and a save timestamp. Callers read the raw bytes out of
//! game memory; this module only decodes them and converts to [`Preset`].

use serde::{Deserialize, Serialize};

use super::error::{CodecError, CodecResult};
use super::traits::RecordParser;
use crate::core::{Preset, Waymark, ZoneId, WAYMARK_COUNT};

/// Scale between stored integer coordinates and world units.
const COORDINATE_SCALE: f32 = 1000.0;

/// One preset slot as the game stores it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePreset {
    /// Marker positions (x, y, z) in thousandths.
    pub markers: [[i32; 3]; WAYMARK_COUNT],

    /// Bit `i` set when marker `i` is placed.
    pub active_mask: u8,

    /// Territory the preset belongs to. 0 means unset.
    pub territory_id: u16,

    /// Save time in Unix seconds.
    pub timestamp: i32,
}

impl GamePreset {
    /// Decode a raw slot.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode to the raw slot layout.
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index < WAYMARK_COUNT && self.active_mask & (1 << index) != 0
    }
}

/// Scale a world coordinate into the slot's integer thousandths.
///
/// The `i32` cast saturates, so anything outside its range (NaN included) is
/// rejected up front.
fn scale_coordinate(value: f32) -> CodecResult<i32> {
    let scaled = (value * COORDINATE_SCALE).round();
    // i32::MAX is not representable as f32; the bound is 2^31.
    if !(-2_147_483_648.0..2_147_483_648.0).contains(&scaled) {
        return Err(CodecError::InvalidRecord(format!(
            "coordinate {value} does not fit a preset slot"
        )));
    }
    Ok(scaled as i32)
}

/// Convert a preset back into a slot for writing to the game.
///
/// Fails when the preset has no zone, a timestamp outside `0..=i32::MAX`, or
/// a coordinate the slot can't hold. Precision below a thousandth is lost.
impl TryFrom<&Preset> for GamePreset {
    type Error = CodecError;

    fn try_from(preset: &Preset) -> CodecResult<Self> {
        if preset.map_id.raw() == 0 {
            return Err(CodecError::InvalidRecord("preset has no territory".into()));
        }
        let timestamp = i32::try_from(preset.timestamp)
            .ok()
            .filter(|t| *t >= 0)
            .ok_or_else(|| {
                CodecError::InvalidRecord(format!(
                    "timestamp {} does not fit a preset slot",
                    preset.timestamp
                ))
            })?;

        let mut record = GamePreset {
            territory_id: preset.map_id.raw(),
            timestamp,
            ..Default::default()
        };
        for (i, waymark) in preset.waymarks.iter().enumerate() {
            record.markers[i] = [
                scale_coordinate(waymark.x)?,
                scale_coordinate(waymark.y)?,
                scale_coordinate(waymark.z)?,
            ];
            if waymark.active {
                record.active_mask |= 1 << i;
            }
        }
        Ok(record)
    }
}

/// Converts game slots into presets.
#[derive(Clone, Copy, Debug, Default)]
pub struct GamePresetParser;

impl RecordParser for GamePresetParser {
    type Record = GamePreset;

    fn parse(&self, record: &GamePreset) -> CodecResult<Preset> {
        if record.territory_id == 0 {
            return Err(CodecError::InvalidRecord("preset has no territory".into()));
        }
        if record.timestamp < 0 {
            return Err(CodecError::InvalidRecord(format!(
                "negative timestamp {}",
                record.timestamp
            )));
        }

        let mut preset = Preset::new(String::new(), ZoneId::new(record.territory_id))
            .with_timestamp(i64::from(record.timestamp));
        for (i, [x, y, z]) in record.markers.iter().copied().enumerate() {
            preset.waymarks[i] = Waymark {
                x: x as f32 / COORDINATE_SCALE,
                y: y as f32 / COORDINATE_SCALE,
                z: z as f32 / COORDINATE_SCALE,
                active: record.is_active(i),
            };
        }
        Ok(preset)
    }
}
