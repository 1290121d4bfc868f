//! The preset library.
//!
//! `PresetLibrary` owns the presets in library order (the order the user
//! arranged them in, independent of any zone sort) together with the custom
//! zone order. The two are kept loosely in step:
//!
//! - Adding a preset for a zone not yet in a non-empty custom order appends
//!   that zone to the order.
//! - Removing the last preset of a zone drops the zone from the order.
//!
//! An empty custom order means the user never set one up, so imports leave it
//! empty. Zones may still appear in the order with no presets (the user can
//! add them explicitly) and presets may exist whose zone is unlisted.
//!
//! Positions are plain indices and are invalidated by any mutation.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{LibraryError, LibraryResult};
use super::grouping::{group_indices, ZoneGroups};
use crate::codec::{JsonCodec, RecordParser, TextCodec};
use crate::core::message::{IMPORTED_PRESET_NAME_FALLBACK, IMPORTED_PRESET_NAME_KEY};
use crate::core::{LibraryConfig, MessageCatalog, Preset, ZoneId};
use crate::sort::{ZoneComparer, ZoneNameLookup, ZoneSortType};
use crate::zones::ZoneOrderList;

/// Ordered collection of presets plus the custom zone order.
///
/// ## Usage
///
/// ```
/// use waymark_library::core::{Preset, ZoneId};
/// use waymark_library::library::PresetLibrary;
/// use waymark_library::sort::{NoZoneNames, ZoneSortType};
///
/// let mut library = PresetLibrary::new();
/// library.import_preset(&Preset::new("x", ZoneId::new(20)));
/// library.import_preset(&Preset::new("y", ZoneId::new(10)));
/// library.import_preset(&Preset::new("z", ZoneId::new(20)));
///
/// let groups = library.sorted_indices(ZoneSortType::Basic, &NoZoneNames);
/// assert_eq!(groups.get(ZoneId::new(10)), Some(&[1][..]));
/// assert_eq!(groups.get(ZoneId::new(20)), Some(&[0, 2][..]));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PresetLibrary {
    #[serde(default)]
    presets: Vector<Preset>,

    #[serde(default)]
    custom_sort_order: ZoneOrderList,

    #[serde(default)]
    sort_descending: bool,

    #[serde(skip)]
    config: LibraryConfig,
}

impl PresetLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty library with the given configuration.
    #[must_use]
    pub fn with_config(config: LibraryConfig) -> Self {
        Self {
            sort_descending: config.sort_descending,
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Replace the configuration. Does not touch the current sort direction.
    pub fn set_config(&mut self, config: LibraryConfig) {
        self.config = config;
    }

    // === Inspection ===

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    /// Iterate over presets in library order.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// O(1) copy of the presets in library order.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Preset> {
        self.presets.clone()
    }

    /// Distinct zones in order of first appearance.
    #[must_use]
    pub fn zones(&self) -> Vec<ZoneId> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.presets
            .iter()
            .map(|p| p.map_id)
            .filter(|z| seen.insert(*z))
            .collect()
    }

    /// Number of presets in `zone`.
    #[must_use]
    pub fn count_in_zone(&self, zone: ZoneId) -> usize {
        self.presets.iter().filter(|p| p.map_id == zone).count()
    }

    fn zone_in_use(&self, zone: ZoneId) -> bool {
        self.presets.iter().any(|p| p.map_id == zone)
    }

    // === Import / export ===

    /// Append a copy of `preset`. Returns its position.
    pub fn import_preset(&mut self, preset: &Preset) -> usize {
        self.append(preset.clone())
    }

    /// Convert an external record and append it under the default
    /// imported-preset name.
    pub fn try_import_record<P: RecordParser>(
        &mut self,
        parser: &P,
        record: &P::Record,
        messages: &dyn MessageCatalog,
    ) -> LibraryResult<usize> {
        let mut preset = parser.parse(record).map_err(LibraryError::Conversion)?;
        preset.name = self.imported_name(messages);
        Ok(self.append(preset))
    }

    /// [`try_import_record`](Self::try_import_record), logging failures.
    ///
    /// Returns `None` if the record could not be converted.
    pub fn import_record<P: RecordParser>(
        &mut self,
        parser: &P,
        record: &P::Record,
        messages: &dyn MessageCatalog,
    ) -> Option<usize> {
        self.try_import_record(parser, record, messages)
            .map_err(|e| warn!(error = %e, "Error in PresetLibrary::import_record"))
            .ok()
    }

    /// Decode `text` and append the result.
    pub fn try_import_text<C: TextCodec>(&mut self, codec: &C, text: &str) -> LibraryResult<usize> {
        let preset = codec
            .deserialize(text)
            .map_err(LibraryError::Deserialization)?
            .ok_or(LibraryError::EmptyDeserialization)?;
        Ok(self.append(preset))
    }

    /// [`try_import_text`](Self::try_import_text), logging failures.
    ///
    /// Returns `None` if the text did not decode to a preset.
    pub fn import_text<C: TextCodec>(&mut self, codec: &C, text: &str) -> Option<usize> {
        self.try_import_text(codec, text)
            .map_err(|e| warn!(error = %e, "Error in PresetLibrary::import_text"))
            .ok()
    }

    /// Import a preset shared as JSON.
    pub fn import_json(&mut self, text: &str) -> Option<usize> {
        self.import_text(&JsonCodec::new(), text)
    }

    /// Encode the preset at `index`.
    pub fn export<C: TextCodec>(&self, codec: &C, index: usize) -> LibraryResult<String> {
        let preset = self.presets.get(index).ok_or(LibraryError::InvalidIndex {
            index,
            len: self.presets.len(),
        })?;
        codec.serialize(preset).map_err(LibraryError::Serialization)
    }

    /// Encode the preset at `index` as JSON.
    pub fn export_json(&self, index: usize) -> LibraryResult<String> {
        self.export(&JsonCodec::new(), index)
    }

    fn imported_name(&self, messages: &dyn MessageCatalog) -> String {
        match &self.config.imported_preset_name {
            Some(name) => name.clone(),
            None => messages.localize(IMPORTED_PRESET_NAME_KEY, IMPORTED_PRESET_NAME_FALLBACK),
        }
    }

    fn append(&mut self, preset: Preset) -> usize {
        let zone = preset.map_id;
        self.presets.push_back(preset);
        self.track_zone(zone);

        let index = self.presets.len() - 1;
        debug!(index, zone = zone.raw(), "Imported preset");
        index
    }

    /// Append `zone` to the custom order if one is in use and lacks it.
    fn track_zone(&mut self, zone: ZoneId) {
        if !self.custom_sort_order.is_empty() && !self.custom_sort_order.contains(zone) {
            self.custom_sort_order.add_or_move(zone, None);
        }
    }

    /// Drop `zone` from the custom order if no preset uses it anymore.
    fn untrack_zone(&mut self, zone: ZoneId) {
        if !self.zone_in_use(zone) {
            self.custom_sort_order.remove(zone);
        }
    }

    // === Editing ===

    /// Remove the preset at `index`. Returns whether anything was removed.
    pub fn delete(&mut self, index: usize) -> bool {
        if index >= self.presets.len() {
            return false;
        }

        let removed = self.presets.remove(index);
        self.untrack_zone(removed.map_id);
        debug!(index, zone = removed.map_id.raw(), "Deleted preset");
        true
    }

    /// Move the preset at `from` to `to`, or to just after `to` if
    /// `place_after`.
    ///
    /// `to` may be `len()` (move to end) unless `place_after`, in which case
    /// it must name an existing preset. Returns the preset's new position, or
    /// `None` without changing anything if an index is out of range.
    pub fn move_preset(&mut self, from: usize, to: usize, place_after: bool) -> Option<usize> {
        let len = self.presets.len();
        let max_to = if place_after { len.checked_sub(1)? } else { len };
        if from >= len || to > max_to {
            return None;
        }
        if to == from {
            return Some(from);
        }

        let preset = self.presets.remove(from);
        let mut target = to;
        // Positions after `from` shifted down by the removal.
        if target > from {
            target -= 1;
        }
        if place_after {
            target += 1;
        }
        self.presets.insert(target, preset);

        debug!(from, to = target, "Moved preset");
        Some(target)
    }

    /// Rename the preset at `index`.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.presets.get_mut(index) {
            Some(preset) => {
                preset.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Change the zone of the preset at `index`, keeping the custom order in
    /// step the same way import and delete do.
    pub fn set_zone(&mut self, index: usize, zone: ZoneId) -> bool {
        let Some(preset) = self.presets.get_mut(index) else {
            return false;
        };
        let old = std::mem::replace(&mut preset.map_id, zone);
        if old != zone {
            self.track_zone(zone);
            self.untrack_zone(old);
        }
        true
    }

    // === Custom zone order ===

    /// Read-only view of the custom zone order.
    #[must_use]
    pub fn custom_order(&self) -> &ZoneOrderList {
        &self.custom_sort_order
    }

    /// Copy of the custom zone order.
    #[must_use]
    pub fn custom_sort_order(&self) -> Vec<ZoneId> {
        self.custom_sort_order.snapshot()
    }

    /// Add `zone` to the custom order, or move it, to just before
    /// `place_before` (or to the end).
    pub fn add_or_change_custom_sort_entry(&mut self, zone: ZoneId, place_before: Option<ZoneId>) {
        self.custom_sort_order.add_or_move(zone, place_before);
    }

    pub fn remove_custom_sort_entry(&mut self, zone: ZoneId) {
        self.custom_sort_order.remove(zone);
    }

    pub fn clear_custom_sort_order(&mut self) {
        self.custom_sort_order.clear();
    }

    /// Replace the custom order. `order` must not contain duplicates.
    pub fn set_custom_sort_order(&mut self, order: Vec<ZoneId>, descending: bool) {
        self.custom_sort_order.replace_all(order, descending);
    }

    // === Sorting ===

    #[must_use]
    pub fn zone_sort_descending(&self) -> bool {
        self.sort_descending
    }

    /// Set the direction used by every zone sort from now on.
    pub fn set_zone_sort_descending(&mut self, descending: bool) {
        self.sort_descending = descending;
    }

    /// Comparator for `sort_type` in the current direction.
    pub fn comparer<'a>(
        &'a self,
        sort_type: ZoneSortType,
        names: &'a dyn ZoneNameLookup,
    ) -> ZoneComparer<'a> {
        ZoneComparer::new(sort_type, self.sort_descending, names, &self.custom_sort_order)
    }

    /// Preset positions grouped by zone, zones ordered by `sort_type`.
    pub fn sorted_indices(&self, sort_type: ZoneSortType, names: &dyn ZoneNameLookup) -> ZoneGroups {
        group_indices(&self.presets, &self.comparer(sort_type, names))
    }

    /// Set the sort direction, then group.
    ///
    /// The direction change sticks for later queries.
    pub fn sorted_indices_with_direction(
        &mut self,
        sort_type: ZoneSortType,
        descending: bool,
        names: &dyn ZoneNameLookup,
    ) -> ZoneGroups {
        self.set_zone_sort_descending(descending);
        self.sorted_indices(sort_type, names)
    }

    /// Group using the configured default sort.
    pub fn sorted_indices_default(&self, names: &dyn ZoneNameLookup) -> ZoneGroups {
        self.sorted_indices(self.config.default_sort, names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecError, CodecResult, GamePreset, GamePresetParser};
    use crate::core::DefaultMessages;
    use crate::sort::NoZoneNames;

    const A: ZoneId = ZoneId::new(10);
    const B: ZoneId = ZoneId::new(20);
    const C: ZoneId = ZoneId::new(30);

    fn library(zones: &[ZoneId]) -> PresetLibrary {
        let mut library = PresetLibrary::new();
        for (i, &zone) in zones.iter().enumerate() {
            library.import_preset(&Preset::new(format!("p{i}"), zone));
        }
        library
    }

    fn names(library: &PresetLibrary) -> Vec<&str> {
        library.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_import_returns_previous_length() {
        let mut library = library(&[A, B]);
        let index = library.import_preset(&Preset::new("new", C));
        assert_eq!(index, 2);
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn test_import_copies() {
        let mut library = PresetLibrary::new();
        let mut preset = Preset::new("original", A);
        library.import_preset(&preset);
        preset.name = "changed".into();
        assert_eq!(library.get(0).unwrap().name, "original");
    }

    #[test]
    fn test_import_leaves_unused_custom_order_empty() {
        let library = library(&[A, B]);
        assert!(library.custom_order().is_empty());
    }

    #[test]
    fn test_import_appends_new_zone_to_custom_order() {
        let mut library = library(&[A]);
        library.set_custom_sort_order(vec![B, A], false);

        library.import_preset(&Preset::new("c", C));
        library.import_preset(&Preset::new("a2", A));

        assert_eq!(library.custom_sort_order(), vec![B, A, C]);
    }

    #[test]
    fn test_import_record_uses_default_name() {
        let mut library = PresetLibrary::new();
        let record = GamePreset {
            territory_id: 777,
            ..Default::default()
        };

        let index = library.import_record(&GamePresetParser, &record, &DefaultMessages);

        assert_eq!(index, Some(0));
        assert_eq!(library.get(0).unwrap().name, "Imported");
        assert_eq!(library.get(0).unwrap().map_id, ZoneId::new(777));
    }

    #[test]
    fn test_import_record_name_from_config() {
        let mut library = PresetLibrary::with_config(LibraryConfig::default().with_imported_name("Game"));
        let record = GamePreset {
            territory_id: 5,
            ..Default::default()
        };
        library.import_record(&GamePresetParser, &record, &DefaultMessages);
        assert_eq!(library.get(0).unwrap().name, "Game");
    }

    #[test]
    fn test_import_record_failure() {
        let mut library = library(&[A]);
        let record = GamePreset::default();

        assert_eq!(library.import_record(&GamePresetParser, &record, &DefaultMessages), None);
        assert!(matches!(
            library.try_import_record(&GamePresetParser, &record, &DefaultMessages),
            Err(LibraryError::Conversion(_))
        ));
        assert_eq!(library.len(), 1);
    }

    struct NullCodec;

    impl TextCodec for NullCodec {
        fn serialize(&self, _preset: &Preset) -> CodecResult<String> {
            Err(CodecError::InvalidRecord("unsupported".into()))
        }

        fn deserialize(&self, _text: &str) -> CodecResult<Option<Preset>> {
            Ok(None)
        }
    }

    #[test]
    fn test_import_text_absent_result() {
        let mut library = PresetLibrary::new();
        assert!(matches!(
            library.try_import_text(&NullCodec, "anything"),
            Err(LibraryError::EmptyDeserialization)
        ));
        assert_eq!(library.import_json("null"), None);
        assert_eq!(library.import_json("not json"), None);
        assert!(library.is_empty());
    }

    #[test]
    fn test_export_errors() {
        let library = library(&[A]);
        assert!(matches!(
            library.export_json(1),
            Err(LibraryError::InvalidIndex { index: 1, len: 1 })
        ));
        assert!(matches!(
            library.export(&NullCodec, 0),
            Err(LibraryError::Serialization(_))
        ));
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut library = library(&[A, B]);
        let text = library.export_json(1).unwrap();
        let index = library.import_json(&text).unwrap();
        assert_eq!(library.get(index), library.get(1));
    }

    #[test]
    fn test_delete_last_of_zone_cleans_custom_order() {
        let mut library = library(&[A, B, B]);
        library.set_custom_sort_order(vec![A, B], false);

        assert!(library.delete(0));
        assert_eq!(library.custom_sort_order(), vec![B]);

        // B still has a preset after one delete.
        assert!(library.delete(0));
        assert_eq!(library.custom_sort_order(), vec![B]);
        assert!(library.delete(0));
        assert!(library.custom_sort_order().is_empty());
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut library = library(&[A, B]);
        assert!(!library.delete(2));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_move_forward() {
        let mut library = library(&[A, A, A, A]);
        // Before p2: lands at 1 after the removal shift.
        assert_eq!(library.move_preset(0, 2, false), Some(1));
        assert_eq!(names(&library), vec!["p1", "p0", "p2", "p3"]);
    }

    #[test]
    fn test_move_forward_place_after() {
        let mut library = library(&[A, A, A, A]);
        assert_eq!(library.move_preset(0, 2, true), Some(2));
        assert_eq!(names(&library), vec!["p1", "p2", "p0", "p3"]);
    }

    #[test]
    fn test_move_backward() {
        let mut library = library(&[A, A, A, A]);
        assert_eq!(library.move_preset(3, 1, false), Some(1));
        assert_eq!(names(&library), vec!["p0", "p3", "p1", "p2"]);

        assert_eq!(library.move_preset(3, 0, true), Some(1));
        assert_eq!(names(&library), vec!["p0", "p2", "p3", "p1"]);
    }

    #[test]
    fn test_move_to_end() {
        let mut library = library(&[A, A, A]);
        assert_eq!(library.move_preset(0, 3, false), Some(2));
        assert_eq!(names(&library), vec!["p1", "p2", "p0"]);

        assert_eq!(library.move_preset(0, 2, true), Some(2));
        assert_eq!(names(&library), vec!["p2", "p0", "p1"]);
    }

    #[test]
    fn test_move_invalid() {
        let mut library = library(&[A, A, A]);
        assert_eq!(library.move_preset(3, 0, false), None);
        assert_eq!(library.move_preset(0, 4, false), None);
        assert_eq!(library.move_preset(0, 3, true), None);
        assert_eq!(names(&library), vec!["p0", "p1", "p2"]);

        assert_eq!(PresetLibrary::new().move_preset(0, 0, true), None);
    }

    #[test]
    fn test_move_identity() {
        let mut library = library(&[A, B, C]);
        for k in 0..3 {
            assert_eq!(library.move_preset(k, k, false), Some(k));
        }
        assert_eq!(names(&library), vec!["p0", "p1", "p2"]);
    }

    #[test]
    fn test_rename() {
        let mut library = library(&[A]);
        assert!(library.rename(0, "Renamed"));
        assert!(!library.rename(1, "Nope"));
        assert_eq!(library.get(0).unwrap().name, "Renamed");
    }

    #[test]
    fn test_set_zone_syncs_custom_order() {
        let mut library = library(&[A, B]);
        library.set_custom_sort_order(vec![A, B], false);

        assert!(library.set_zone(0, C));
        assert_eq!(library.get(0).unwrap().map_id, C);
        assert_eq!(library.custom_sort_order(), vec![B, C]);

        assert!(!library.set_zone(5, A));
    }

    #[test]
    fn test_zones_and_counts() {
        let library = library(&[B, A, B, C]);
        assert_eq!(library.zones(), vec![B, A, C]);
        assert_eq!(library.count_in_zone(B), 2);
        assert_eq!(library.count_in_zone(ZoneId::new(99)), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut library = library(&[A, B]);
        let snapshot = library.snapshot();
        library.delete(0);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_sorted_indices_with_direction_sticks() {
        let mut library = library(&[B, A, B]);

        let groups = library.sorted_indices_with_direction(ZoneSortType::Basic, true, &NoZoneNames);
        assert_eq!(groups.zones().collect::<Vec<_>>(), vec![B, A]);
        assert!(library.zone_sort_descending());

        let groups = library.sorted_indices(ZoneSortType::Basic, &NoZoneNames);
        assert_eq!(groups.zones().collect::<Vec<_>>(), vec![B, A]);
    }

    #[test]
    fn test_config_initial_direction_and_default_sort() {
        let config = LibraryConfig::default()
            .with_descending(true)
            .with_default_sort(ZoneSortType::Custom);
        let mut library = PresetLibrary::with_config(config);
        library.import_preset(&Preset::new("a", A));
        library.import_preset(&Preset::new("b", B));
        library.set_custom_sort_order(vec![A, B], false);

        let zones: Vec<_> = library.sorted_indices_default(&NoZoneNames).zones().collect();
        assert_eq!(zones, vec![B, A]);
    }

    #[test]
    fn test_serialization() {
        let mut library = library(&[A, B]);
        library.set_custom_sort_order(vec![B, A], false);

        let json = serde_json::to_string(&library).unwrap();
        let deserialized: PresetLibrary = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.snapshot(), library.snapshot());
        assert_eq!(deserialized.custom_sort_order(), vec![B, A]);
    }

    #[test]
    fn test_missing_presets_deserialize_empty() {
        let library: PresetLibrary = serde_json::from_str("{}").unwrap();
        assert!(library.is_empty());
        assert!(library.custom_order().is_empty());
    }
}
