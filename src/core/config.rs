//! Library configuration.

use serde::{Deserialize, Serialize};

use crate::sort::ZoneSortType;

/// Library configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Name given to presets imported from the game.
    /// `None` uses the localized default ("Imported").
    pub imported_preset_name: Option<String>,

    /// Initial zone sort direction.
    pub sort_descending: bool,

    /// Sort used by callers that don't pick one explicitly.
    pub default_sort: ZoneSortType,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            imported_preset_name: None,
            sort_descending: false,
            default_sort: ZoneSortType::Basic,
        }
    }
}

impl LibraryConfig {
    /// Override the imported preset name.
    #[must_use]
    pub fn with_imported_name(mut self, name: impl Into<String>) -> Self {
        self.imported_preset_name = Some(name.into());
        self
    }

    /// Set the initial sort direction.
    #[must_use]
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.sort_descending = descending;
        self
    }

    /// Set the default sort.
    #[must_use]
    pub fn with_default_sort(mut self, sort: ZoneSortType) -> Self {
        self.default_sort = sort;
        self
    }
}
