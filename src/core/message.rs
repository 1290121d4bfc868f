//! User-facing message lookup.
//!
//! The library never formats text for display on its own. Default preset
//! names and error messages go through a `MessageCatalog` so the host can
//! supply translations; `DefaultMessages` just returns the English fallback.

/// Key for the name given to presets imported from the game.
pub const IMPORTED_PRESET_NAME_KEY: &str = "Default Preset Name (Imported)";

/// Fallback name for presets imported from the game.
pub const IMPORTED_PRESET_NAME_FALLBACK: &str = "Imported";

/// Key for the invalid export index message.
pub const EXPORT_INVALID_INDEX_KEY: &str = "Export Preset Fallback Error";

/// Fallback for the invalid export index message. `{0}` is the index.
pub const EXPORT_INVALID_INDEX_FALLBACK: &str =
    "Invalid index requested for preset export. No preset exists at index {0}.";

/// Source of localized strings.
pub trait MessageCatalog {
    /// Look up `key`, returning `fallback` if no translation exists.
    fn localize(&self, key: &str, fallback: &str) -> String;
}

/// Catalog that always returns the fallback text.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn localize(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

impl<F> MessageCatalog for F
where
    F: Fn(&str) -> Option<String>,
{
    fn localize(&self, key: &str, fallback: &str) -> String {
        self(key).unwrap_or_else(|| fallback.to_string())
    }
}

/// Substitute positional `{0}`, `{1}`, ... placeholders.
#[must_use]
pub fn format_positional(template: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), &arg.to_string());
    }
    out
}
