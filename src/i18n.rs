//! Message lookup.
//!
//! Locale files follow the i18next layout used by the host: a JSON object with
//! a `content` table of keys. Plain keys are looked up under `content.`;
//! `{{name}}` placeholders are filled from the supplied parameters. Unknown keys
//! render as the key itself so a missing catalog never hides an outcome.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Maps a message key plus named parameters to display text.
pub trait Translator {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String;
}

/// Translator that always answers with the raw key.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyOnly;

impl Translator for KeyOnly {
    fn translate(&self, key: &str, _params: &[(&str, String)]) -> String {
        key.to_string()
    }
}

/// Keys the exporter and plugin hooks render.
pub mod keys {
    pub const NO_ITEMS_SELECTED: &str = "noItemsSelected";
    pub const NO_ITEMS_SELECTED_ON_LOAD: &str = "noItemsSelectedOnLoad";
    pub const EXPORT_CANCELED: &str = "exportCanceled";
    pub const EXPORT_FAILED: &str = "exportFailed";
    pub const EXPORTING_LINKS: &str = "exportingLinks";
    pub const EXPORT_SUCCESS: &str = "exportSuccess";
    pub const EXPORT_WITH_ERRORS: &str = "exportWithErrors";
    pub const ERRORS_TITLE: &str = "errorsTitle";
    pub const MISSING_FILE_PATH: &str = "missingFilePath";
    pub const ERROR_EPERM: &str = "errorEperm";
    pub const ERROR_EXDEV: &str = "errorExdev";
    pub const READY: &str = "ready";
}

const ENGLISH: &str = r#"{
  "content": {
    "noItemsSelected": "No items selected.",
    "noItemsSelectedOnLoad": "Select one or more items before exporting.",
    "exportCanceled": "Export canceled.",
    "exportFailed": "Export failed: {{reason}}",
    "exportingLinks": "Exporting links...",
    "exportSuccess": "Created {{count}} link(s) in {{dir}}.",
    "exportWithErrors": "Created {{count}} link(s) in {{dir}}, some items failed.",
    "errorsTitle": "Errors:",
    "missingFilePath": "no file path for this item",
    "errorEperm": "creating symbolic links requires additional privileges (enable Developer Mode or run as administrator). See:",
    "errorExdev": "hard links cannot cross filesystem volumes; choose a destination on the same volume or use symbolic links",
    "ready": "Ready."
  }
}"#;

/// JSON-backed message catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    root: Value,
}

impl Catalog {
    /// Built-in English messages.
    pub fn english() -> Self {
        // The embedded catalog is a literal; parsing it cannot fail at runtime.
        let root = serde_json::from_str(ENGLISH).unwrap_or(Value::Null);
        Self { root }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text).context("parse locale json")?;
        Ok(Self { root })
    }

    /// Load a catalog from a locale file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read locale file '{}'", path.display()))?;
        Self::from_json(&text).with_context(|| format!("locale file '{}'", path.display()))
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        let full = if key.contains('.') {
            key.to_string()
        } else {
            format!("content.{key}")
        };
        full.split('.')
            .try_fold(&self.root, |node, part| node.get(part))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, params: &[(&str, String)]) -> String {
        let Some(template) = self.lookup(key) else {
            return key.to_string();
        };
        let mut out = template.to_string();
        for (name, value) in params {
            out = out.replace(&format!("{{{{{name}}}}}"), value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_fills_placeholders() {
        let t = Catalog::english();
        let msg = t.translate(
            keys::EXPORT_SUCCESS,
            &[("count", "3".into()), ("dir", "/out".into())],
        );
        assert_eq!(msg, "Created 3 link(s) in /out.");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let t = Catalog::english();
        assert_eq!(t.translate("nope", &[]), "nope");
        assert_eq!(t.translate("content.nope", &[]), "content.nope");
    }

    #[test]
    fn dotted_keys_are_used_verbatim() {
        let t = Catalog::from_json(r#"{"menu":{"title":"Links"}}"#).unwrap();
        assert_eq!(t.translate("menu.title", &[]), "Links");
    }

    #[test]
    fn empty_value_falls_back_to_key() {
        let t = Catalog::from_json(r#"{"content":{"ready":""}}"#).unwrap();
        assert_eq!(t.translate(keys::READY, &[]), "ready");
    }
}
