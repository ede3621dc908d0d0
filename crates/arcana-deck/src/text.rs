//! Localized text lookup for catalog construction.
//!
//! The catalog never reaches into ambient locale state; whoever builds a
//! [`crate::Deck`] passes a [`TextSource`] explicitly. Lookups are keyed by
//! dotted paths mirroring the translation files of the surrounding app:
//! `major.0.name`, `cups.3.meaning.upright`, `common.cardNotSelected`, and
//! so on. A missing key always degrades to the caller-supplied fallback.

use std::collections::HashMap;

/// Read-only localized text lookup keyed by dotted paths.
pub trait TextSource {
    /// Look up a single string, falling back to `fallback` when the key is
    /// absent or blank.
    fn get(&self, path: &str, fallback: &str) -> String;

    /// Look up a list-valued key (keyword sets). Defaults to empty, which
    /// matches providers that only carry scalar strings.
    fn get_list(&self, _path: &str) -> Vec<String> {
        Vec::new()
    }
}

/// A text source with no entries: every lookup yields its fallback.
///
/// Catalog construction with `EmptyText` produces the canonical English
/// names with blank meanings, which is the documented degraded mode when
/// the localized-text provider is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyText;

impl TextSource for EmptyText {
    fn get(&self, _path: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

/// A text source backed by in-memory maps, for tests and embedders that
/// load their translations up front.
#[derive(Debug, Clone, Default)]
pub struct StaticText {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

impl StaticText {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scalar string under a dotted path.
    pub fn with(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(path.into(), value.into());
        self
    }

    /// Insert a list value under a dotted path.
    pub fn with_list(mut self, path: impl Into<String>, values: Vec<String>) -> Self {
        self.lists.insert(path.into(), values);
        self
    }
}

impl TextSource for StaticText {
    fn get(&self, path: &str, fallback: &str) -> String {
        match self.strings.get(path) {
            Some(s) if !s.is_empty() => s.clone(),
            _ => fallback.to_string(),
        }
    }

    fn get_list(&self, path: &str) -> Vec<String> {
        self.lists.get(path).cloned().unwrap_or_default()
    }
}
