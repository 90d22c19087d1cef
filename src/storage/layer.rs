//! Transaction overlays.

use std::collections::HashMap;

use super::types::Entry;

/// One uncommitted layer of writes and deletions.
///
/// An overlay is pushed by `BEGIN` and lives until the matching `COMMIT`
/// merges it downward or `ROLLBACK` discards it.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    entries: HashMap<String, Entry>,
}

impl Overlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up what this layer says about `key`.
    ///
    /// `None` means the layer has no opinion and resolution must continue
    /// with the layer below.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Record a value for `key` in this layer.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Present(value.into()));
    }

    /// Record that `key` is deleted as of this layer.
    pub fn tombstone(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), Entry::Tombstone);
    }

    /// Keys mentioned by this layer, as value or tombstone.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of keys this layer mentions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Overlay {
    type Item = (String, Entry);
    type IntoIter = std::collections::hash_map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
