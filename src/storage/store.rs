//! The transactional store: base map, overlay stack and value index.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::trace;

use super::index::ValueIndex;
use super::layer::Overlay;
use super::types::Entry;
use crate::transaction::TxState;

/// In-memory key-value store with nested transactions.
///
/// Reads resolve through the overlay stack from the innermost layer down to
/// the base map. Writes go to the top overlay when a transaction is open and
/// straight to the base otherwise. The value index always reflects what is
/// currently visible, so `counts` never scans.
///
/// Transaction control (`begin`, `commit`, `rollback`) lives in
/// [`crate::transaction`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Committed state.
    pub(crate) base: HashMap<String, String>,
    /// Open transactions, innermost last.
    pub(crate) stack: Vec<Overlay>,
    /// Value -> number of keys currently resolving to it.
    pub(crate) index: ValueIndex,
}

impl Store {
    /// Create an empty store with no open transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the visible value of `key`.
    ///
    /// The innermost overlay mentioning the key decides; a tombstone hides
    /// anything below it.
    pub fn get(&self, key: &str) -> Option<&str> {
        Self::resolve_in(&self.base, &self.stack, key)
    }

    pub(crate) fn resolve_in<'a>(
        base: &'a HashMap<String, String>,
        stack: &'a [Overlay],
        key: &str,
    ) -> Option<&'a str> {
        for overlay in stack.iter().rev() {
            if let Some(entry) = overlay.get(key) {
                return entry.as_value();
            }
        }
        base.get(key).map(String::as_str)
    }

    /// Set `key` to `value` in the current scope.
    pub fn set(&mut self, key: &str, value: &str) {
        let old = self.get(key).map(str::to_owned);
        if old.as_deref() == Some(value) {
            return;
        }
        trace!(key, value, old = old.as_deref(), "set");

        if let Some(old) = old {
            self.index.decrement(&old);
        }
        match self.stack.last_mut() {
            Some(top) => top.put(key, value),
            None => {
                self.base.insert(key.to_string(), value.to_string());
            }
        }
        self.index.increment(value);
    }

    /// Remove `key` from the current scope.
    ///
    /// Inside a transaction this writes a tombstone into the top overlay and
    /// leaves outer layers intact for a later rollback.
    pub fn unset(&mut self, key: &str) {
        let old = self.get(key).map(str::to_owned);
        trace!(key, old = old.as_deref(), "unset");

        match self.stack.last_mut() {
            Some(top) => top.tombstone(key),
            None => {
                self.base.remove(key);
            }
        }
        if let Some(old) = old {
            self.index.decrement(&old);
        }
    }

    /// Number of keys whose visible value is `value`.
    pub fn counts(&self, value: &str) -> usize {
        self.index.count(value)
    }

    /// Keys whose visible value is `value`, sorted ascending.
    ///
    /// Returns `None` rather than an empty list when nothing matches.
    pub fn find(&self, value: &str) -> Option<Vec<String>> {
        let keys: Vec<String> = self
            .candidate_keys()
            .into_iter()
            .filter(|key| self.get(key) == Some(value))
            .map(str::to_owned)
            .collect();

        if keys.is_empty() {
            None
        } else {
            Some(keys)
        }
    }

    /// Every key mentioned by any overlay or the base, deduplicated and
    /// sorted.
    fn candidate_keys(&self) -> BTreeSet<&str> {
        self.stack
            .iter()
            .flat_map(Overlay::keys)
            .chain(self.base.keys().map(String::as_str))
            .collect()
    }

    /// Committed value of `key`, ignoring any open transaction.
    pub fn committed(&self, key: &str) -> Option<&str> {
        self.base.get(key).map(String::as_str)
    }

    /// Number of unmatched `begin` calls.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current position in the transaction state machine.
    pub fn state(&self) -> TxState {
        TxState::from_depth(self.depth())
    }

    /// The live value index.
    pub fn index(&self) -> &ValueIndex {
        &self.index
    }

    /// Build a value index from scratch by resolving every known key.
    pub fn rebuild_index(&self) -> ValueIndex {
        self.candidate_keys()
            .into_iter()
            .filter_map(|key| self.get(key))
            .collect()
    }

    /// Check that the incremental index matches a full recomputation.
    pub fn verify_index(&self) -> bool {
        self.rebuild_index() == self.index
    }

    /// Summary counters for the `.stats` command.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            visible_keys: self.index.total(),
            distinct_values: self.index.distinct(),
            committed_keys: self.base.len(),
            depth: self.depth(),
            pending_entries: self.stack.iter().map(Overlay::len).sum(),
        }
    }

    /// Entries of the top overlay, if a transaction is open.
    pub fn pending(&self) -> Option<impl Iterator<Item = (&str, &Entry)>> {
        self.stack.last().map(Overlay::iter)
    }
}

/// Store statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Keys with a visible value.
    pub visible_keys: usize,
    /// Distinct visible values.
    pub distinct_values: usize,
    /// Keys in the base map.
    pub committed_keys: usize,
    /// Open transactions.
    pub depth: usize,
    /// Entries held across all open overlays, tombstones included.
    pub pending_entries: usize,
}
