//! BEGIN / COMMIT / ROLLBACK on the overlay stack.
//!
//! Commit merges the top overlay one level down. Because the merged overlay
//! was already the most visible layer, no key changes its resolved value and
//! the value index is left alone. Rollback is the only stack operation that
//! moves counts: every key the discarded overlay touched is re-resolved
//! against what is now on top.

use tracing::debug;

use crate::storage::{Entry, Overlay, Store};

impl Store {
    /// Open a new (possibly nested) transaction.
    pub fn begin(&mut self) {
        self.stack.push(Overlay::new());
        debug!(depth = self.stack.len(), "begin");
    }

    /// Merge the innermost transaction into the layer below it.
    ///
    /// Returns `false`, leaving all state untouched, when no transaction is
    /// open.
    pub fn commit(&mut self) -> bool {
        let Some(top) = self.stack.pop() else {
            debug!("commit without transaction");
            return false;
        };
        debug!(depth = self.stack.len() + 1, entries = top.len(), "commit");
        if top.is_empty() {
            return true;
        }

        match self.stack.last_mut() {
            Some(below) => merge_into_overlay(below, top),
            None => {
                for (key, entry) in top {
                    match entry {
                        Entry::Tombstone => {
                            self.base.remove(&key);
                        }
                        Entry::Present(value) => {
                            if self.base.get(&key) != Some(&value) {
                                self.base.insert(key, value);
                            }
                        }
                    }
                }
            }
        }
        true
    }

    /// Discard the innermost transaction.
    ///
    /// Returns `false`, leaving all state untouched, when no transaction is
    /// open.
    pub fn rollback(&mut self) -> bool {
        let Some(top) = self.stack.pop() else {
            debug!("rollback without transaction");
            return false;
        };
        debug!(depth = self.stack.len() + 1, entries = top.len(), "rollback");

        for (key, entry) in top {
            if let Entry::Present(value) = &entry {
                self.index.decrement(value);
            }
            if let Some(restored) = Store::resolve_in(&self.base, &self.stack, &key) {
                self.index.increment(restored);
            }
        }
        true
    }
}

fn merge_into_overlay(below: &mut Overlay, top: Overlay) {
    for (key, entry) in top {
        match entry {
            // The layer below may still hold an older value that must stay
            // hidden until it is itself committed or rolled back.
            Entry::Tombstone => below.tombstone(key),
            Entry::Present(value) => {
                if below.get(&key).and_then(Entry::as_value) != Some(value.as_str()) {
                    below.put(key, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::Store;
    use crate::transaction::TxState;

    #[test]
    fn test_set_in_transaction() {
        let mut store = Store::new();
        store.begin();
        store.set("a", "foo");
        assert_eq!(store.get("a"), Some("foo"));
        assert_eq!(store.committed("a"), None);

        assert!(store.commit());
        assert_eq!(store.committed("a"), Some("foo"));
    }

    #[test]
    fn test_rollback_discards_writes() {
        let mut store = Store::new();
        store.begin();
        store.set("a", "foo");
        assert!(store.rollback());
        assert_eq!(store.get("a"), None);
        assert_eq!(store.counts("foo"), 0);
    }

    #[test]
    fn test_unset_in_transaction() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.unset("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.committed("a"), Some("foo"));

        assert!(store.commit());
        assert_eq!(store.get("a"), None);
        assert_eq!(store.committed("a"), None);
        assert_eq!(store.counts("foo"), 0);
    }

    #[test]
    fn test_unset_in_nested_transaction() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.set("a", "bar");
        store.begin();
        assert_eq!(store.get("a"), Some("bar"));
        store.unset("a");
        assert_eq!(store.get("a"), None);

        assert!(store.commit());
        assert_eq!(store.get("a"), None);
        assert!(store.commit());
        assert_eq!(store.get("a"), None);
        assert!(store.verify_index());
    }

    #[test]
    fn test_tombstone_propagates_to_outer_overlay() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.set("a", "bar");
        store.begin();
        store.unset("a");
        assert!(store.commit());

        // The outer overlay now hides both "bar" and the committed "foo".
        assert_eq!(store.get("a"), None);
        assert!(store.rollback());
        assert_eq!(store.get("a"), Some("foo"));
        assert_eq!(store.counts("foo"), 1);
        assert_eq!(store.counts("bar"), 0);
    }

    #[test]
    fn test_nested_commit() {
        let mut store = Store::new();
        store.begin();
        store.set("a", "foo");
        store.begin();
        store.set("a", "bar");
        assert!(store.commit());
        assert_eq!(store.get("a"), Some("bar"));
        assert!(store.commit());
        assert_eq!(store.committed("a"), Some("bar"));
        assert_eq!(store.counts("bar"), 1);
        assert_eq!(store.counts("foo"), 0);
    }

    #[test]
    fn test_commit_chain() {
        let mut store = Store::new();
        store.begin();
        store.set("a", "foo");
        store.begin();
        store.set("b", "bar");
        assert!(store.commit());
        assert!(store.commit());
        assert_eq!(store.committed("a"), Some("foo"));
        assert_eq!(store.committed("b"), Some("bar"));
        assert_eq!(store.stats().committed_keys, 2);
    }

    #[test]
    fn test_commit_and_rollback_without_transaction() {
        let mut store = Store::new();
        store.set("a", "foo");
        assert!(!store.commit());
        assert!(!store.rollback());
        assert_eq!(store.get("a"), Some("foo"));
        assert_eq!(store.counts("foo"), 1);
        assert_eq!(store.state(), TxState::Idle);
    }

    #[test]
    fn test_rollback_restores_counts() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.set("a", "bar");
        store.set("b", "bar");
        assert_eq!(store.counts("foo"), 0);
        assert_eq!(store.counts("bar"), 2);

        assert!(store.rollback());
        assert_eq!(store.counts("foo"), 1);
        assert_eq!(store.counts("bar"), 0);
    }

    #[test]
    fn test_rollback_of_unset_counts_once() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.set("b", "foo");
        store.begin();
        store.unset("a");
        store.unset("a");
        assert_eq!(store.counts("foo"), 1);

        assert!(store.rollback());
        assert_eq!(store.counts("foo"), 2);
        assert!(store.verify_index());
    }

    #[test]
    fn test_find_with_transaction_unset() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.unset("a");
        store.set("b", "foo");
        assert_eq!(store.find("foo"), Some(vec!["b".to_string()]));

        assert!(store.rollback());
        assert_eq!(store.find("foo"), Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_multiple_operations_in_transaction() {
        let mut store = Store::new();
        store.begin();
        store.set("a", "foo");
        store.set("b", "bar");
        store.unset("a");
        store.set("c", "baz");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some("bar"));

        assert!(store.commit());
        assert_eq!(store.committed("a"), None);
        assert_eq!(store.committed("b"), Some("bar"));
        assert_eq!(store.committed("c"), Some("baz"));
        assert_eq!(store.stats().committed_keys, 2);
    }

    #[test]
    fn test_empty_commit_closes_one_level() {
        let mut store = Store::new();
        store.set("a", "foo");
        store.begin();
        store.begin();
        assert!(store.commit());
        assert_eq!(store.state(), TxState::InTransaction { depth: 1 });
        assert_eq!(store.stats().pending_entries, 0);
        assert!(store.commit());
        assert_eq!(store.committed("a"), Some("foo"));
        assert_eq!(store.counts("foo"), 1);
    }

    #[test]
    fn test_state_follows_depth() {
        let mut store = Store::new();
        store.begin();
        store.begin();
        assert_eq!(store.state(), TxState::InTransaction { depth: 2 });
        assert!(store.commit());
        assert_eq!(store.state().depth(), 1);
        assert!(store.rollback());
        assert_eq!(store.state(), TxState::Idle);
    }
}
