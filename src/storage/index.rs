//! Reverse index from value to the number of keys currently showing it.

use std::collections::HashMap;

/// Counts of visible keys per value.
///
/// Only values with a positive count are stored; a count that drops to zero
/// removes its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueIndex {
    counts: HashMap<String, usize>,
}

impl ValueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys whose visible value is `value`.
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Record one more key showing `value`.
    pub fn increment(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
    }

    /// Record one fewer key showing `value`.
    ///
    /// Decrementing a value that is not indexed leaves the index unchanged
    /// and logs the drift, since it can only come from a bookkeeping bug.
    pub fn decrement(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(value);
            }
            None => {
                tracing::warn!(value, "decrement of unindexed value");
            }
        }
    }

    /// Number of distinct values with at least one key.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of visible keys across all values.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(v, c)| (v.as_str(), *c))
    }
}

impl<'a> FromIterator<&'a str> for ValueIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(values: I) -> Self {
        let mut index = ValueIndex::new();
        for value in values {
            index.increment(value);
        }
        index
    }
}
