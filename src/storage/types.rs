//! Layer entry type shared by overlays and the resolver.

use std::fmt;

/// What a single overlay says about a key.
///
/// Absence of a key from an overlay means the overlay has no opinion;
/// `Tombstone` means the key is deleted as of that overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The key holds this value in the layer.
    Present(String),
    /// The key is deleted in the layer.
    Tombstone,
}

impl Entry {
    /// The visible value this entry contributes, if any.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Present(value) => Some(value),
            Entry::Tombstone => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Present(value) => write!(f, "{}", value),
            Entry::Tombstone => write!(f, "<tombstone>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_value() {
        assert_eq!(Entry::Present("foo".into()).as_value(), Some("foo"));
        assert_eq!(Entry::Tombstone.as_value(), None);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::Present("foo".into()).to_string(), "foo");
        assert_eq!(Entry::Tombstone.to_string(), "<tombstone>");
    }
}
