//! Transaction state machine.
//!
//! A store is either `Idle` (no open transaction) or `InTransaction` at some
//! nesting depth:
//! - `BEGIN` always moves one level deeper
//! - `COMMIT` and `ROLLBACK` move one level up, back to `Idle` from depth 1
//! - `COMMIT` and `ROLLBACK` while `Idle` fail and leave the state alone

use std::fmt;

use serde::Serialize;

/// Position of a store in the transaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TxState {
    /// No open transaction; writes go straight to the base.
    #[default]
    Idle,
    /// At least one open transaction.
    InTransaction {
        /// Number of unmatched `BEGIN` calls, always at least 1.
        depth: usize,
    },
}

impl TxState {
    /// State for a stack with `depth` open overlays.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => TxState::Idle,
            depth => TxState::InTransaction { depth },
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            TxState::Idle => 0,
            TxState::InTransaction { depth } => *depth,
        }
    }

}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxState::Idle => write!(f, "IDLE"),
            TxState::InTransaction { depth } => write!(f, "IN TRANSACTION (depth {})", depth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_depth() {
        assert_eq!(TxState::default(), TxState::from_depth(0));
        assert_eq!(TxState::from_depth(2), TxState::InTransaction { depth: 2 });
        assert_eq!(TxState::from_depth(2).depth(), 2);
        assert_eq!(TxState::Idle.depth(), 0);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&TxState::Idle).unwrap(),
            r#"{"state":"idle"}"#
        );
        assert_eq!(
            serde_json::to_string(&TxState::from_depth(1)).unwrap(),
            r#"{"state":"in_transaction","depth":1}"#
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TxState::Idle.to_string(), "IDLE");
        assert_eq!(
            TxState::from_depth(3).to_string(),
            "IN TRANSACTION (depth 3)"
        );
    }
}
