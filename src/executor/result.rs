//! Command output types.

use serde::Serialize;
use serde_json::Value;

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// The command prints nothing (SET, UNSET, BEGIN, successful COMMIT or
    /// ROLLBACK).
    None,
    /// Result of GET.
    Value(Option<String>),
    /// Result of COUNTS.
    Count(usize),
    /// Result of FIND, `None` when nothing matched.
    Keys(Option<Vec<String>>),
    /// END was requested.
    Exit,
}

impl Output {
    /// Text shown for this output, or `None` when nothing is printed.
    pub fn render(&self) -> Option<String> {
        match self {
            Output::None | Output::Exit => None,
            Output::Value(value) => Some(value.clone().unwrap_or_else(|| "NULL".to_string())),
            Output::Count(count) => Some(count.to_string()),
            Output::Keys(Some(keys)) => Some(keys.join(" ")),
            Output::Keys(None) => Some("NULL".to_string()),
        }
    }

    /// JSON form of this output, or `None` when nothing is printed.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            Output::None | Output::Exit => None,
            other => serde_json::to_value(other).ok(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Output::Exit)
    }
}
