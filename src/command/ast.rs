//! Parsed command representation.

use std::fmt;

/// A single command line, validated for arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Unset { key: String },
    Counts { value: String },
    Find { value: String },
    Begin,
    Rollback,
    Commit,
    /// Ends the session.
    End,
}

impl Command {
    /// The upper-case command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Set { .. } => "SET",
            Command::Get { .. } => "GET",
            Command::Unset { .. } => "UNSET",
            Command::Counts { .. } => "COUNTS",
            Command::Find { .. } => "FIND",
            Command::Begin => "BEGIN",
            Command::Rollback => "ROLLBACK",
            Command::Commit => "COMMIT",
            Command::End => "END",
        }
    }

    /// Whether the command can change store state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Set { .. }
                | Command::Unset { .. }
                | Command::Begin
                | Command::Rollback
                | Command::Commit
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set { key, value } => write!(f, "SET {} {}", key, value),
            Command::Get { key } | Command::Unset { key } => write!(f, "{} {}", self.name(), key),
            Command::Counts { value } | Command::Find { value } => {
                write!(f, "{} {}", self.name(), value)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}
