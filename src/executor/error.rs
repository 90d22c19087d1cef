//! Command execution errors.

use thiserror::Error;

use crate::command::ParseError;
use crate::transaction::TransactionError;

/// Result type for command execution.
pub type ExecuteResult<T> = Result<T, ExecuteError>;

/// Command execution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl ExecuteError {
    /// The line shown to the user for this error.
    ///
    /// Unknown commands are reported bare; everything else is prefixed
    /// with `Error: `.
    pub fn display_line(&self) -> String {
        match self {
            ExecuteError::Parse(ParseError::UnknownCommand(_)) => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}
