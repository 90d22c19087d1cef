//! Transaction error types.

use thiserror::Error;

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Errors that can occur during transaction control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// `COMMIT` or `ROLLBACK` with no open transaction.
    #[error("No transaction")]
    NoTransaction,
}

impl TransactionError {
    /// Turn a commit/rollback success flag into a result.
    pub fn check(closed: bool) -> TransactionResult<()> {
        if closed {
            Ok(())
        } else {
            Err(TransactionError::NoTransaction)
        }
    }
}
