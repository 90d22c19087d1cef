//! Database API - high-level interface for LayerKV.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::executor::{ExecuteError, ExecuteResult, Output, QueryExecutor};
use crate::storage::{Store, StoreStats};
use crate::transaction::{TransactionError, TxState};

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Database errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("execution error: {0}")]
    Execute(#[from] ExecuteError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TransactionError> for DatabaseError {
    fn from(e: TransactionError) -> Self {
        DatabaseError::Execute(e.into())
    }
}

/// How results are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain display strings: values, `NULL`, counts, space-joined keys.
    #[default]
    Text,
    /// One JSON document per result line.
    Json,
}

impl OutputMode {
    /// Line to print for a command result, if any.
    pub fn render(&self, output: &Output) -> Option<String> {
        match self {
            OutputMode::Text => output.render(),
            OutputMode::Json => output.to_json().map(|v| v.to_string()),
        }
    }

    /// Line to print for a failed command.
    pub fn render_error(&self, err: &ExecuteError) -> String {
        match self {
            OutputMode::Text => err.display_line(),
            OutputMode::Json => json!({ "error": err.to_string() }).to_string(),
        }
    }
}

/// Database configuration options.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Log every executed line at info level.
    pub verbose: bool,
    /// Output format used by the REPL.
    pub output_mode: OutputMode,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbose flag.
    pub fn verbose(mut self, value: bool) -> Self {
        self.verbose = value;
        self
    }

    /// Set output mode.
    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }
}

/// The main database handle.
#[derive(Debug, Default)]
pub struct Database {
    config: DatabaseConfig,
    executor: QueryExecutor,
}

impl Database {
    /// Create an empty database with default configuration.
    pub fn open() -> Self {
        Self::default()
    }

    /// Create an empty database with custom configuration.
    pub fn open_with_config(config: DatabaseConfig) -> Self {
        Self {
            config,
            executor: QueryExecutor::new(),
        }
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> ExecuteResult<Output> {
        if self.config.verbose {
            info!(line, "command");
        }
        let result = self.executor.execute(line);
        if self.config.verbose {
            info!(result = ?result, "result");
        }
        result
    }

    /// Run `f` inside a transaction.
    ///
    /// The transaction is committed when `f` succeeds and rolled back when it
    /// fails.
    pub fn transaction<F, T>(&mut self, f: F) -> DatabaseResult<T>
    where
        F: FnOnce(&mut Store) -> DatabaseResult<T>,
    {
        let store = self.executor.store_mut();
        store.begin();
        match f(&mut *store) {
            Ok(result) => {
                TransactionError::check(store.commit())?;
                Ok(result)
            }
            Err(e) => {
                TransactionError::check(store.rollback())?;
                Err(e)
            }
        }
    }

    /// Get database statistics.
    pub fn stats(&self) -> DatabaseStats {
        let store = self.executor.store();
        DatabaseStats {
            store: store.stats(),
            state: store.state(),
        }
    }

    pub fn store(&self) -> &Store {
        self.executor.store()
    }

    pub fn store_mut(&mut self) -> &mut Store {
        self.executor.store_mut()
    }

    /// Get the configuration.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

/// Database statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatabaseStats {
    #[serde(flatten)]
    pub store: StoreStats,
    pub state: TxState,
}
