//! Main command executor.

use tracing::debug;

use super::error::ExecuteResult;
use super::result::Output;
use crate::command::{Command, Parser};
use crate::storage::Store;
use crate::transaction::TransactionError;

/// Maps parsed commands onto store operations.
#[derive(Debug, Default)]
pub struct QueryExecutor {
    store: Store,
}

impl QueryExecutor {
    /// Create an executor over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and execute one line.
    pub fn execute(&mut self, line: &str) -> ExecuteResult<Output> {
        let command = Parser::parse(line)?;
        self.execute_command(command)
    }

    /// Execute a parsed command.
    pub fn execute_command(&mut self, command: Command) -> ExecuteResult<Output> {
        debug!(command = %command, mutation = command.is_mutation(), "execute");
        match command {
            Command::Set { key, value } => {
                self.store.set(&key, &value);
                Ok(Output::None)
            }
            Command::Get { key } => Ok(Output::Value(self.store.get(&key).map(str::to_owned))),
            Command::Unset { key } => {
                self.store.unset(&key);
                Ok(Output::None)
            }
            Command::Counts { value } => Ok(Output::Count(self.store.counts(&value))),
            Command::Find { value } => Ok(Output::Keys(self.store.find(&value))),
            Command::Begin => {
                self.store.begin();
                Ok(Output::None)
            }
            Command::Rollback => {
                TransactionError::check(self.store.rollback())?;
                Ok(Output::None)
            }
            Command::Commit => {
                TransactionError::check(self.store.commit())?;
                Ok(Output::None)
            }
            Command::End => Ok(Output::Exit),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ParseError;
    use crate::executor::ExecuteError;

    #[test]
    fn test_set_and_get() {
        let mut exec = QueryExecutor::new();
        assert_eq!(exec.execute("SET a foo").unwrap(), Output::None);
        assert_eq!(
            exec.execute("GET a").unwrap(),
            Output::Value(Some("foo".into()))
        );
        assert_eq!(exec.execute("GET b").unwrap(), Output::Value(None));
    }

    #[test]
    fn test_counts_and_find() {
        let mut exec = QueryExecutor::new();
        exec.execute("SET b foo").unwrap();
        exec.execute("SET a foo").unwrap();
        assert_eq!(exec.execute("COUNTS foo").unwrap(), Output::Count(2));
        assert_eq!(
            exec.execute("FIND foo").unwrap(),
            Output::Keys(Some(vec!["a".into(), "b".into()]))
        );
        assert_eq!(exec.execute("FIND bar").unwrap(), Output::Keys(None));
    }

    #[test]
    fn test_no_transaction() {
        let mut exec = QueryExecutor::new();
        assert_eq!(
            exec.execute("COMMIT"),
            Err(ExecuteError::Transaction(TransactionError::NoTransaction))
        );
        assert_eq!(
            exec.execute("ROLLBACK"),
            Err(ExecuteError::Transaction(TransactionError::NoTransaction))
        );
    }

    #[test]
    fn test_parse_error_leaves_store_alone() {
        let mut exec = QueryExecutor::new();
        assert_eq!(
            exec.execute("SET a"),
            Err(ExecuteError::Parse(ParseError::WrongArity { command: "SET", expected: 2 }))
        );
        assert_eq!(exec.store().stats().visible_keys, 0);
    }

    #[test]
    fn test_end() {
        let mut exec = QueryExecutor::new();
        assert!(exec.execute("end").unwrap().is_exit());
    }
}
