//! Shared access to a database from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::api::{Database, DatabaseConfig};
use crate::executor::{ExecuteResult, Output};

/// A cloneable handle to one database.
///
/// The store's invariants span its base map, overlay stack and value index,
/// so the whole database sits behind a single lock and every operation runs
/// to completion while holding it.
#[derive(Clone, Default)]
pub struct SharedDatabase {
    inner: Arc<Mutex<Database>>,
}

impl SharedDatabase {
    /// Wrap an existing database.
    pub fn new(db: Database) -> Self {
        Self {
            inner: Arc::new(Mutex::new(db)),
        }
    }

    pub fn with_config(config: DatabaseConfig) -> Self {
        Self::new(Database::open_with_config(config))
    }

    /// Execute one command line under the lock.
    pub fn execute(&self, line: &str) -> ExecuteResult<Output> {
        self.inner.lock().execute(line)
    }

    /// Run `f` with exclusive access to the database.
    ///
    /// Use this for sequences that must not interleave with other handles,
    /// such as a whole BEGIN ... COMMIT block.
    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Database) -> T,
    {
        let mut db = self.inner.lock();
        f(&mut db)
    }

    /// Number of live handles to this database.
    pub fn handles(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}
