//! LayerKV - an in-memory key-value store with nested transactions.
//!
//! Committed state lives in a base map. Every `BEGIN` pushes an overlay on
//! top of it; reads resolve from the innermost overlay down to the base, and
//! `COMMIT`/`ROLLBACK` merge or discard the top overlay. A value index keeps
//! `COUNTS` answers O(1) across arbitrarily deep nesting.
//!
//! # Example
//!
//! ```
//! use layerkv::storage::Store;
//!
//! let mut store = Store::new();
//! store.set("a", "foo");
//! store.begin();
//! store.set("a", "bar");
//! assert_eq!(store.counts("foo"), 0);
//! assert!(store.rollback());
//! assert_eq!(store.get("a"), Some("foo"));
//! ```

pub mod command;
pub mod db;
pub mod executor;
pub mod storage;
pub mod transaction;
