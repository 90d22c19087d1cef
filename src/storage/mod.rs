//! Storage layer for LayerKV
//!
//! This module owns all state of the store. The upper layers (executor,
//! REPL) go through [`Store`] and never touch overlays or the index directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Store                              │
//! │      (set / get / unset / counts / find, resolution)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌─────────────────────┼─────────────────────┐
//!        │                     │                     │
//!        ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │    base     │       │  overlays   │       │ value index │
//!  │ (committed) │       │ (tx stack)  │       │  (counts)   │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use layerkv::storage::Store;
//!
//! let mut store = Store::new();
//! store.set("a", "foo");
//! store.set("b", "foo");
//! assert_eq!(store.counts("foo"), 2);
//! assert_eq!(store.find("foo"), Some(vec!["a".to_string(), "b".to_string()]));
//! ```

mod index;
mod layer;
mod store;
mod types;

pub use index::ValueIndex;
pub use layer::Overlay;
pub use store::{Store, StoreStats};
pub use types::Entry;
