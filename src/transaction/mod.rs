//! Transaction management for LayerKV.
//!
//! Each `BEGIN` pushes an overlay onto the store's stack. `COMMIT` merges the
//! top overlay into the one below (or into the base when it is the last
//! one); `ROLLBACK` discards it and re-syncs the value index with whatever
//! becomes visible again.
//!
//! # Architecture
//!
//! ```text
//!   BEGIN ──► ┌───────────────┐   ROLLBACK: discard, re-resolve touched keys
//!             │  overlay n    │ ─────────────────────────────────────────────►
//!             ├───────────────┤   COMMIT: merge into overlay n-1
//!             │  overlay n-1  │ ◄──────────────┘
//!             ├───────────────┤
//!             │     ...       │
//!             ├───────────────┤
//!             │     base      │ ◄── COMMIT of the outermost overlay
//!             └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use layerkv::storage::Store;
//! use layerkv::transaction::TxState;
//!
//! let mut store = Store::new();
//! store.begin();
//! store.set("a", "foo");
//! assert_eq!(store.state(), TxState::InTransaction { depth: 1 });
//! assert!(store.commit());
//! assert!(!store.commit());
//! ```

mod control;
mod error;
mod state;

pub use error::{TransactionError, TransactionResult};
pub use state::TxState;
