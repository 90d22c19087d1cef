//! High-level Database API and REPL interface.
//!
//! This module provides a clean, user-facing API for the store, a
//! thread-safe handle around it, and an interactive command-line interface.

mod api;
mod cli;
mod repl;
mod shared;

pub use api::{Database, DatabaseConfig, DatabaseError, DatabaseResult, DatabaseStats, OutputMode};
pub use cli::{CliAction, CliError, CliOptions, Source};
pub use repl::{Repl, ReplConfig};
pub use shared::SharedDatabase;
