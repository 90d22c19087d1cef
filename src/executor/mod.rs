//! Command execution for LayerKV.
//!
//! The executor owns the [`Store`](crate::storage::Store), parses each line
//! and maps the resulting command onto one store operation.

mod error;
mod executor;
mod result;

pub use error::{ExecuteError, ExecuteResult};
pub use executor::QueryExecutor;
pub use result::Output;
