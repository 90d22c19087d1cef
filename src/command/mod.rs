//! Command parsing for LayerKV.
//!
//! Turns a line such as `SET a foo` into a [`Command`]. Parsing never touches
//! the store; it only validates the command word and argument count.

mod ast;
mod error;
mod parser;

pub use ast::Command;
pub use error::{ParseError, ParseResult};
pub use parser::{escape_command, is_separator, Parser};
