//! Command parsing errors.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    /// The command word, already upper-cased and escaped for display.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} requires {expected} {}", plural(.expected))]
    WrongArity {
        command: &'static str,
        expected: usize,
    },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message() {
        let err = ParseError::WrongArity { command: "SET", expected: 2 };
        assert_eq!(err.to_string(), "SET requires 2 arguments");

        let err = ParseError::WrongArity { command: "GET", expected: 1 };
        assert_eq!(err.to_string(), "GET requires 1 argument");
    }

    #[test]
    fn test_unknown_message() {
        let err = ParseError::UnknownCommand("FOO".into());
        assert_eq!(err.to_string(), "Unknown command: FOO");
    }
}
