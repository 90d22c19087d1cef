//! Line parser.
//!
//! Splits a line on whitespace, upper-cases the command word and checks the
//! argument count. Arguments are passed through verbatim.
//!
//! Whitespace is Unicode whitespace plus the ASCII information separators
//! `\x1c`..=`\x1f`, so a line tokenizes the same way it would under
//! Python's `str.split()`.

use super::ast::Command;
use super::error::{ParseError, ParseResult};

/// Command line parser for LayerKV.
pub struct Parser;

impl Parser {
    /// Parse one line into a command.
    pub fn parse(line: &str) -> ParseResult<Command> {
        let mut tokens = line.split(is_separator).filter(|t| !t.is_empty());
        let word = tokens.next().ok_or(ParseError::Empty)?;
        let command = word.to_uppercase();
        let args: Vec<&str> = tokens.collect();

        match command.as_str() {
            "SET" => {
                let [key, value] = Self::expect_args::<2>("SET", &args)?;
                Ok(Command::Set { key, value })
            }
            "GET" => {
                let [key] = Self::expect_args::<1>("GET", &args)?;
                Ok(Command::Get { key })
            }
            "UNSET" => {
                let [key] = Self::expect_args::<1>("UNSET", &args)?;
                Ok(Command::Unset { key })
            }
            "COUNTS" => {
                let [value] = Self::expect_args::<1>("COUNTS", &args)?;
                Ok(Command::Counts { value })
            }
            "FIND" => {
                let [value] = Self::expect_args::<1>("FIND", &args)?;
                Ok(Command::Find { value })
            }
            // Trailing arguments are ignored for the argument-less commands.
            "BEGIN" => Ok(Command::Begin),
            "ROLLBACK" => Ok(Command::Rollback),
            "COMMIT" => Ok(Command::Commit),
            "END" => Ok(Command::End),
            _ => Err(ParseError::UnknownCommand(escape_command(&command))),
        }
    }

    fn expect_args<const N: usize>(
        command: &'static str,
        args: &[&str],
    ) -> ParseResult<[String; N]> {
        if args.len() != N {
            return Err(ParseError::WrongArity { command, expected: N });
        }
        Ok(std::array::from_fn(|i| args[i].to_string()))
    }
}

/// Token separator: any Unicode whitespace or an ASCII information separator.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Escape a command word for display.
///
/// Printable ASCII is kept, backslash and the common control characters get
/// their short escapes, everything else becomes `\xNN`, `\uNNNN` or
/// `\UNNNNNNNN` depending on its code point.
pub fn escape_command(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' '..='~' => out.push(c),
            c if (c as u32) < 0x100 => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let cmd = Parser::parse("SET a foo").unwrap();
        assert_eq!(cmd, Command::Set { key: "a".into(), value: "foo".into() });
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        assert_eq!(
            Parser::parse("get a").unwrap(),
            Command::Get { key: "a".into() }
        );
        assert_eq!(Parser::parse("Begin").unwrap(), Command::Begin);
    }

    #[test]
    fn test_arguments_are_verbatim() {
        let cmd = Parser::parse("set Key Value").unwrap();
        assert_eq!(cmd, Command::Set { key: "Key".into(), value: "Value".into() });
    }

    #[test]
    fn test_extra_whitespace() {
        let cmd = Parser::parse("  COUNTS \t foo  ").unwrap();
        assert_eq!(cmd, Command::Counts { value: "foo".into() });
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            Parser::parse("SET a"),
            Err(ParseError::WrongArity { command: "SET", expected: 2 })
        );
        assert_eq!(
            Parser::parse("GET a b"),
            Err(ParseError::WrongArity { command: "GET", expected: 1 })
        );
        assert_eq!(
            Parser::parse("FIND"),
            Err(ParseError::WrongArity { command: "FIND", expected: 1 })
        );
    }

    #[test]
    fn test_control_commands_ignore_arguments() {
        assert_eq!(Parser::parse("COMMIT now").unwrap(), Command::Commit);
        assert_eq!(Parser::parse("end please").unwrap(), Command::End);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(Parser::parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Parser::parse("frobnicate x"),
            Err(ParseError::UnknownCommand("FROBNICATE".into()))
        );
    }

    #[test]
    fn test_escape_command() {
        assert_eq!(escape_command("PLAIN"), "PLAIN");
        assert_eq!(escape_command("A\\B"), "A\\\\B");
        assert_eq!(escape_command("Ü"), "\\xdc");
        assert_eq!(escape_command("ПРИВЕТ"), "\\u041f\\u0420\\u0418\\u0412\\u0415\\u0422");
        assert_eq!(escape_command("\u{1F600}"), "\\U0001f600");
    }

    #[test]
    fn test_information_separators_split_tokens() {
        assert_eq!(
            Parser::parse("SET\x1fa\x1cb").unwrap(),
            Command::Set { key: "a".into(), value: "b".into() }
        );
        assert_eq!(
            Parser::parse("GET\u{a0}a").unwrap(),
            Command::Get { key: "a".into() }
        );
        assert_eq!(Parser::parse("\x1e\x1d"), Err(ParseError::Empty));
    }
}
