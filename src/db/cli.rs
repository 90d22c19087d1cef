//! Command-line options for the `layerkv` binary.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use thiserror::Error;

use super::api::{Database, DatabaseConfig, DatabaseResult, OutputMode};
use super::repl::{Repl, ReplConfig};

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("{0} requires a value")]
    MissingValue(String),
}

/// Where commands are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Source {
    /// Interactive session on stdin.
    #[default]
    Stdin,
    /// `-e`: `;`-separated commands.
    Execute(String),
    /// `-f`: a script, one command per line.
    File(PathBuf),
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(CliOptions),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub verbose: bool,
    pub output_mode: OutputMode,
    pub show_prompt: bool,
    pub source: Source,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            output_mode: OutputMode::Text,
            show_prompt: true,
            source: Source::Stdin,
        }
    }
}

impl CliOptions {
    /// Parse arguments, program name excluded.
    ///
    /// `-h` and `--version` win as soon as they are seen. When both `-e` and
    /// `-f` are given, `-e` is used.
    pub fn parse<I, S>(args: I) -> Result<CliAction, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut execute = None;
        let mut file = None;

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => options.verbose = true,
                "--json" => options.output_mode = OutputMode::Json,
                "--no-prompt" => options.show_prompt = false,
                "-e" | "--execute" => {
                    execute = Some(args.next().ok_or(CliError::MissingValue(arg))?);
                }
                "-f" | "--file" => {
                    file = Some(PathBuf::from(args.next().ok_or(CliError::MissingValue(arg))?));
                }
                "-h" | "--help" => return Ok(CliAction::Help),
                "--version" => return Ok(CliAction::Version),
                _ => return Err(CliError::UnknownOption(arg)),
            }
        }

        options.source = match (execute, file) {
            (Some(commands), _) => Source::Execute(commands),
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };
        Ok(CliAction::Run(options))
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new()
            .verbose(self.verbose)
            .output_mode(self.output_mode)
    }

    /// Scripts never show a prompt; interactive sessions get the banner
    /// along with the prompt.
    pub fn repl_config(&self) -> ReplConfig {
        let interactive = self.source == Source::Stdin && self.show_prompt;
        ReplConfig {
            show_prompt: interactive,
            banner: interactive,
            ..Default::default()
        }
    }

    /// Run the selected source against a fresh database.
    ///
    /// `-e` and `-f` output goes to `out`; an interactive session always
    /// uses stdin and stdout.
    pub fn run<W: Write>(&self, out: &mut W) -> DatabaseResult<()> {
        let db = Database::open_with_config(self.database_config());
        let mut repl = Repl::with_config(db, self.repl_config());
        match &self.source {
            Source::Stdin => repl.run(),
            Source::Execute(commands) => repl.run_commands(commands, out),
            Source::File(path) => repl.run_with(BufReader::new(File::open(path)?), out),
        }
    }
}
