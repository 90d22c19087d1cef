//! Interactive REPL (Read-Eval-Print Loop) for LayerKV.

use std::io::{self, BufRead, IsTerminal, Write};

use super::api::{Database, DatabaseResult, OutputMode};
use crate::command::{escape_command, is_separator, ParseError};
use crate::executor::ExecuteError;

/// REPL configuration.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string.
    pub prompt: String,
    /// Print the prompt before each line.
    pub show_prompt: bool,
    /// Print a banner when the session starts.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".into(),
            show_prompt: true,
            banner: false,
        }
    }
}

/// The interactive REPL.
pub struct Repl {
    db: Database,
    config: ReplConfig,
    history: Vec<String>,
}

impl Repl {
    /// Create a new REPL with the given database.
    pub fn new(db: Database) -> Self {
        Self::with_config(db, ReplConfig::default())
    }

    /// Create a REPL with custom configuration.
    pub fn with_config(db: Database, config: ReplConfig) -> Self {
        Self {
            db,
            config,
            history: Vec::new(),
        }
    }

    /// Run the REPL on stdin/stdout.
    ///
    /// The prompt and banner are only shown when stdin is a terminal.
    pub fn run(&mut self) -> DatabaseResult<()> {
        let stdin = io::stdin();
        let saved = self.config.clone();
        if !stdin.is_terminal() {
            self.config.show_prompt = false;
            self.config.banner = false;
        }

        let mut stdout = io::stdout();
        let result = self.run_with(stdin.lock(), &mut stdout);
        self.config = saved;
        result
    }

    /// Run the REPL over arbitrary input and output streams until EOF or
    /// `END`.
    pub fn run_with<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> DatabaseResult<()> {
        if self.config.banner {
            self.print_banner(out)?;
        }

        loop {
            if self.config.show_prompt {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF.
                break;
            }

            if self.handle_line(&line, out)? {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Run `;`-separated commands as if each had been entered on its own
    /// line. Failures are reported and the remaining commands still run.
    pub fn run_commands<W: Write>(&mut self, commands: &str, out: &mut W) -> DatabaseResult<()> {
        for command in commands.split(';') {
            if self.handle_line(command, out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Process one input line. Returns `true` when the session should end.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> DatabaseResult<bool> {
        let line = line.trim_matches(is_separator);
        if line.is_empty() {
            return Ok(false);
        }
        self.history.push(line.to_string());

        if self.is_meta_command(line) {
            return self.handle_meta_command(line, out);
        }

        let mode = self.db.config().output_mode;
        match self.db.execute(line) {
            Ok(output) => {
                if output.is_exit() {
                    return Ok(true);
                }
                if let Some(text) = mode.render(&output) {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => writeln!(out, "{}", mode.render_error(&e))?,
        }
        Ok(false)
    }

    /// The underlying database.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Lines entered so far, blank lines excluded.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn print_banner<W: Write>(&self, out: &mut W) -> DatabaseResult<()> {
        writeln!(out, "LayerKV v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Type .help for commands, END to quit.")?;
        Ok(())
    }

    fn is_meta_command(&self, input: &str) -> bool {
        input.starts_with('.')
    }

    fn handle_meta_command<W: Write>(&mut self, cmd: &str, out: &mut W) -> DatabaseResult<bool> {
        let word = cmd.split(is_separator).next().unwrap_or(cmd);
        let command = word.trim_start_matches('.').to_uppercase();

        match command.as_str() {
            "HELP" | "H" | "?" => self.print_help(out)?,
            "QUIT" | "EXIT" | "Q" => return Ok(true),
            "STATS" => self.print_stats(out)?,
            "HISTORY" => self.print_history(out)?,
            other => {
                let err = ParseError::UnknownCommand(format!(".{}", escape_command(other)));
                let mode = self.db.config().output_mode;
                writeln!(out, "{}", mode.render_error(&ExecuteError::from(err)))?;
            }
        }

        Ok(false)
    }

    fn print_help<W: Write>(&self, out: &mut W) -> DatabaseResult<()> {
        writeln!(out, "Commands:")?;
        writeln!(out, "  SET <key> <value>       Set a key")?;
        writeln!(out, "  GET <key>               Print a key's value or NULL")?;
        writeln!(out, "  UNSET <key>             Remove a key")?;
        writeln!(out, "  COUNTS <value>          Count keys holding a value")?;
        writeln!(out, "  FIND <value>            List keys holding a value")?;
        writeln!(out, "  BEGIN                   Open a (nested) transaction")?;
        writeln!(out, "  ROLLBACK                Discard the innermost transaction")?;
        writeln!(out, "  COMMIT                  Apply the innermost transaction")?;
        writeln!(out, "  END                     Exit")?;
        writeln!(out)?;
        writeln!(out, "  .help                   Show this help message")?;
        writeln!(out, "  .stats                  Show store statistics")?;
        writeln!(out, "  .history                Show command history")?;
        writeln!(out, "  .quit                   Exit")?;
        Ok(())
    }

    fn print_stats<W: Write>(&self, out: &mut W) -> DatabaseResult<()> {
        let stats = self.db.stats();
        match self.db.config().output_mode {
            OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&stats)?)?,
            OutputMode::Text => {
                writeln!(out, "Store Statistics:")?;
                writeln!(out, "  Visible Keys: {}", stats.store.visible_keys)?;
                writeln!(out, "  Distinct Values: {}", stats.store.distinct_values)?;
                writeln!(out, "  Committed Keys: {}", stats.store.committed_keys)?;
                writeln!(out, "  Pending Entries: {}", stats.store.pending_entries)?;
                writeln!(out, "  State: {}", stats.state)?;
            }
        }
        Ok(())
    }

    fn print_history<W: Write>(&self, out: &mut W) -> DatabaseResult<()> {
        writeln!(out, "Command History:")?;
        for (i, cmd) in self.history.iter().enumerate() {
            writeln!(out, "  {}: {}", i + 1, cmd)?;
        }
        Ok(())
    }
}
