//! LayerKV - an in-memory key-value store with nested transactions
//!
//! This is the main entry point for the LayerKV command-line interface.

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use layerkv::db::{CliAction, CliOptions};

fn main() -> ExitCode {
    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("LayerKV v{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(options.verbose);

    match options.run(&mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    println!("LayerKV - an in-memory key-value store with nested transactions");
    println!();
    println!("Usage: layerkv [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -e, --execute CMDS     Execute ';'-separated commands and exit");
    println!("  -f, --file PATH        Execute commands from a file, one per line");
    println!("  -v, --verbose          Enable debug logging on stderr");
    println!("      --json             Print results as JSON");
    println!("      --no-prompt        Never print the '> ' prompt");
    println!("  -h, --help             Show this help message");
    println!("  --version              Show version");
    println!();
    println!("Examples:");
    println!("  layerkv                                  Start the REPL");
    println!("  layerkv -e 'SET a foo; GET a'            Execute commands and exit");
    println!("  layerkv -f script.txt                    Run a script");
}
