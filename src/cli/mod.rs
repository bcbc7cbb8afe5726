//! Command-line driver for jparse
//!
//! ## Commands
//!
//! - `tokens <file>` - Print the token stream
//! - `parse <file>` - Print an outline of the syntax tree
//! - `find <file> --kind <KIND>` - List nodes of the given kinds
//! - `<file>` - Check that the file parses
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::tree::SearchFilter;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// prints the message and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Java SE 8 parser
#[derive(Parser, Debug)]
#[command(name = "jparse")]
#[command(version = VERSION)]
#[command(about = "Parse Java source files into a typed syntax tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream
    Tokens {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a file and print an outline of the tree
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print grammar procedure enter/exit events
        #[arg(long)]
        trace: bool,
        /// Maximum nesting depth of grammar procedures
        #[arg(long, value_name = "N")]
        max_depth: Option<usize>,
    },

    /// List nodes of the given kinds
    Find {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Node kind, e.g. MethodDeclaration (repeatable; none means every kind)
        #[arg(short, long = "kind", value_name = "KIND")]
        kinds: Vec<String>,
        /// Which of the matching nodes to report
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
}

/// Command-line spelling of [`SearchFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Top,
    Bottom,
}

impl From<FilterArg> for SearchFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => SearchFilter::All,
            FilterArg::Top => SearchFilter::TopLevel,
            FilterArg::Bottom => SearchFilter::BottomLevel,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Tokens { file }) => commands::print_tokens(&file),
        Some(Command::Parse {
            file,
            trace,
            max_depth,
        }) => commands::print_outline(&file, trace, max_depth),
        Some(Command::Find { file, kinds, filter }) => commands::find_nodes(&file, &kinds, filter.into()),
        None => match cli.file {
            Some(file) => commands::check_file(&file),
            None => Err(CliError::failure("no input file; see `jparse --help`")),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
