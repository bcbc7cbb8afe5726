//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::diagnostics::render_report;
use crate::lexer::{self, Token};
use crate::tree::{SearchFilter, SyntaxTree};
use crate::visit::NodeKind;
use crate::{Error, ParseOptions, TracePhase};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting files over `MAX_SOURCE_SIZE`.
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

fn to_cli_error(error: &Error, path: &Path, source: &str) -> CliError {
    let rendered = render_report(error, &path.display().to_string(), source);
    CliError::failure(rendered.trim_end())
}

fn parse_file(path: &Path, options: ParseOptions) -> CliResult<(SyntaxTree, Vec<crate::TraceEvent>)> {
    let source = read_source(path)?;
    let (unit, trace) =
        crate::parse_source_with_options(&source, options).map_err(|e| to_cli_error(&e, path, &source))?;
    Ok((SyntaxTree::new(unit), trace))
}

/// Tokenize and print one token per line.
pub fn print_tokens(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source).map_err(|e| to_cli_error(&Error::from(e), path, &source))?;
    for token in &tokens {
        println!("{}", describe_token(token));
    }
    Ok(ExitCode::SUCCESS)
}

fn describe_token(token: &Token) -> String {
    format!(
        "{}:{}\t{:?}\t{}",
        token.position.line, token.position.column, token.kind, token.text
    )
}

/// Parse and print the outline of the tree, optionally followed by the procedure trace.
pub fn print_outline(path: &Path, trace: bool, max_depth: Option<usize>) -> CliResult<ExitCode> {
    let mut options = ParseOptions::default().with_trace(trace);
    if let Some(max_depth) = max_depth {
        options = options.with_max_depth(max_depth);
    }
    let (tree, events) = parse_file(path, options)?;
    print!("{tree}");
    for event in &events {
        let phase = match event.phase {
            TracePhase::Enter => "enter",
            TracePhase::Exit => "exit",
        };
        println!("{phase} {} @{}", event.procedure, event.cursor);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print every node matching `kinds` under `filter`, one per line.
pub fn find_nodes(path: &Path, kinds: &[String], filter: SearchFilter) -> CliResult<ExitCode> {
    let kinds = kinds
        .iter()
        .map(|name| {
            NodeKind::from_name(name).ok_or_else(|| CliError::failure(format!("Unknown node kind '{name}'")))
        })
        .collect::<CliResult<Vec<_>>>()?;

    let (tree, _) = parse_file(path, ParseOptions::default())?;
    for node in tree.find_nodes(&kinds, filter) {
        let position = node.position();
        match node.name() {
            Some(name) => println!("{}:{}\t{}\t{}", position.line, position.column, node.kind(), name),
            None => println!("{}:{}\t{}", position.line, position.column, node.kind()),
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and report success or the first error.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let (tree, _) = parse_file(path, ParseOptions::default())?;
    tracing::info!(path = %path.display(), types = tree.unit().types.len(), "parsed");
    println!("{}: ok", path.display());
    Ok(ExitCode::SUCCESS)
}
