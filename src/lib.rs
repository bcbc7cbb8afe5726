#![forbid(unsafe_code)]
//! jparse: a Java (SE 8) parser producing a fully typed syntax tree.
//!
//! This crate is the facade over the workspace:
//! - `jparse_core::lang` holds the vocabulary registries (keywords, modifiers, basic types, operators
//!   and the precedence table).
//! - `jparse_syntax` holds the token model, the reference tokenizer, the token cursor, the grammar
//!   engine and the AST.
//! - This crate adds [`parse_source`] (lex + parse in one call), a unified [`Error`], miette-based
//!   [`diagnostics`] and the [`tree`] query API.
//!
//! ## Panic Policy
//!
//! - **Production code**: `Result` / `Option` with `?`. Malformed input never panics; defects in the
//!   grammar engine surface as [`ParseError::Internal`].
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust,no_run
//! let unit = jparse::parse_source("package p; import a.B; class C {}").unwrap();
//! assert_eq!(unit.package.unwrap().node.name.to_string(), "p");
//! ```

pub mod cli;
pub mod diagnostics;
pub mod tree;

pub use jparse_syntax::ast;
pub use jparse_syntax::cursor;
pub use jparse_syntax::lexer;
pub use jparse_syntax::parser;
pub use jparse_syntax::precedence;
pub use jparse_syntax::visit;

pub use jparse_syntax::diagnostics::{LexError, ParseError};
pub use jparse_syntax::parser::{ParseOptions, Parser, TraceEvent, TracePhase};

pub use tree::{SearchFilter, SyntaxTree};

use ast::CompilationUnit;
use lexer::Position;
use miette::Diagnostic;
use thiserror::Error;

/// Any failure on the way from source text to a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Source position the error points at, when there is one.
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Lex(e) => Some(e.position),
            Error::Parse(e) => e.position(),
        }
    }

    /// Short description without the position prefix.
    pub fn description(&self) -> &str {
        match self {
            Error::Lex(e) => &e.message,
            Error::Parse(e) => e.description(),
        }
    }
}

/// Tokenize and parse a complete compilation unit.
///
/// ## Errors
/// - [`Error::Lex`] for the first lexical error.
/// - [`Error::Parse`] for the first syntax error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<CompilationUnit, Error> {
    let tokens = lexer::lex(source)?;
    Ok(parser::parse(&tokens)?)
}

/// Like [`parse_source`], with explicit [`ParseOptions`]; returns the recorded trace as well.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<(CompilationUnit, Vec<TraceEvent>), Error> {
    let tokens = lexer::lex(source)?;
    Ok(parser::parse_with_options(&tokens, options)?)
}
