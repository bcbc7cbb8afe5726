//! Error types produced by the tokenizer and the grammar engine.
//!
//! Both error types derive `thiserror::Error` for `Display`/`source` and `miette::Diagnostic` for
//! codes and help text. Positions are 1-based `(line, column)` taken verbatim from the offending
//! token; the facade crate turns them into labeled source spans.

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::Position;

/// Failure of the grammar engine. The first error aborts the parse; no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// The token stream does not match any grammar alternative at `position`.
    #[error("syntax error at {position}: {description} (found {found})")]
    #[diagnostic(code(jparse::syntax))]
    Syntax {
        /// What the grammar expected, e.g. `expected identifier`.
        description: String,
        /// Text of the offending token (`end of input` for the sentinel).
        found: String,
        position: Position,
    },

    /// An implementation invariant was violated. This is a parser defect, never bad input.
    #[error("internal parser error: {message}")]
    #[diagnostic(code(jparse::internal), help("this is a bug in jparse, not in the input"))]
    Internal { message: String },
}

impl ParseError {
    pub fn syntax(description: impl Into<String>, found: impl Into<String>, position: Position) -> Self {
        ParseError::Syntax {
            description: description.into(),
            found: found.into(),
            position,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ParseError::Internal {
            message: message.into(),
        }
    }

    /// Position of the offending token, if this is a syntax error.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Syntax { position, .. } => Some(*position),
            ParseError::Internal { .. } => None,
        }
    }

    /// Return `true` for [`ParseError::Syntax`].
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    /// The expected-construct description (or the internal message).
    pub fn description(&self) -> &str {
        match self {
            ParseError::Syntax { description, .. } => description,
            ParseError::Internal { message } => message,
        }
    }
}

/// Failure of the reference tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("lexical error at {position}: {message}")]
#[diagnostic(code(jparse::lex))]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl LexError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_and_internal_are_distinguishable() {
        let syntax = ParseError::syntax("expected identifier", "{", Position::new(1, 7));
        let internal = ParseError::internal("operand stack underflow");

        assert!(syntax.is_syntax());
        assert!(!internal.is_syntax());
        assert_eq!(syntax.position(), Some(Position::new(1, 7)));
        assert_eq!(internal.position(), None);
        assert_eq!(
            syntax.to_string(),
            "syntax error at 1:7: expected identifier (found {)"
        );
        assert_eq!(internal.to_string(), "internal parser error: operand stack underflow");
    }

    #[test]
    fn diagnostic_codes() {
        let syntax = ParseError::syntax("expected ';'", "}", Position::new(3, 1));
        let code = syntax.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("jparse::syntax"));

        let lex = LexError::new("unterminated string literal", Position::new(2, 5));
        assert_eq!(lex.code().map(|c| c.to_string()).as_deref(), Some("jparse::lex"));
    }
}
