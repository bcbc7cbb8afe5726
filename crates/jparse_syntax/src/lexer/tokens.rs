//! Token types consumed by the grammar engine.
//!
//! Tokens use **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Modifier(ModifierId)` for modifiers (including `default` and `synchronized`)
//! - `BasicType(BasicTypeId)` for primitive type names
//! - `Operator(OperatorId)` for operators *and* separators
//!
//! ## Token contract
//! - The slice ends with exactly one [`TokenKind::EndOfInput`] token.
//! - `>` is always delivered as individual `>` tokens (only `>=`, `>>=` and `>>>=` are fused), so that
//!   nested generic closers like `List<List<String>>` need no token splitting. The grammar engine
//!   re-fuses adjacent `>` tokens into shift operators in expression context.
//! - Positions are 1-based `(line, column)` of the token's first character.

use std::fmt;

use jparse_core::lang::basic_types::BasicTypeId;
use jparse_core::lang::keywords::KeywordId;
use jparse_core::lang::modifiers::ModifierId;
use jparse_core::lang::operators::OperatorId;

/// Source position (1-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Kind of literal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    FloatingPoint,
    Character,
    String,
    Boolean,
    Null,
}

/// Kind of token. This is a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(KeywordId),
    Modifier(ModifierId),
    BasicType(BasicTypeId),
    Operator(OperatorId),
    Literal(LiteralKind),
    /// `@`, introducing an annotation or `@interface`.
    Annotation,
    EndOfInput,
}

/// A token with its kind, source text and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Construct the end-of-input sentinel.
    pub fn end_of_input(position: Position) -> Self {
        Self::new(TokenKind::EndOfInput, "", position)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword(_) => write!(f, "keyword"),
            TokenKind::Modifier(_) => write!(f, "modifier"),
            TokenKind::BasicType(_) => write!(f, "basic type"),
            TokenKind::Operator(_) => write!(f, "operator"),
            TokenKind::Literal(_) => write!(f, "literal"),
            TokenKind::Annotation => write!(f, "annotation"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}
