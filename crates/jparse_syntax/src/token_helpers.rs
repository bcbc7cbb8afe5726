//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites for ID-based tokens.

use crate::lexer::{Token, TokenKind};
use jparse_core::lang::keywords::KeywordId;
use jparse_core::lang::modifiers::ModifierId;
use jparse_core::lang::operators::OperatorId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given modifier.
    pub fn is_modifier(&self, id: ModifierId) -> bool {
        matches!(self, TokenKind::Modifier(m) if *m == id)
    }

    /// Return `true` if this is the given operator or separator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }
}

impl Token {
    /// Text to show in diagnostics for this token.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }

    /// Return `true` if this token sits immediately after `previous` on the same line, with no
    /// whitespace between them.
    pub fn is_adjacent_to(&self, previous: &Token) -> bool {
        self.position.line == previous.position.line
            && self.position.column == previous.position.column + previous.text.chars().count()
    }
}
