//! Token cursor: a positional, read-only view over a token slice.
//!
//! The cursor is the only component that moves through the token stream. It exposes three matching
//! primitives over a set of alternatives ([`Pat`]):
//!
//! - [`TokenCursor::accept`] consumes the next token if it matches, else fails with a syntax error
//!   positioned at that token.
//! - [`TokenCursor::try_accept`] consumes on match and reports success without failing.
//! - [`TokenCursor::would_accept`] matches at a forward offset without consuming.
//!
//! ## Notes
//! - Lookahead is a pure index into the slice: peeking never mutates the cursor, so a failed probe
//!   leaves no trace.
//! - End-of-input is a sentinel. Peeking past it keeps returning the sentinel; consuming it is a
//!   syntax error.
//! - Returned tokens borrow the slice (`'a`), not the cursor, so callers can hold them across
//!   further cursor moves.

use std::fmt;

use jparse_core::lang::basic_types::{self, BasicTypeId};
use jparse_core::lang::keywords::{self, KeywordId};
use jparse_core::lang::modifiers::{self, ModifierId};
use jparse_core::lang::operators::{self, OperatorId};

use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};

/// One alternative a token can match: a whole token class, or one specific vocabulary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pat {
    Identifier,
    AnyLiteral,
    AnyModifier,
    AnyBasicType,
    Annotation,
    EndOfInput,
    Keyword(KeywordId),
    Modifier(ModifierId),
    BasicType(BasicTypeId),
    Operator(OperatorId),
}

impl Pat {
    /// Return `true` if `token` matches this alternative.
    pub fn matches(&self, token: &Token) -> bool {
        match (self, &token.kind) {
            (Pat::Identifier, TokenKind::Identifier)
            | (Pat::AnyLiteral, TokenKind::Literal(_))
            | (Pat::AnyModifier, TokenKind::Modifier(_))
            | (Pat::AnyBasicType, TokenKind::BasicType(_))
            | (Pat::Annotation, TokenKind::Annotation)
            | (Pat::EndOfInput, TokenKind::EndOfInput) => true,
            (Pat::Keyword(a), TokenKind::Keyword(b)) => a == b,
            (Pat::Modifier(a), TokenKind::Modifier(b)) => a == b,
            (Pat::BasicType(a), TokenKind::BasicType(b)) => a == b,
            (Pat::Operator(a), TokenKind::Operator(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Pat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pat::Identifier => write!(f, "identifier"),
            Pat::AnyLiteral => write!(f, "literal"),
            Pat::AnyModifier => write!(f, "modifier"),
            Pat::AnyBasicType => write!(f, "primitive type"),
            Pat::Annotation => write!(f, "'@'"),
            Pat::EndOfInput => write!(f, "end of input"),
            Pat::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            Pat::Modifier(id) => write!(f, "'{}'", modifiers::as_str(*id)),
            Pat::BasicType(id) => write!(f, "'{}'", basic_types::as_str(*id)),
            Pat::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
        }
    }
}

impl From<KeywordId> for Pat {
    fn from(id: KeywordId) -> Self {
        Pat::Keyword(id)
    }
}

impl From<ModifierId> for Pat {
    fn from(id: ModifierId) -> Self {
        Pat::Modifier(id)
    }
}

impl From<BasicTypeId> for Pat {
    fn from(id: BasicTypeId) -> Self {
        Pat::BasicType(id)
    }
}

impl From<OperatorId> for Pat {
    fn from(id: OperatorId) -> Self {
        Pat::Operator(id)
    }
}

/// Render a list of alternatives as `expected X`, `expected X or Y`, `expected one of X, Y, Z`.
pub fn describe_expected(alternatives: &[Pat]) -> String {
    match alternatives {
        [] => "unexpected token".to_string(),
        [one] => format!("expected {one}"),
        [a, b] => format!("expected {a} or {b}"),
        many => {
            let list: Vec<String> = many.iter().map(|p| p.to_string()).collect();
            format!("expected one of {}", list.join(", "))
        }
    }
}

/// Positional view over a token slice terminated by one end-of-input sentinel.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor at the first token.
    ///
    /// ## Errors
    /// - A syntax error if the slice does not end with exactly one end-of-input token.
    pub fn new(tokens: &'a [Token]) -> Result<Self, ParseError> {
        let Some(last) = tokens.last() else {
            return Err(ParseError::syntax(
                "token stream must end with end-of-input",
                "nothing",
                Default::default(),
            ));
        };
        if last.kind != TokenKind::EndOfInput {
            return Err(ParseError::syntax(
                "token stream must end with end-of-input",
                last.describe(),
                last.position,
            ));
        }
        if let Some(stray) = tokens[..tokens.len() - 1]
            .iter()
            .find(|t| t.kind == TokenKind::EndOfInput)
        {
            return Err(ParseError::syntax(
                "end-of-input before the end of the token stream",
                stray.describe(),
                stray.position,
            ));
        }
        Ok(Self { tokens, pos: 0 })
    }

    /// Index of the current token.
    pub fn index(&self) -> usize {
        self.pos
    }

    /// Return the current token without consuming it.
    pub fn peek(&self) -> &'a Token {
        self.look(0)
    }

    /// Return the token `offset` positions ahead without consuming anything.
    ///
    /// Offsets past the end yield the end-of-input sentinel.
    pub fn look(&self, offset: usize) -> &'a Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.saturating_add(offset).min(last)]
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).map(|i| &self.tokens[i])
    }

    /// Return `true` if the current token is the end-of-input sentinel.
    pub fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::EndOfInput
    }

    /// Consume the current token unconditionally.
    ///
    /// ## Errors
    /// - A syntax error when positioned on the end-of-input sentinel.
    pub fn advance(&mut self) -> Result<&'a Token, ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::EndOfInput {
            return Err(self.error_here("unexpected end of input"));
        }
        self.pos += 1;
        Ok(token)
    }

    /// Return `true` if the token at `offset` matches any alternative. Never consumes.
    pub fn would_accept(&self, alternatives: &[Pat], offset: usize) -> bool {
        let token = self.look(offset);
        alternatives.iter().any(|p| p.matches(token))
    }

    /// Return `true` if the tokens starting at the cursor match `sequence` element by element.
    pub fn would_accept_seq(&self, sequence: &[Pat]) -> bool {
        sequence
            .iter()
            .enumerate()
            .all(|(offset, p)| p.matches(self.look(offset)))
    }

    /// Consume the current token if it matches any alternative.
    ///
    /// ## Errors
    /// - A syntax error positioned at the current token listing the alternatives.
    pub fn accept(&mut self, alternatives: &[Pat]) -> Result<&'a Token, ParseError> {
        match self.try_accept(alternatives) {
            Some(token) => Ok(token),
            None => Err(self.error_here(describe_expected(alternatives))),
        }
    }

    /// Consume the current token if it matches any alternative; report whether it did.
    pub fn try_accept(&mut self, alternatives: &[Pat]) -> Option<&'a Token> {
        let token = self.peek();
        if token.kind != TokenKind::EndOfInput && alternatives.iter().any(|p| p.matches(token)) {
            self.pos += 1;
            Some(token)
        } else if token.kind == TokenKind::EndOfInput && alternatives.contains(&Pat::EndOfInput) {
            // The sentinel can be matched but is never stepped over.
            Some(token)
        } else {
            None
        }
    }

    /// Build a syntax error positioned at the current token.
    pub fn error_here(&self, description: impl Into<String>) -> ParseError {
        let token = self.peek();
        ParseError::syntax(description, token.describe(), token.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn rejects_streams_without_sentinel() {
        let err = TokenCursor::new(&[]).unwrap_err();
        assert!(err.is_syntax());

        let mut tokens = lex("a b").unwrap();
        tokens.pop();
        assert!(TokenCursor::new(&tokens).is_err());

        let mut doubled = lex("a").unwrap();
        doubled.push(doubled[1].clone());
        let err = TokenCursor::new(&doubled).unwrap_err();
        assert!(err.description().contains("before the end"));
    }

    #[test]
    fn accept_consumes_or_fails_at_current_token() {
        let tokens = lex("class {").unwrap();
        let mut cursor = TokenCursor::new(&tokens).unwrap();

        cursor.accept(&[KeywordId::Class.into()]).unwrap();
        let err = cursor.accept(&[Pat::Identifier]).unwrap_err();
        assert_eq!(err.position(), Some(tokens[1].position));
        assert_eq!(err.description(), "expected identifier");
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn try_accept_reports_without_failing() {
        let tokens = lex("; x").unwrap();
        let mut cursor = TokenCursor::new(&tokens).unwrap();

        assert!(cursor.try_accept(&[OperatorId::Comma.into()]).is_none());
        assert_eq!(cursor.index(), 0);
        assert!(cursor.try_accept(&[OperatorId::Comma.into(), OperatorId::Semicolon.into()]).is_some());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn would_accept_is_pure() {
        let tokens = lex("List < String > x ;").unwrap();
        let cursor = TokenCursor::new(&tokens).unwrap();

        assert!(cursor.would_accept(&[OperatorId::Lt.into()], 1));
        assert!(cursor.would_accept(&[Pat::Identifier], 4));
        assert!(!cursor.would_accept(&[Pat::Identifier], 5));
        assert!(cursor.would_accept_seq(&[Pat::Identifier, OperatorId::Lt.into(), Pat::Identifier]));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn lookahead_past_end_yields_sentinel() {
        let tokens = lex("a").unwrap();
        let cursor = TokenCursor::new(&tokens).unwrap();
        assert_eq!(cursor.look(10).kind, TokenKind::EndOfInput);
        assert!(cursor.would_accept(&[Pat::EndOfInput], 99));
    }

    #[test]
    fn consuming_the_sentinel_is_an_error() {
        let tokens = lex("").unwrap();
        let mut cursor = TokenCursor::new(&tokens).unwrap();

        assert!(cursor.is_at_end());
        let err = cursor.advance().unwrap_err();
        assert_eq!(err.description(), "unexpected end of input");
        assert!(cursor.accept(&[Pat::EndOfInput]).is_ok());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn expected_descriptions() {
        assert_eq!(describe_expected(&[OperatorId::Semicolon.into()]), "expected ';'");
        assert_eq!(
            describe_expected(&[Pat::Identifier, KeywordId::This.into()]),
            "expected identifier or 'this'"
        );
        assert_eq!(
            describe_expected(&[Pat::Identifier, Pat::AnyBasicType, KeywordId::Void.into()]),
            "expected one of identifier, primitive type, 'void'"
        );
    }
}
