//! Reference tokenizer for Java source text.
//!
//! The grammar engine does not depend on this module: it accepts any token slice that honours the
//! contract documented in [`tokens`]. This tokenizer exists so that tools and tests can go from
//! source text to such a slice.
//!
//! Handles:
//! - Identifiers, classified against the keyword / modifier / basic-type registries
//! - Integer, floating-point, character and string literals (`true`/`false`/`null` included)
//! - Operators and separators by maximal munch, except that `>>` and `>>>` are emitted as separate
//!   `>` tokens (see the token contract)
//! - `//` and `/* */` comments, which are skipped
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`TokenKind`, `Token`, `Position`, `LiteralKind`)
//! - `literals` - Numeric, character and string literal scanning

mod literals;
pub mod tokens;

pub use tokens::{LiteralKind, Position, Token, TokenKind};

use crate::diagnostics::LexError;
use jparse_core::lang::operators::{self, OperatorId};
use jparse_core::lang::{basic_types, keywords, modifiers};

/// Lexer for Java source code.
///
/// Converts source text into tokens, stopping at the first lexical error.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    /// Byte offset just past the last consumed character.
    current_pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with exactly one [`TokenKind::EndOfInput`] token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.skip_trivia()?;
            if self.is_at_end() {
                break;
            }
            self.scan_token()?;
        }

        let end = self.position();
        self.tokens.push(Token::end_of_input(end));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn error(&self, message: impl Into<String>, position: Position) -> LexError {
        LexError::new(message, position)
    }

    fn push(&mut self, kind: TokenKind, start: usize, position: Position) {
        let text = &self.source[start..self.current_pos];
        self.tokens.push(Token::new(kind, text, position));
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_next() == Some('*') => {
                    let start = self.position();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                            None => return Err(self.error("unterminated block comment", start)),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current_pos;
        let position = self.position();

        let Some(c) = self.peek() else {
            return Ok(());
        };

        if is_ident_start(c) {
            self.scan_identifier(start, position);
            return Ok(());
        }
        if c.is_ascii_digit() || (c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit())) {
            let kind = self.scan_number(position)?;
            self.push(TokenKind::Literal(kind), start, position);
            return Ok(());
        }

        match c {
            '"' => {
                self.scan_string(position)?;
                self.push(TokenKind::Literal(LiteralKind::String), start, position);
            }
            '\'' => {
                self.scan_char(position)?;
                self.push(TokenKind::Literal(LiteralKind::Character), start, position);
            }
            '@' => {
                self.advance();
                self.push(TokenKind::Annotation, start, position);
            }
            _ => {
                let id = self.scan_operator(start, position)?;
                self.push(TokenKind::Operator(id), start, position);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Operators
    // ========================================================================

    /// Maximal munch over the operator registry, never producing `>>` or `>>>`.
    fn scan_operator(&mut self, start: usize, position: Position) -> Result<OperatorId, LexError> {
        for len in (1..=operators::MAX_SPELLING_LEN).rev() {
            let Some(candidate) = self.source.get(start..start + len) else {
                continue;
            };
            if candidate == ">>" || candidate == ">>>" {
                continue;
            }
            if let Some(id) = operators::from_str(candidate) {
                for _ in 0..candidate.chars().count() {
                    self.advance();
                }
                return Ok(id);
            }
        }

        let c = self.peek().unwrap_or('\0');
        Err(self.error(format!("unexpected character {c:?}"), position))
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, position: Position) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];
        let kind = classify_word(spelling);
        self.push(kind, start, position);
    }
}

/// Classify a scanned word against the vocabulary registries.
fn classify_word(spelling: &str) -> TokenKind {
    if let Some(id) = keywords::from_str(spelling) {
        TokenKind::Keyword(id)
    } else if let Some(id) = modifiers::from_str(spelling) {
        TokenKind::Modifier(id)
    } else if let Some(id) = basic_types::from_str(spelling) {
        TokenKind::BasicType(id)
    } else {
        match spelling {
            "true" | "false" => TokenKind::Literal(LiteralKind::Boolean),
            "null" => TokenKind::Literal(LiteralKind::Null),
            _ => TokenKind::Identifier,
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Java identifiers start with a letter, `_` or `$` (Unicode letters included).
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
