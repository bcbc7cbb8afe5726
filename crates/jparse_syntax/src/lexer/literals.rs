//! Numeric, character and string literal scanning.
//!
//! Literal tokens keep their exact source text; this module only validates their shape and reports
//! the literal kind.

use super::{Lexer, LiteralKind, Position, is_ident_continue};
use crate::diagnostics::LexError;

impl<'a> Lexer<'a> {
    // ========================================================================
    // Numbers
    // ========================================================================

    /// Scan an integer or floating-point literal (decimal, hex, octal, binary).
    pub(super) fn scan_number(&mut self, position: Position) -> Result<LiteralKind, LexError> {
        let kind = if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'X')) {
            self.advance();
            self.advance();
            self.scan_hex(position)?
        } else if self.peek() == Some('0') && matches!(self.peek_next(), Some('b' | 'B')) {
            self.advance();
            self.advance();
            if self.eat_digits(|c| c == '0' || c == '1') == 0 {
                return Err(self.error("malformed binary literal", position));
            }
            self.eat_integer_suffix();
            LiteralKind::Integer
        } else {
            self.scan_decimal(position)?
        };

        if self.peek().is_some_and(is_ident_continue) {
            return Err(self.error("malformed numeric literal", position));
        }
        Ok(kind)
    }

    fn scan_hex(&mut self, position: Position) -> Result<LiteralKind, LexError> {
        let digits = self.eat_digits(|c| c.is_ascii_hexdigit());
        let mut fraction = 0;
        let mut has_point = false;
        if self.peek() == Some('.') {
            self.advance();
            has_point = true;
            fraction = self.eat_digits(|c| c.is_ascii_hexdigit());
        }
        if digits == 0 && fraction == 0 {
            return Err(self.error("malformed hexadecimal literal", position));
        }

        if matches!(self.peek(), Some('p' | 'P')) {
            self.advance();
            self.scan_exponent(position)?;
            self.eat_float_suffix();
            Ok(LiteralKind::FloatingPoint)
        } else if has_point {
            Err(self.error(
                "hexadecimal floating-point literal requires a binary exponent",
                position,
            ))
        } else {
            self.eat_integer_suffix();
            Ok(LiteralKind::Integer)
        }
    }

    fn scan_decimal(&mut self, position: Position) -> Result<LiteralKind, LexError> {
        let digits = self.eat_digits(|c| c.is_ascii_digit());
        let mut is_float = false;

        if self.peek() == Some('.') && (digits == 0 || self.point_continues_number()) {
            self.advance();
            self.eat_digits(|c| c.is_ascii_digit());
            is_float = true;
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            self.scan_exponent(position)?;
            is_float = true;
        }
        if matches!(self.peek(), Some('f' | 'F' | 'd' | 'D')) {
            self.advance();
            is_float = true;
        }

        if is_float {
            Ok(LiteralKind::FloatingPoint)
        } else {
            self.eat_integer_suffix();
            Ok(LiteralKind::Integer)
        }
    }

    /// After integer digits, a `.` belongs to the literal unless it starts member access.
    fn point_continues_number(&self) -> bool {
        match self.peek_next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('e' | 'E' | 'f' | 'F' | 'd' | 'D') => true,
            Some(c) => !is_ident_continue(c) && c != '.',
            None => true,
        }
    }

    fn scan_exponent(&mut self, position: Position) -> Result<(), LexError> {
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        if self.eat_digits(|c| c.is_ascii_digit()) == 0 {
            return Err(self.error("malformed exponent in floating-point literal", position));
        }
        Ok(())
    }

    /// Consume digits accepted by `is_digit` and `_` separators; return the number of digits.
    fn eat_digits(&mut self, is_digit: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if is_digit(c) {
                count += 1;
            } else if c != '_' {
                break;
            }
            self.advance();
        }
        count
    }

    fn eat_integer_suffix(&mut self) {
        if matches!(self.peek(), Some('l' | 'L')) {
            self.advance();
        }
    }

    fn eat_float_suffix(&mut self) {
        if matches!(self.peek(), Some('f' | 'F' | 'd' | 'D')) {
            self.advance();
        }
    }

    // ========================================================================
    // Strings and characters
    // ========================================================================

    pub(super) fn scan_string(&mut self, position: Position) -> Result<(), LexError> {
        self.advance(); // opening quote
        loop {
            match self.peek() {
                None | Some('\n') => return Err(self.error("unterminated string literal", position)),
                Some('"') => {
                    self.advance();
                    return Ok(());
                }
                Some('\\') => self.scan_escape()?,
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    pub(super) fn scan_char(&mut self, position: Position) -> Result<(), LexError> {
        self.advance(); // opening quote
        match self.peek() {
            Some('\'') => return Err(self.error("empty character literal", position)),
            None | Some('\n') => return Err(self.error("unterminated character literal", position)),
            Some('\\') => self.scan_escape()?,
            Some(_) => {
                self.advance();
            }
        }
        if self.match_char('\'') {
            Ok(())
        } else {
            Err(self.error("unterminated character literal", position))
        }
    }

    fn scan_escape(&mut self) -> Result<(), LexError> {
        let position = self.position();
        self.advance(); // backslash
        match self.peek() {
            Some('b' | 't' | 'n' | 'f' | 'r' | 's' | '"' | '\'' | '\\') => {
                self.advance();
                Ok(())
            }
            Some('0'..='7') => {
                // Octal escape: up to three digits, value at most \377.
                let first = self.advance();
                let max_len = if matches!(first, Some('0'..='3')) { 3 } else { 2 };
                for _ in 1..max_len {
                    if matches!(self.peek(), Some('0'..='7')) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                Ok(())
            }
            Some('u') => {
                while self.match_char('u') {}
                for _ in 0..4 {
                    if self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                        self.advance();
                    } else {
                        return Err(self.error("malformed unicode escape", position));
                    }
                }
                Ok(())
            }
            _ => Err(self.error("invalid escape sequence", position)),
        }
    }
}
