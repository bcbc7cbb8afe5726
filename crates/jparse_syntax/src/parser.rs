//! Recursive-descent parser for Java source.
//!
//! Converts a token slice into a typed [`CompilationUnit`]. Every grammar production is one method on
//! [`Parser`]; alternatives are chosen with bounded, non-destructive lookahead over the token slice,
//! so the tree is built once with no later repair.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use jparse_syntax::{lexer, parser};
//!
//! let source = "package p; import a.B; class C {}";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.imports.len(), 1);
//! ```
//!
//! ## Notes
//! - Expressions are parsed in two stages: a left-to-right scan collecting operands and infix
//!   operators, then [`crate::precedence::fold`].
//! - Parsing stops at the first syntax error; there is no recovery.

use crate::ast::*;
use crate::cursor::{Pat, TokenCursor};
use crate::diagnostics::ParseError;
use crate::lexer::{Position, Token, TokenKind};
use crate::precedence::{self, InfixOp, Item, Operand};
use jparse_core::lang::keywords::KeywordId;
use jparse_core::lang::modifiers::ModifierId;
use jparse_core::lang::operators::{self, OperatorId, Precedence};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/lookahead.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
