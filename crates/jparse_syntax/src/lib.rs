//! Java syntax frontend: tokens, reference tokenizer, token cursor, grammar engine, AST.
//!
//! This crate is dependency-light and intended for reuse by analysis and transformation tools that
//! need a typed Java syntax tree without a Java toolchain.
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution, no type checking.
//! - Vocabulary identity (keywords/modifiers/operators/precedence) comes from `jparse_core::lang`.
//! - The grammar engine consumes any token slice honouring the token contract documented on
//!   [`lexer::Token`]; [`lexer::lex`] is a reference tokenizer that produces such slices.
//!
//! ## Examples
//! ```rust,no_run
//! use jparse_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package p; class C {}").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.types.len(), 1);
//! ```

pub mod ast;
pub mod cursor;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod token_helpers;
pub mod visit;
