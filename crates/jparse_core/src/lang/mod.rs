//! Java language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, modifiers,
//! primitive type names, and operators/separators (including the binary precedence table).
//!
//! The design goal is to avoid stringly-typed checks scattered across the tokenizer and parser.
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The tokenizer/parser enforce syntax; registries provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use jparse_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("class"), Some(KeywordId::Class));
//! assert_eq!(keywords::as_str(KeywordId::Class), "class");
//! ```

pub mod basic_types;
pub mod keywords;
pub mod modifiers;
pub mod operators;
pub mod registry;
