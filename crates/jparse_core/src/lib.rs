//! Canonical Java language vocabulary for the jparse workspace.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that both the
//! reference tokenizer and the grammar engine consult: reserved words, modifiers, primitive type names,
//! operator/separator spellings and the binary operator precedence table.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, ...) instead of comparing spellings.

pub mod lang;
