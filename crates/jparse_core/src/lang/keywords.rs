//! Define the reserved keyword vocabulary for Java.
//!
//! This module is the single source of truth for reserved words that are neither modifiers nor
//! primitive type names: a stable identifier ([`KeywordId`]) plus a const metadata table
//! ([`KEYWORDS`]).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Modifiers (`public`, `static`, `default`, `synchronized`, ...) live in [`crate::lang::modifiers`],
//!   primitive type names in [`crate::lang::basic_types`]. A spelling belongs to exactly one registry.
//! - `true`, `false` and `null` are literals, not keywords.
//!
//! ## Examples
//! ```rust
//! use jparse_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("instanceof"), Some(KeywordId::Instanceof));
//! assert_eq!(keywords::as_str(KeywordId::Instanceof), "instanceof");
//! assert_eq!(keywords::from_str("public"), None); // a modifier
//! ```

use super::registry::{JLS_KEYWORDS, JlsSection, Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Package,
    Import,
    Class,
    Interface,
    Enum,
    Extends,
    Implements,
    Throws,
    Void,

    // Statements
    If,
    Else,
    For,
    While,
    Do,
    Switch,
    Case,
    Try,
    Catch,
    Finally,
    Throw,
    Return,
    Break,
    Continue,
    Assert,

    // Expressions
    New,
    This,
    Super,
    Instanceof,

    // Reserved, unused
    Goto,
    Const,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Declaration,
    Statement,
    Expression,
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub defined_in: JlsSection,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Package, "package", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Import, "import", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Interface, "interface", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration, Since::JAVA_5),
    info(KeywordId::Extends, "extends", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Implements, "implements", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Throws, "throws", KeywordCategory::Declaration, Since::JAVA_1_0),
    info(KeywordId::Void, "void", KeywordCategory::Declaration, Since::JAVA_1_0),
    // Statements
    info(KeywordId::If, "if", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Else, "else", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::For, "for", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::While, "while", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Do, "do", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Switch, "switch", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Case, "case", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Try, "try", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Catch, "catch", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Finally, "finally", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Throw, "throw", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Return, "return", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Break, "break", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Continue, "continue", KeywordCategory::Statement, Since::JAVA_1_0),
    info(KeywordId::Assert, "assert", KeywordCategory::Statement, Since::JAVA_1_4),
    // Expressions
    info(KeywordId::New, "new", KeywordCategory::Expression, Since::JAVA_1_0),
    info(KeywordId::This, "this", KeywordCategory::Expression, Since::JAVA_1_0),
    info(KeywordId::Super, "super", KeywordCategory::Expression, Since::JAVA_1_0),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Expression, Since::JAVA_1_0),
    // Reserved
    reserved(KeywordId::Goto, "goto"),
    reserved(KeywordId::Const, "const"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error; the guardrail
///   tests check every id).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved keyword.
/// - `None` otherwise (including modifiers and primitive type names).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory, since: Since) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        defined_in: JLS_KEYWORDS,
        since,
        stability: Stability::Stable,
    }
}

const fn reserved(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category: KeywordCategory::Reserved,
        defined_in: JLS_KEYWORDS,
        since: Since::JAVA_1_0,
        stability: Stability::Reserved,
    }
}
