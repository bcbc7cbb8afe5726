//! Operator and separator vocabulary, plus the binary precedence table.
//!
//! This module defines every symbolic token of Java (operators *and* separators) with metadata such
//! as category and prefix/postfix/infix use. The infix rows point into [`PRECEDENCE_TABLE`], the
//! explicit, ordered precedence/associativity table the expression folder consults.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact (no trimming).
//! - `instanceof` is a keyword but binds at [`Precedence::Relational`]; see [`INSTANCEOF_PRECEDENCE`].
//! - The ternary continuation `? ... :` is folded as a single right-associative infix operator at
//!   [`Precedence::Ternary`]; the registry row for `?` carries that level.
//!
//! ## Examples
//! ```rust
//! use jparse_core::lang::operators::{self, Associativity, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::info_for(OperatorId::Plus).precedence, Some(Precedence::Additive));
//! assert_eq!(operators::binding(Precedence::Assignment).map(|b| b.associativity), Some(Associativity::Right));
//! ```

use super::registry::{JLS_OPERATORS, JLS_SEPARATORS, JlsSection, Since};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary precedence levels, lowest binding first.
///
/// The discriminant order is the binding order: a larger level binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Assignment,
    Ternary,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

/// One row of the precedence table.
#[derive(Debug, Clone, Copy)]
pub struct PrecedenceInfo {
    pub level: Precedence,
    /// Strictly increasing from the first row; higher binds tighter.
    pub rank: u8,
    pub associativity: Associativity,
    pub description: &'static str,
    pub defined_in: JlsSection,
}

/// The binary precedence table, ordered lowest to highest.
pub const PRECEDENCE_TABLE: &[PrecedenceInfo] = &[
    level(Precedence::Assignment, 1, Associativity::Right, "assignment and compound assignment", "JLS 15.26"),
    level(Precedence::Ternary, 2, Associativity::Right, "conditional `? :`", "JLS 15.25"),
    level(Precedence::LogicalOr, 3, Associativity::Left, "conditional-or `||`", "JLS 15.24"),
    level(Precedence::LogicalAnd, 4, Associativity::Left, "conditional-and `&&`", "JLS 15.23"),
    level(Precedence::BitwiseOr, 5, Associativity::Left, "inclusive or `|`", "JLS 15.22"),
    level(Precedence::BitwiseXor, 6, Associativity::Left, "exclusive or `^`", "JLS 15.22"),
    level(Precedence::BitwiseAnd, 7, Associativity::Left, "and `&`", "JLS 15.22"),
    level(Precedence::Equality, 8, Associativity::Left, "equality `==` `!=`", "JLS 15.21"),
    level(Precedence::Relational, 9, Associativity::Left, "relational and `instanceof`", "JLS 15.20"),
    level(Precedence::Shift, 10, Associativity::Left, "shift `<<` `>>` `>>>`", "JLS 15.19"),
    level(Precedence::Additive, 11, Associativity::Left, "additive `+` `-`", "JLS 15.18"),
    level(Precedence::Multiplicative, 12, Associativity::Left, "multiplicative `*` `/` `%`", "JLS 15.17"),
];

/// Precedence of the `instanceof` keyword operator.
pub const INSTANCEOF_PRECEDENCE: Precedence = Precedence::Relational;

/// Look up the table row for a precedence level.
///
/// ## Returns
/// - `None` only if the table is missing a level (a programming error the parser reports as an
///   internal error rather than panicking).
pub fn binding(level: Precedence) -> Option<&'static PrecedenceInfo> {
    PRECEDENCE_TABLE.iter().find(|row| row.level == level)
}

/// Broad grouping for symbolic tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// Brackets, braces, `;`, `,`, `.`, `...`, `::`, `->`.
    Separator,
    Arithmetic,
    Bitwise,
    Logical,
    Comparison,
    Assignment,
    /// `?` and `:`.
    Conditional,
    /// `++` and `--`.
    Increment,
}

/// Stable identifier for every operator and separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Separators
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Ellipsis,
    ColonColon,
    Arrow,

    // Conditional
    Question,
    Colon,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    ShlAssign,
    ShrAssign,
    UshrAssign,

    // Binary
    OrOr,
    AndAnd,
    BitOr,
    BitXor,
    BitAnd,
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Ushr,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Unary only
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator or separator.
///
/// ## Notes
/// - `precedence` is set for tokens usable as an infix operator (including assignment and `?`).
/// - `prefix`/`postfix` mark unary use; `+` and `-` are both prefix and infix.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub precedence: Option<Precedence>,
    pub prefix: bool,
    pub postfix: bool,
    pub defined_in: JlsSection,
    pub since: Since,
}

/// Registry of all operators and separators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Separators
    sep(OperatorId::LParen, "("),
    sep(OperatorId::RParen, ")"),
    sep(OperatorId::LBrace, "{"),
    sep(OperatorId::RBrace, "}"),
    sep(OperatorId::LBracket, "["),
    sep(OperatorId::RBracket, "]"),
    sep(OperatorId::Semicolon, ";"),
    sep(OperatorId::Comma, ","),
    sep(OperatorId::Dot, "."),
    OperatorInfo { since: Since::JAVA_5, ..sep(OperatorId::Ellipsis, "...") },
    OperatorInfo { since: Since::JAVA_8, ..sep(OperatorId::ColonColon, "::") },
    OperatorInfo { since: Since::JAVA_8, ..sep(OperatorId::Arrow, "->") },
    // Conditional
    infix(OperatorId::Question, "?", OperatorCategory::Conditional, Precedence::Ternary),
    OperatorInfo {
        precedence: None,
        ..infix(OperatorId::Colon, ":", OperatorCategory::Conditional, Precedence::Ternary)
    },
    // Assignment
    assign(OperatorId::Assign, "="),
    assign(OperatorId::PlusAssign, "+="),
    assign(OperatorId::MinusAssign, "-="),
    assign(OperatorId::StarAssign, "*="),
    assign(OperatorId::SlashAssign, "/="),
    assign(OperatorId::PercentAssign, "%="),
    assign(OperatorId::AndAssign, "&="),
    assign(OperatorId::OrAssign, "|="),
    assign(OperatorId::XorAssign, "^="),
    assign(OperatorId::ShlAssign, "<<="),
    assign(OperatorId::ShrAssign, ">>="),
    assign(OperatorId::UshrAssign, ">>>="),
    // Binary
    infix(OperatorId::OrOr, "||", OperatorCategory::Logical, Precedence::LogicalOr),
    infix(OperatorId::AndAnd, "&&", OperatorCategory::Logical, Precedence::LogicalAnd),
    infix(OperatorId::BitOr, "|", OperatorCategory::Bitwise, Precedence::BitwiseOr),
    infix(OperatorId::BitXor, "^", OperatorCategory::Bitwise, Precedence::BitwiseXor),
    infix(OperatorId::BitAnd, "&", OperatorCategory::Bitwise, Precedence::BitwiseAnd),
    infix(OperatorId::EqEq, "==", OperatorCategory::Comparison, Precedence::Equality),
    infix(OperatorId::NotEq, "!=", OperatorCategory::Comparison, Precedence::Equality),
    infix(OperatorId::Lt, "<", OperatorCategory::Comparison, Precedence::Relational),
    infix(OperatorId::Gt, ">", OperatorCategory::Comparison, Precedence::Relational),
    infix(OperatorId::LtEq, "<=", OperatorCategory::Comparison, Precedence::Relational),
    infix(OperatorId::GtEq, ">=", OperatorCategory::Comparison, Precedence::Relational),
    infix(OperatorId::Shl, "<<", OperatorCategory::Bitwise, Precedence::Shift),
    infix(OperatorId::Shr, ">>", OperatorCategory::Bitwise, Precedence::Shift),
    infix(OperatorId::Ushr, ">>>", OperatorCategory::Bitwise, Precedence::Shift),
    OperatorInfo {
        prefix: true,
        ..infix(OperatorId::Plus, "+", OperatorCategory::Arithmetic, Precedence::Additive)
    },
    OperatorInfo {
        prefix: true,
        ..infix(OperatorId::Minus, "-", OperatorCategory::Arithmetic, Precedence::Additive)
    },
    infix(OperatorId::Star, "*", OperatorCategory::Arithmetic, Precedence::Multiplicative),
    infix(OperatorId::Slash, "/", OperatorCategory::Arithmetic, Precedence::Multiplicative),
    infix(OperatorId::Percent, "%", OperatorCategory::Arithmetic, Precedence::Multiplicative),
    // Unary only
    unary(OperatorId::Bang, "!", OperatorCategory::Logical, false),
    unary(OperatorId::Tilde, "~", OperatorCategory::Bitwise, false),
    unary(OperatorId::PlusPlus, "++", OperatorCategory::Increment, true),
    unary(OperatorId::MinusMinus, "--", OperatorCategory::Increment, true),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Binary precedence of an operator, or `None` for separators and unary-only operators.
///
/// Unlike [`info_for`] this never panics, so the expression folder can report a missing entry as an
/// internal error.
pub fn precedence_of(id: OperatorId) -> Option<Precedence> {
    OPERATORS.iter().find(|o| o.id == id).and_then(|o| o.precedence)
}

/// Return `true` for `=` and the compound assignment operators.
pub fn is_assignment(id: OperatorId) -> bool {
    info_for(id).category == OperatorCategory::Assignment
}

/// Longest operator spelling, in characters. Tokenizers use it to bound maximal munch.
pub const MAX_SPELLING_LEN: usize = 4;

// --- helpers -----------------------------------------------------------------

const fn sep(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category: OperatorCategory::Separator,
        precedence: None,
        prefix: false,
        postfix: false,
        defined_in: JLS_SEPARATORS,
        since: Since::JAVA_1_0,
    }
}

const fn infix(id: OperatorId, spelling: &'static str, category: OperatorCategory, precedence: Precedence) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence: Some(precedence),
        prefix: false,
        postfix: false,
        defined_in: JLS_OPERATORS,
        since: Since::JAVA_1_0,
    }
}

const fn assign(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    infix(id, spelling, OperatorCategory::Assignment, Precedence::Assignment)
}

const fn unary(id: OperatorId, spelling: &'static str, category: OperatorCategory, postfix: bool) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence: None,
        prefix: true,
        postfix,
        defined_in: JLS_OPERATORS,
        since: Since::JAVA_1_0,
    }
}

const fn level(
    level: Precedence,
    rank: u8,
    associativity: Associativity,
    description: &'static str,
    defined_in: JlsSection,
) -> PrecedenceInfo {
    PrecedenceInfo {
        level,
        rank,
        associativity,
        description,
        defined_in,
    }
}
