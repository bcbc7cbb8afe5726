//! Shareable metadata for `jparse_core::lang` registries.
//!
//! Every registry row records where the item is defined in the Java Language Specification and which
//! Java release introduced it. The types here are `Copy` so registries can live in `const` tables.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the
//!   tokenizer and parser.

/// Section of the Java Language Specification (SE 8 edition) defining an item, e.g. `"JLS 3.9"`.
pub type JlsSection = &'static str;

/// JLS 3.9: keywords.
pub const JLS_KEYWORDS: JlsSection = "JLS 3.9";

/// JLS 3.12: operators.
pub const JLS_OPERATORS: JlsSection = "JLS 3.12";

/// JLS 3.11: separators.
pub const JLS_SEPARATORS: JlsSection = "JLS 3.11";

/// JLS 4.2: primitive types.
pub const JLS_PRIMITIVES: JlsSection = "JLS 4.2";

/// JLS 8.1.1 / 8.3.1 / 8.4.3: class, field and method modifiers.
pub const JLS_MODIFIERS: JlsSection = "JLS 8.1.1";

/// Java release that introduced an item: `Since(1, 4)` is Java 1.4, `Since(8, 0)` is Java 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

impl Since {
    /// Java 1.0.
    pub const JAVA_1_0: Since = Since(1, 0);
    /// Java 1.2 (`strictfp`).
    pub const JAVA_1_2: Since = Since(1, 2);
    /// Java 1.4 (`assert`).
    pub const JAVA_1_4: Since = Since(1, 4);
    /// Java 5 (`enum`, `...`, `@`).
    pub const JAVA_5: Since = Since(5, 0);
    /// Java 8 (`->`, `::`, `default` methods).
    pub const JAVA_8: Since = Since(8, 0);
}

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 1 {
            write!(f, "1.{}", self.1)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Describe whether a vocabulary item is usable or merely reserved.
///
/// ## Examples
/// ```rust
/// use jparse_core::lang::registry::Stability;
///
/// let s = Stability::Reserved;
/// assert_eq!(format!("{s:?}"), "Reserved");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Reserved by the language but not used by any production (`goto`, `const`).
    Reserved,
}
