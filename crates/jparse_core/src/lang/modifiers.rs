//! Modifier vocabulary.
//!
//! Java modifiers are reserved words that may precede declarations. Two of them double as statement
//! keywords: `default` (switch labels) and `synchronized` (synchronized blocks). They are still
//! registered here exactly once; the parser decides from context which role a token plays.
//!
//! ## Examples
//! ```rust
//! use jparse_core::lang::modifiers::{self, ModifierId};
//!
//! assert_eq!(modifiers::from_str("static"), Some(ModifierId::Static));
//! assert_eq!(modifiers::as_str(ModifierId::Strictfp), "strictfp");
//! ```

use super::registry::{JLS_MODIFIERS, JlsSection, Since};

/// Stable identifier for every modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierId {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Default,
}

/// Metadata for a modifier.
#[derive(Debug, Clone, Copy)]
pub struct ModifierInfo {
    pub id: ModifierId,
    pub canonical: &'static str,
    /// `true` for access modifiers (`public`, `protected`, `private`).
    pub is_access: bool,
    pub defined_in: JlsSection,
    pub since: Since,
}

/// Registry of all modifiers.
pub const MODIFIERS: &[ModifierInfo] = &[
    info(ModifierId::Public, "public", true, Since::JAVA_1_0),
    info(ModifierId::Protected, "protected", true, Since::JAVA_1_0),
    info(ModifierId::Private, "private", true, Since::JAVA_1_0),
    info(ModifierId::Static, "static", false, Since::JAVA_1_0),
    info(ModifierId::Abstract, "abstract", false, Since::JAVA_1_0),
    info(ModifierId::Final, "final", false, Since::JAVA_1_0),
    info(ModifierId::Native, "native", false, Since::JAVA_1_0),
    info(ModifierId::Synchronized, "synchronized", false, Since::JAVA_1_0),
    info(ModifierId::Transient, "transient", false, Since::JAVA_1_0),
    info(ModifierId::Volatile, "volatile", false, Since::JAVA_1_0),
    info(ModifierId::Strictfp, "strictfp", false, Since::JAVA_1_2),
    // Interface default methods; also the `default:` switch label.
    info(ModifierId::Default, "default", false, Since::JAVA_8),
];

/// Canonical spelling.
pub fn as_str(id: ModifierId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: ModifierId) -> &'static ModifierInfo {
    MODIFIERS.iter().find(|m| m.id == id).expect("modifier info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<ModifierId> {
    MODIFIERS.iter().find(|m| m.canonical == s).map(|m| m.id)
}

const fn info(id: ModifierId, canonical: &'static str, is_access: bool, since: Since) -> ModifierInfo {
    ModifierInfo {
        id,
        canonical,
        is_access,
        defined_in: JLS_MODIFIERS,
        since,
    }
}
