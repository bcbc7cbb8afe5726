//! Primitive ("basic") type vocabulary.
//!
//! ## Examples
//! ```rust
//! use jparse_core::lang::basic_types::{self, BasicTypeId};
//!
//! assert_eq!(basic_types::from_str("int"), Some(BasicTypeId::Int));
//! assert!(basic_types::info_for(BasicTypeId::Double).is_floating);
//! ```

use super::registry::{JLS_PRIMITIVES, JlsSection};

/// Stable identifier for every primitive type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicTypeId {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

/// Metadata for a primitive type.
#[derive(Debug, Clone, Copy)]
pub struct BasicTypeInfo {
    pub id: BasicTypeId,
    pub canonical: &'static str,
    /// Storage width in bits (`boolean` is reported as 1).
    pub bits: u8,
    pub is_integral: bool,
    pub is_floating: bool,
    pub defined_in: JlsSection,
}

/// Registry of all primitive types.
pub const BASIC_TYPES: &[BasicTypeInfo] = &[
    info(BasicTypeId::Boolean, "boolean", 1, false, false),
    info(BasicTypeId::Byte, "byte", 8, true, false),
    info(BasicTypeId::Char, "char", 16, true, false),
    info(BasicTypeId::Short, "short", 16, true, false),
    info(BasicTypeId::Int, "int", 32, true, false),
    info(BasicTypeId::Long, "long", 64, true, false),
    info(BasicTypeId::Float, "float", 32, false, true),
    info(BasicTypeId::Double, "double", 64, false, true),
];

/// Canonical spelling.
pub fn as_str(id: BasicTypeId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (programming error).
pub fn info_for(id: BasicTypeId) -> &'static BasicTypeInfo {
    BASIC_TYPES.iter().find(|t| t.id == id).expect("basic type info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<BasicTypeId> {
    BASIC_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

const fn info(id: BasicTypeId, canonical: &'static str, bits: u8, is_integral: bool, is_floating: bool) -> BasicTypeInfo {
    BasicTypeInfo {
        id,
        canonical,
        bits,
        is_integral,
        is_floating,
        defined_in: JLS_PRIMITIVES,
    }
}
