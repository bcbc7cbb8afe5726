use std::collections::HashMap;

use jparse_core::lang::basic_types;
use jparse_core::lang::keywords;
use jparse_core::lang::modifiers;
use jparse_core::lang::operators::{self, Associativity, OperatorCategory, Precedence};

#[test]
fn word_spellings_unique_across_registries() {
    let mut seen: HashMap<&'static str, &'static str> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(keywords::from_str(info.canonical), Some(info.id));
        assert_eq!(keywords::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, "keyword") {
            panic!("duplicate spelling {:?} (already a {prev})", info.canonical);
        }
    }
    for info in modifiers::MODIFIERS {
        assert_eq!(modifiers::from_str(info.canonical), Some(info.id));
        assert_eq!(modifiers::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, "modifier") {
            panic!("duplicate spelling {:?} (already a {prev})", info.canonical);
        }
    }
    for info in basic_types::BASIC_TYPES {
        assert_eq!(basic_types::from_str(info.canonical), Some(info.id));
        assert_eq!(basic_types::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, "basic type") {
            panic!("duplicate spelling {:?} (already a {prev})", info.canonical);
        }
    }

    // Literals are not reserved words in any registry.
    for literal in ["true", "false", "null"] {
        assert!(!seen.contains_key(literal), "{literal} must lex as a literal");
    }
}

#[test]
fn operator_spellings_unique_and_bounded() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();
    for info in operators::OPERATORS {
        assert_eq!(operators::from_str(info.spelling), Some(info.id));
        assert!(info.spelling.len() <= operators::MAX_SPELLING_LEN);
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.spelling, prev, info.id);
        }
    }
}

#[test]
fn precedence_table_is_strictly_increasing_and_complete() {
    let table = operators::PRECEDENCE_TABLE;
    assert_eq!(table.len(), 12);
    for pair in table.windows(2) {
        assert!(pair[0].rank < pair[1].rank, "{:?} must bind looser than {:?}", pair[0].level, pair[1].level);
        assert!(pair[0].level < pair[1].level);
    }
    assert_eq!(table[0].level, Precedence::Assignment);
    assert_eq!(table[table.len() - 1].level, Precedence::Multiplicative);
}

#[test]
fn only_assignment_and_ternary_associate_right() {
    for row in operators::PRECEDENCE_TABLE {
        let expected = match row.level {
            Precedence::Assignment | Precedence::Ternary => Associativity::Right,
            _ => Associativity::Left,
        };
        assert_eq!(row.associativity, expected, "{:?}", row.level);
    }
}

#[test]
fn every_infix_operator_has_a_table_row() {
    for info in operators::OPERATORS {
        if let Some(level) = info.precedence {
            assert!(operators::binding(level).is_some(), "{:?} has no table row", info.id);
        }
        if info.category == OperatorCategory::Assignment {
            assert_eq!(info.precedence, Some(Precedence::Assignment));
            assert!(operators::is_assignment(info.id));
        }
    }
    assert!(operators::binding(operators::INSTANCEOF_PRECEDENCE).is_some());
}
