//! Property-based tests for the parser
//!
//! These tests use proptest to check invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use jparse::ast::{Expr, Fixity};
use jparse::{lexer, parser, Error, ParseOptions};
use jparse_core::lang::operators;
use proptest::prelude::*;

/// Fully parenthesized rendering that ignores source parentheses.
fn shape(expr: &Expr) -> String {
    match expr {
        Expr::Binary { operator, left, right } => format!(
            "({} {} {})",
            shape(&left.node),
            operators::as_str(*operator),
            shape(&right.node)
        ),
        Expr::Ternary {
            condition,
            then_expr,
            else_expr,
        } => format!(
            "({} ? {} : {})",
            shape(&condition.node),
            shape(&then_expr.node),
            shape(&else_expr.node)
        ),
        Expr::Unary {
            operator,
            fixity: Fixity::Prefix,
            operand,
        } => format!("({}{})", operators::as_str(*operator), shape(&operand.node)),
        Expr::Parenthesized(inner) => shape(&inner.node),
        Expr::Name(name) => name.to_string(),
        Expr::Literal { text, .. } => text.clone(),
        other => panic!("unexpected node in generated expression: {other:?}"),
    }
}

fn parse_expr(source: &str) -> Expr {
    let tokens = lexer::lex(source).expect("generated source must lex");
    parser::parse_expression(&tokens)
        .unwrap_or_else(|e| panic!("{source}: {e}"))
        .node
}

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "*", "/", "%", "+", "-", "<<", ">>", ">>>", "<", ">", "<=", ">=", "==", "!=", "&", "^", "|", "&&", "||",
    ])
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-e]".prop_map(String::from),
        (0u32..1000).prop_map(|n| n.to_string()),
        "[a-e]".prop_map(|name| format!("-{name}")),
    ]
}

/// `x0 op1 x1 op2 x2 ...` with no parentheses.
fn flat_expression() -> impl Strategy<Value = String> {
    (operand(), prop::collection::vec((binary_operator(), operand()), 0..12)).prop_map(|(first, rest)| {
        let mut source = first;
        for (op, rhs) in rest {
            source.push_str(&format!(" {op} {rhs}"));
        }
        source
    })
}

/// Nested conditionals and binary operators.
fn expression_tree() -> impl Strategy<Value = String> {
    let leaf = operand();
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator(), inner.clone()).prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            (inner.clone(), inner.clone(), inner.clone()).prop_map(|(c, t, e)| format!("{c} ? {t} : {e}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

proptest! {
    /// Arbitrary text is rejected or accepted, never a panic.
    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,200}") {
        let _ = jparse::parse_source(&source);
    }

    /// Streams of real Java tokens in random order are rejected or accepted, never a panic.
    #[test]
    fn token_soup_never_panics(words in prop::collection::vec(
        prop::sample::select(vec![
            "class", "interface", "enum", "@", "(", ")", "{", "}", "[", "]", "<", ">", ">>", ";", ",", ".",
            "::", "->", "?", ":", "=", "+", "new", "int", "x", "List", "this", "super", "void", "1", "\"s\"",
            "static", "public", "default", "case", "switch", "try", "catch", "...", "&", "extends",
        ]),
        0..60,
    )) {
        let source = words.join(" ");
        match jparse::parse_source(&source) {
            Ok(_) | Err(Error::Parse(_)) => {}
            Err(Error::Lex(e)) => prop_assert!(false, "vocabulary token failed to lex: {e}"),
        }
    }

    /// Adding the parentheses the parser inferred does not change the tree.
    #[test]
    fn inferred_grouping_is_stable(source in flat_expression()) {
        let first = shape(&parse_expr(&source));
        let second = shape(&parse_expr(&first));
        prop_assert_eq!(first, second);
    }

    /// Same as above for nested conditionals and explicit parentheses.
    #[test]
    fn nested_grouping_is_stable(source in expression_tree()) {
        let first = shape(&parse_expr(&source));
        let second = shape(&parse_expr(&first));
        prop_assert_eq!(first, second);
    }

    /// Multiplicative operators always bind tighter than additive ones.
    #[test]
    fn multiplication_binds_tighter(a in "[a-e]", b in "[a-e]", c in "[a-e]") {
        let rendered = shape(&parse_expr(&format!("{a} + {b} * {c}")));
        prop_assert_eq!(rendered, format!("({a} + ({b} * {c}))"));
        let rendered = shape(&parse_expr(&format!("{a} * {b} - {c}")));
        prop_assert_eq!(rendered, format!("(({a} * {b}) - {c})"));
    }

    /// Deep nesting is either parsed or reported, never a stack overflow.
    #[test]
    fn deep_nesting_is_bounded(depth in 0usize..300) {
        let source = format!("class A {{ int x = {}1{}; }}", "(".repeat(depth), ")".repeat(depth));
        match jparse::parse_source_with_options(&source, ParseOptions::default().with_max_depth(64)) {
            Ok(_) => {}
            Err(error) => prop_assert_eq!(error.description(), "nesting too deep"),
        }
    }

    /// Literal source text is kept verbatim.
    #[test]
    fn literal_text_is_preserved(literal in prop_oneof![
        (0u64..u64::from(u32::MAX)).prop_map(|n| n.to_string()),
        (0u32..0xFFFF).prop_map(|n| format!("0x{n:X}")),
        (0u32..1000, 0u32..1000).prop_map(|(a, b)| format!("{a}.{b}")),
        "[a-z]{0,10}".prop_map(|s| format!("\"{s}\"")),
    ]) {
        match parse_expr(&literal) {
            Expr::Literal { text, .. } => prop_assert_eq!(text, literal),
            other => prop_assert!(false, "expected literal, got {other:?}"),
        }
    }
}
