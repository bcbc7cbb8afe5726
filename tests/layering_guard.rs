//! Layering guardrails.
//!
//! - The syntax crate must not depend on the facade or on driver-only crates (`clap`,
//!   `tracing-subscriber`) in its `[dependencies]`.
//! - The grammar engine consumes tokens; it must never call the reference tokenizer outside tests.

fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn syntax_crate_does_not_depend_on_driver_crates() {
    let manifest = include_str!("../crates/jparse_syntax/Cargo.toml");
    let names = dependency_names(manifest);
    assert!(names.iter().any(|n| n == "jparse_core"), "{names:?}");
    for forbidden in ["jparse", "clap", "tracing-subscriber", "insta", "proptest"] {
        assert!(
            !names.iter().any(|n| n == forbidden),
            "`{forbidden}` must not appear in jparse_syntax [dependencies]"
        );
    }
}

#[test]
fn vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/jparse_core/Cargo.toml");
    assert!(dependency_names(manifest).is_empty());
}

#[test]
fn grammar_engine_does_not_call_the_tokenizer() {
    let chunks = [
        ("core.rs", include_str!("../crates/jparse_syntax/src/parser/core.rs")),
        ("helpers.rs", include_str!("../crates/jparse_syntax/src/parser/helpers.rs")),
        ("lookahead.rs", include_str!("../crates/jparse_syntax/src/parser/lookahead.rs")),
        ("decl.rs", include_str!("../crates/jparse_syntax/src/parser/decl.rs")),
        ("types.rs", include_str!("../crates/jparse_syntax/src/parser/types.rs")),
        ("stmts.rs", include_str!("../crates/jparse_syntax/src/parser/stmts.rs")),
        ("expr.rs", include_str!("../crates/jparse_syntax/src/parser/expr.rs")),
        ("api.rs", include_str!("../crates/jparse_syntax/src/parser/api.rs")),
        ("cursor.rs", include_str!("../crates/jparse_syntax/src/cursor.rs")),
        ("precedence.rs", include_str!("../crates/jparse_syntax/src/precedence.rs")),
    ];
    for (name, source) in chunks {
        // Unit tests at the bottom of a file may lex their inputs.
        let production = source.split("#[cfg(test)]").next().unwrap_or(source);
        assert!(!production.contains("lex("), "{name} calls the tokenizer");
    }
}
