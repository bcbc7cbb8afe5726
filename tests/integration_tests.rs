//! Integration tests running whole Java files through the lexer, parser and tree queries.

use std::fs;
use std::path::Path;

use jparse::ast::*;
use jparse::lexer::Position;
use jparse::visit::NodeKind;
use jparse::{Error, ParseOptions, SearchFilter, SyntaxTree, TracePhase};

fn load(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

fn fixture(name: &str) -> SyntaxTree {
    let source = load(&Path::new("tests/fixtures/valid").join(name));
    SyntaxTree::parse(&source).unwrap_or_else(|e| panic!("{name}: {e}"))
}

/// Every valid fixture parses, and the recorded trace stays balanced.
#[test]
fn test_valid_fixtures() {
    insta::glob!("fixtures/valid/*.java", |path| {
        let source = load(path);
        let (unit, trace) = jparse::parse_source_with_options(&source, ParseOptions::default().with_trace(true))
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));

        let mut depth = 0usize;
        let mut last_cursor = 0;
        for event in &trace {
            match event.phase {
                TracePhase::Enter => depth += 1,
                TracePhase::Exit => depth -= 1,
            }
            assert!(event.cursor >= last_cursor, "cursor moved backwards in {}", path.display());
            last_cursor = event.cursor;
        }
        assert_eq!(depth, 0, "unbalanced trace in {}", path.display());

        let tree = SyntaxTree::new(unit);
        assert!(!tree.unit().types.is_empty());
        let lines = source.lines().count();
        for node in tree.nodes() {
            assert!(node.position().line >= 1 && node.position().line <= lines);
        }
    });
}

/// Invalid fixtures fail with the first syntax error at a known place.
#[test]
fn test_invalid_fixtures() {
    let expected = [
        ("missing_class_name", Position::new(1, 7), "expected identifier"),
        ("modifier_before_package", Position::new(1, 8), "expected type declaration"),
        ("primitive_without_dims", Position::new(2, 23), "expected '['"),
        ("switch_without_label", Position::new(4, 13), "expected 'case' or 'default'"),
        ("try_without_handlers", Position::new(5, 5), "expected 'catch' or 'finally'"),
        ("unbalanced_parens", Position::new(3, 23), "expected ')'"),
    ];
    let dir = Path::new("tests/fixtures/invalid");
    let mut seen = 0;
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_none_or(|e| e != "java") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap().to_string();
        let (_, position, description) = expected
            .iter()
            .find(|(name, ..)| *name == stem)
            .unwrap_or_else(|| panic!("no expectation for {stem}"));

        let error = jparse::parse_source(&load(&path)).expect_err(&stem);
        assert!(matches!(error, Error::Parse(ref e) if e.is_syntax()), "{stem}: {error:?}");
        assert_eq!(error.position(), Some(*position), "{stem}");
        assert_eq!(error.description(), *description, "{stem}");
        seen += 1;
    }
    assert_eq!(seen, expected.len());
}

#[test]
fn test_declarations_fixture_shape() {
    let tree = fixture("Declarations.java");
    let unit = tree.unit();
    let package = unit.package.as_ref().unwrap();
    assert_eq!(package.node.name.to_string(), "org.example.decl");
    assert_eq!(package.node.annotations.len(), 1);
    assert!(unit.imports[0].node.is_wildcard);

    let kinds: Vec<NodeKind> = tree
        .find_nodes(&[], SearchFilter::All)
        .iter()
        .map(|n| n.kind())
        .filter(|k| k.is_declaration())
        .collect();
    assert!(kinds.contains(&NodeKind::AnnotationTypeDeclaration));
    assert!(kinds.contains(&NodeKind::AnnotationElement));
    assert!(kinds.contains(&NodeKind::EnumConstant));

    let top: Vec<&str> = unit.types.iter().map(|t| t.node.name()).collect();
    assert_eq!(top, ["Marker", "Shape", "Planet", "Node"]);

    let planets = tree.find_nodes(&[NodeKind::EnumConstant], SearchFilter::All);
    let names: Vec<_> = planets.iter().filter_map(|n| n.name()).collect();
    assert_eq!(names, ["MERCURY", "EARTH"]);
}

#[test]
fn test_statements_fixture_queries() {
    let tree = fixture("Statements.java");
    let methods = tree.find_nodes(&[NodeKind::MethodDeclaration], SearchFilter::All);
    let names: Vec<_> = methods.iter().filter_map(|n| n.name()).collect();
    assert_eq!(names, ["control", "read", "locals", "run"]);

    // `locals` declares a local class, so only its `run` is innermost.
    let bottom = tree.find_nodes(
        &[NodeKind::ClassDeclaration, NodeKind::MethodDeclaration],
        SearchFilter::BottomLevel,
    );
    let names: Vec<_> = bottom.iter().filter_map(|n| n.name()).collect();
    assert_eq!(names, ["control", "read", "run"]);

    let top = tree.find_nodes(&[NodeKind::MethodDeclaration], SearchFilter::TopLevel);
    assert_eq!(top.len(), 3);

    let catches = tree.find_nodes(&[NodeKind::CatchClause], SearchFilter::All);
    assert_eq!(catches.len(), 2);
    assert_eq!(tree.find_nodes(&[NodeKind::TryResource], SearchFilter::All).len(), 2);
    assert_eq!(tree.find_nodes(&[NodeKind::Initializer], SearchFilter::All).len(), 2);
}

#[test]
fn test_lambdas_fixture_queries() {
    let tree = fixture("Lambdas.java");
    let lambdas = tree.find_nodes(&[NodeKind::Lambda], SearchFilter::All);
    let outermost = tree.find_nodes(&[NodeKind::Lambda], SearchFilter::TopLevel);
    assert!(outermost.len() < lambdas.len(), "nested lambdas are not top level");
    let references = tree.find_nodes(&[NodeKind::MethodReference], SearchFilter::All);
    assert_eq!(references.len(), 7);
}

#[test]
fn test_generic_shifts_are_not_confused() {
    let tree = fixture("Collections.java");
    let class = match &tree.unit().types[0].node {
        TypeDecl::Class(class) => class,
        other => panic!("expected class, got {other:?}"),
    };
    assert_eq!(class.type_parameters.len(), 2);
    let implements: Vec<String> = class.implements.iter().map(|t| t.node.to_string()).collect();
    assert_eq!(implements, ["Iterable<Map.Entry<K, V>>"]);

    let shifts = tree.find_nodes(&[NodeKind::BinaryOperation], SearchFilter::All);
    assert!(shifts.len() >= 5);
}

#[test]
fn test_type_annotations_fixture() {
    let tree = fixture("TypeAnnotations.java");
    let unit = tree.unit();
    let top: Vec<&str> = unit.types.iter().map(|t| t.node.name()).collect();
    assert_eq!(top, ["NonNull", "Size", "Annotated"]);
    let annotated = &unit.types[2].node;

    let grid = annotated.field("grid").expect("grid field");
    assert_eq!(grid.ty.node.dimensions(), 2);
    assert_eq!(grid.ty.node.annotations().len(), 2);
    let entry = annotated.field("entry").expect("entry field");
    assert_eq!(entry.ty.node.to_string(), "Map.Entry<String, T>");
    assert_eq!(entry.ty.node.annotations().len(), 1);

    let first = annotated.methods_named("first").next().expect("first");
    let names: Vec<String> = first.modifiers.annotations().map(|a| a.name.to_string()).collect();
    assert_eq!(names, ["Deprecated"]);

    let describe = annotated.methods_named("describe").next().expect("describe");
    let receiver = &describe.receiver.as_ref().expect("receiver").node;
    assert_eq!(receiver.ty.node.to_string(), "Annotated<T>");
    assert!(describe.parameters[0].node.varargs);

    let inner = annotated
        .members()
        .iter()
        .find_map(|m| match &m.node {
            Member::Type(decl) => Some(decl),
            _ => None,
        })
        .expect("inner class");
    let ctor = inner.constructors().next().expect("constructor");
    assert_eq!(ctor.receiver.as_ref().and_then(|r| r.node.qualifier.as_deref()), Some("Annotated"));

    assert_eq!(tree.find_nodes(&[NodeKind::ReceiverParameter], SearchFilter::All).len(), 2);
    assert_eq!(tree.find_nodes(&[NodeKind::Annotation], SearchFilter::All).len(), 17);
}

#[test]
fn test_lex_errors_surface_through_facade() {
    let error = jparse::parse_source("class A { String s = \"unterminated; }").unwrap_err();
    assert!(matches!(error, Error::Lex(_)));
    assert_eq!(error.position().map(|p| p.line), Some(1));
}
