//! Inline snapshots of parsed expressions, rendered as S-expressions.
//!
//! Each operator node prints as `(op left right)`; parentheses written in the source print as
//! `[...]` so they stay distinguishable from tree structure.
//!
//! Review changes: `cargo insta review`

use jparse::ast::*;
use jparse::{lexer, parser};
use jparse_core::lang::operators;

fn parse(source: &str) -> String {
    let tokens = lexer::lex(source).expect("lexer failed");
    let expr = parser::parse_expression(&tokens).expect("parser failed");
    render(&expr.node)
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Binary { operator, left, right }
        | Expr::Assignment {
            operator,
            target: left,
            value: right,
        } => format!("({} {} {})", operators::as_str(*operator), render(&left.node), render(&right.node)),
        Expr::Ternary {
            condition,
            then_expr,
            else_expr,
        } => format!(
            "(? {} {} {})",
            render(&condition.node),
            render(&then_expr.node),
            render(&else_expr.node)
        ),
        Expr::InstanceOf { expr, ty } => format!("(instanceof {} {})", render(&expr.node), ty.node),
        Expr::Unary {
            operator,
            fixity: Fixity::Prefix,
            operand,
        } => format!("({} {})", operators::as_str(*operator), render(&operand.node)),
        Expr::Unary {
            operator,
            fixity: Fixity::Postfix,
            operand,
        } => format!("(post {} {})", operators::as_str(*operator), render(&operand.node)),
        Expr::Cast {
            ty,
            additional_bounds,
            expr,
        } => {
            let mut bounds = ty.node.to_string();
            for bound in additional_bounds {
                bounds.push_str(&format!(" & {}", bound.node));
            }
            format!("(cast {bounds} {})", render(&expr.node))
        }
        Expr::MethodInvocation {
            target,
            type_arguments,
            name,
            arguments,
        } => {
            let target = target.as_ref().map(|t| format!("{}.", render(&t.node))).unwrap_or_default();
            format!(
                "(call {target}{}{name}{})",
                type_args(type_arguments.as_ref()),
                args(arguments)
            )
        }
        Expr::FieldAccess { target, name } => format!("(. {} {name})", render(&target.node)),
        Expr::ArrayAccess { array, index } => format!("(index {} {})", render(&array.node), render(&index.node)),
        Expr::SuperFieldAccess { qualifier, name } => format!("{}.{name}", super_of(qualifier.as_ref())),
        Expr::SuperMethodInvocation {
            qualifier,
            type_arguments,
            name,
            arguments,
        } => format!(
            "(call {}.{}{name}{})",
            super_of(qualifier.as_ref()),
            type_args(type_arguments.as_ref()),
            args(arguments)
        ),
        Expr::ConstructorCall {
            kind,
            qualifier,
            arguments,
        } => {
            let keyword = match kind {
                ConstructorCallKind::This => "this",
                ConstructorCallKind::Super => "super",
            };
            let qualifier = qualifier.as_ref().map(|q| format!("{}.", render(&q.node))).unwrap_or_default();
            format!("({qualifier}{keyword}{})", args(arguments))
        }
        Expr::New(creator) => render_creator(creator),
        Expr::Literal { text, .. } => text.clone(),
        Expr::Name(name) => name.to_string(),
        Expr::This { qualifier: None } => "this".to_string(),
        Expr::This { qualifier: Some(q) } => format!("{q}.this"),
        Expr::ClassLiteral(ty) => format!("{}.class", ty.node),
        Expr::ArrayInitializer(elements) => initializer(elements),
        Expr::Parenthesized(inner) => format!("[{}]", render(&inner.node)),
        Expr::Lambda { parameters, body } => {
            let parameters = match parameters {
                LambdaParameters::Single(name) => name.clone(),
                LambdaParameters::Inferred(names) => names.join(" "),
                LambdaParameters::Formal(params) => params
                    .iter()
                    .map(|p| format!("{} {}", p.node.ty.node, p.node.name))
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            let body = match body {
                LambdaBody::Expression(expr) => render(&expr.node),
                LambdaBody::Block(block) => format!("{{{}}}", block.statements.len()),
            };
            format!("(lambda ({parameters}) {body})")
        }
        Expr::MethodReference {
            target,
            type_arguments,
            name,
        } => {
            let target = match target {
                MethodReferenceTarget::Expr(expr) => render(&expr.node),
                MethodReferenceTarget::Type(ty) => ty.node.to_string(),
                MethodReferenceTarget::Super { qualifier } => super_of(qualifier.as_ref()),
            };
            let name = match name {
                MethodReferenceName::Method(name) => name.as_str(),
                MethodReferenceName::New => "new",
            };
            format!("(:: {target} {}{name})", type_args(type_arguments.as_ref()))
        }
    }
}

fn render_creator(creator: &Creator) -> String {
    match creator {
        Creator::Class { ty, arguments, body } => format!("(new {}{}{})", ty.node, args(arguments), body_of(body)),
        Creator::Array {
            element,
            dimension_exprs,
            dimensions,
            initializer: init,
            ..
        } => {
            let sized: String = dimension_exprs.iter().map(|e| format!(" [{}]", render(&e.node))).collect();
            let init = init.as_ref().map(|e| format!(" {}", initializer(e))).unwrap_or_default();
            format!("(new-array {}{sized} {dimensions}{init})", element.node)
        }
        Creator::Inner {
            outer,
            name,
            type_arguments,
            arguments,
            body,
        } => format!(
            "(new {}.{name}{}{}{})",
            render(&outer.node),
            type_args(type_arguments.as_ref()),
            args(arguments),
            body_of(body)
        ),
    }
}

fn args(arguments: &[Located<Expr>]) -> String {
    arguments.iter().map(|a| format!(" {}", render(&a.node))).collect()
}

fn initializer(elements: &[Located<Expr>]) -> String {
    let inner: Vec<String> = elements.iter().map(|e| render(&e.node)).collect();
    format!("{{{}}}", inner.join(" "))
}

fn body_of(body: &Option<Vec<Located<Member>>>) -> String {
    body.as_ref().map(|members| format!(" {{{}}}", members.len())).unwrap_or_default()
}

fn super_of(qualifier: Option<&QualifiedName>) -> String {
    match qualifier {
        Some(q) => format!("{q}.super"),
        None => "super".to_string(),
    }
}

fn type_args(arguments: Option<&TypeArguments>) -> String {
    match arguments {
        None => String::new(),
        Some(TypeArguments::Diamond) => "<>".to_string(),
        Some(TypeArguments::List(list)) => {
            let inner: Vec<String> = list.iter().map(|a| a.node.to_string()).collect();
            format!("<{}>", inner.join(", "))
        }
    }
}

#[test]
fn test_full_precedence_ladder() {
    insta::assert_snapshot!(
        parse("a = b += c ? d : e || f && g | h ^ i & j == k < l << m + n * -o++"),
        @"(= a (+= b (? c d (|| e (&& f (| g (^ h (& i (== j (< k (<< l (+ m (* n (- (post ++ o)))))))))))))))"
    );
}

#[test]
fn test_left_and_right_associativity() {
    insta::assert_snapshot!(parse("a - b - c"), @"(- (- a b) c)");
    insta::assert_snapshot!(parse("a = b = c"), @"(= a (= b c))");
    insta::assert_snapshot!(parse("x >>= 2 >> y >>> 1"), @"(>>= x (>>> (>> 2 y) 1))");
    insta::assert_snapshot!(parse("a ? b : c ? d : e"), @"(? a b (? c d e))");
}

#[test]
fn test_casts_versus_parentheses() {
    insta::assert_snapshot!(parse("(int) -x"), @"(cast int (- x))");
    insta::assert_snapshot!(parse("(a) - b"), @"(- [a] b)");
    insta::assert_snapshot!(parse("(String) s.trim()"), @"(cast String (call s.trim))");
    insta::assert_snapshot!(
        parse("(Runnable & Serializable) () -> run()"),
        @"(cast Runnable & Serializable (lambda () (call run)))"
    );
}

#[test]
fn test_lambda_forms() {
    insta::assert_snapshot!(parse("x -> x + 1"), @"(lambda (x) (+ x 1))");
    insta::assert_snapshot!(parse("(a, b) -> a * b"), @"(lambda (a b) (* a b))");
    insta::assert_snapshot!(parse("(int a, String... rest) -> { return; }"), @"(lambda (int a, String[] rest) {1})");
}

#[test]
fn test_type_arguments_in_expressions() {
    insta::assert_snapshot!(parse("Collections.<String>emptyList()"), @"(call Collections.<String>emptyList)");
    insta::assert_snapshot!(parse("new HashMap<>()"), @"(new HashMap<>)");
    insta::assert_snapshot!(parse("new ArrayList<String>(n) {}"), @"(new ArrayList<String> n {0})");
    insta::assert_snapshot!(parse("x instanceof List<?> && y"), @"(&& (instanceof x List<?>) y)");
}

#[test]
fn test_method_references() {
    insta::assert_snapshot!(parse("String::valueOf"), @"(:: String valueOf)");
    insta::assert_snapshot!(parse("List<String>::size"), @"(:: List<String> size)");
    insta::assert_snapshot!(parse("int[]::new"), @"(:: int[] new)");
    insta::assert_snapshot!(parse("super::toString"), @"(:: super toString)");
    insta::assert_snapshot!(parse("foo()::<T>bar"), @"(:: (call foo) <T>bar)");
}

#[test]
fn test_arrays() {
    insta::assert_snapshot!(parse("new int[3][]"), @"(new-array int [3] 2)");
    insta::assert_snapshot!(parse(r#"new String[] {"a", "b"}"#), @r#"(new-array String 1 {"a" "b"})"#);
    insta::assert_snapshot!(parse("a[i][j]"), @"(index (index a i) j)");
}

#[test]
fn test_primaries_and_selectors() {
    insta::assert_snapshot!(parse("a.b.c"), @"a.b.c");
    insta::assert_snapshot!(parse("foo().bar"), @"(. (call foo) bar)");
    insta::assert_snapshot!(parse("a.b.f(x, 1)"), @"(call a.b.f x 1)");
    insta::assert_snapshot!(parse("obj.new Inner<>(1)"), @"(new obj.Inner<> 1)");
    insta::assert_snapshot!(parse("Outer.super.m(1)"), @"(call Outer.super.m 1)");
    insta::assert_snapshot!(parse("c.super(1)"), @"(c.super 1)");
    insta::assert_snapshot!(parse("outer().super()"), @"((call outer).super)");
    insta::assert_snapshot!(parse("Outer.this"), @"Outer.this");
    insta::assert_snapshot!(parse("int[].class"), @"int[].class");
    insta::assert_snapshot!(parse("Map.Entry.class"), @"Map.Entry.class");
}
