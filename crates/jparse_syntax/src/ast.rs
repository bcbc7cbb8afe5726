//! Abstract Syntax Tree definitions for Java source.
//!
//! The tree is a closed set of sum types, one per grammar category (declarations, members, types,
//! statements, expressions, annotations). Consumers match exhaustively.
//!
//! ## Notes
//! - Every node is wrapped in [`Located`], which records the position of the node's first token.
//! - Operators are carried as registry IDs ([`OperatorId`]) rather than a parallel enum.
//! - Nodes own their data; the tree never borrows the token stream.

use std::fmt;

use jparse_core::lang::basic_types::{self, BasicTypeId};
use jparse_core::lang::modifiers::{self, ModifierId};
use jparse_core::lang::operators::OperatorId;

use crate::lexer::{LiteralKind, Position};

/// A node with the source position of its first token.
#[derive(Debug, Clone, PartialEq)]
pub struct Located<T> {
    pub node: T,
    pub position: Position,
}

impl<T> Located<T> {
    pub fn new(node: T, position: Position) -> Self {
        Self { node, position }
    }

    /// Transform the node, keeping its position.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located::new(f(self.node), self.position)
    }
}

pub type Ident = String;

/// Dotted name such as `java.util.List` or `Outer.this`'s qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName(pub Vec<Ident>);

impl QualifiedName {
    pub fn simple(name: impl Into<Ident>) -> Self {
        Self(vec![name.into()])
    }

    pub fn segments(&self) -> &[Ident] {
        &self.0
    }

    /// Last segment, e.g. `List` for `java.util.List`.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

// ============================================================================
// Compilation unit
// ============================================================================

/// Root of the tree: at most one package declaration, then imports, then type declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub position: Position,
    pub package: Option<Located<PackageDecl>>,
    pub imports: Vec<Located<ImportDecl>>,
    pub types: Vec<Located<TypeDecl>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageDecl {
    pub annotations: Vec<Located<Annotation>>,
    pub name: QualifiedName,
}

/// `import [static] a.b.C;` or `import [static] a.b.*;`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    /// Path without the trailing `.*`.
    pub path: QualifiedName,
    pub is_static: bool,
    pub is_wildcard: bool,
}

// ============================================================================
// Modifiers
// ============================================================================

/// One entry of a modifier list: a modifier keyword or an annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
    Keyword(ModifierId),
    Annotation(Annotation),
}

/// Modifiers and annotations in the order they were written.
///
/// No deduplication or validation is performed: `public public` is kept as two entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Modifiers {
    pub items: Vec<Located<Modifier>>,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Modifier keywords, in source order.
    pub fn keywords(&self) -> impl Iterator<Item = ModifierId> + '_ {
        self.items.iter().filter_map(|m| match m.node {
            Modifier::Keyword(id) => Some(id),
            Modifier::Annotation(_) => None,
        })
    }

    /// Annotations, in source order.
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> + '_ {
        self.items.iter().filter_map(|m| match &m.node {
            Modifier::Annotation(a) => Some(a),
            Modifier::Keyword(_) => None,
        })
    }

    pub fn contains(&self, id: ModifierId) -> bool {
        self.keywords().any(|k| k == id)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self.keywords().map(modifiers::as_str).collect();
        write!(f, "{}", words.join(" "))
    }
}

// ============================================================================
// Type declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Enum(EnumDecl),
    AnnotationType(AnnotationTypeDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Class(d) => &d.name,
            TypeDecl::Interface(d) => &d.name,
            TypeDecl::Enum(d) => &d.name,
            TypeDecl::AnnotationType(d) => &d.name,
        }
    }

    pub fn modifiers(&self) -> &Modifiers {
        match self {
            TypeDecl::Class(d) => &d.modifiers,
            TypeDecl::Interface(d) => &d.modifiers,
            TypeDecl::Enum(d) => &d.modifiers,
            TypeDecl::AnnotationType(d) => &d.modifiers,
        }
    }

    /// Member declarations of the body (enum constants excluded).
    pub fn members(&self) -> &[Located<Member>] {
        match self {
            TypeDecl::Class(d) => &d.body,
            TypeDecl::Interface(d) => &d.body,
            TypeDecl::Enum(d) => &d.body,
            TypeDecl::AnnotationType(d) => &d.body,
        }
    }

    /// Method declarations of the body, in source order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> + '_ {
        self.members().iter().filter_map(|m| match &m.node {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Field declarations of the body, in source order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> + '_ {
        self.members().iter().filter_map(|m| match &m.node {
            Member::Field(field) => Some(field),
            _ => None,
        })
    }

    /// Constructor declarations of the body, in source order.
    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> + '_ {
        self.members().iter().filter_map(|m| match &m.node {
            Member::Constructor(ctor) => Some(ctor),
            _ => None,
        })
    }

    /// Methods called `name` (overloads in source order).
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDecl> + 'a {
        self.methods().filter(move |m| m.name == name)
    }

    /// The field declaration that declares `name`.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields().find(|f| f.names().any(|n| n == name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub modifiers: Modifiers,
    pub name: Ident,
    pub type_parameters: Vec<Located<TypeParameter>>,
    pub extends: Option<Located<Type>>,
    pub implements: Vec<Located<Type>>,
    pub body: Vec<Located<Member>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub modifiers: Modifiers,
    pub name: Ident,
    pub type_parameters: Vec<Located<TypeParameter>>,
    pub extends: Vec<Located<Type>>,
    pub body: Vec<Located<Member>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub modifiers: Modifiers,
    pub name: Ident,
    pub implements: Vec<Located<Type>>,
    pub constants: Vec<Located<EnumConstant>>,
    /// Declarations after the `;` that ends the constant list.
    pub body: Vec<Located<Member>>,
}

/// `@A NAME(args) { body }`; both the argument list and the body are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstant {
    pub annotations: Vec<Located<Annotation>>,
    pub name: Ident,
    pub arguments: Option<Vec<Located<Expr>>>,
    pub body: Option<Vec<Located<Member>>>,
}

/// `@interface Name { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationTypeDecl {
    pub modifiers: Modifiers,
    pub name: Ident,
    pub body: Vec<Located<Member>>,
}

// ============================================================================
// Members
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    /// `{ ... }` or `static { ... }`
    Initializer(InitializerDecl),
    /// Nested class, interface, enum or annotation type.
    Type(TypeDecl),
    /// `Type name() [default value];` inside an annotation type.
    AnnotationElement(AnnotationElementDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    /// Type as written before the first declarator.
    pub ty: Located<Type>,
    pub declarators: Vec<Located<VariableDeclarator>>,
}

impl FieldDecl {
    /// Declared variable names, in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.declarators.iter().map(|d| d.node.name.as_str())
    }
}

/// `name[] = initializer` inside a field or local variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub name: Ident,
    /// Total array dimensions of this variable: brackets after the element type plus brackets after
    /// the name.
    pub dimensions: usize,
    /// Annotations on the brackets after the name, e.g. `x @A []`.
    pub dimension_annotations: Vec<Located<Annotation>>,
    pub initializer: Option<Located<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub type_parameters: Vec<Located<TypeParameter>>,
    /// Includes any `[]` written after the parameter list. [`Type::Void`] for `void`.
    pub return_type: Located<Type>,
    pub name: Ident,
    pub receiver: Option<Located<ReceiverParameter>>,
    pub parameters: Vec<Located<FormalParameter>>,
    pub throws: Vec<Located<Type>>,
    /// `None` for abstract, interface and native methods.
    pub body: Option<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Modifiers,
    pub type_parameters: Vec<Located<TypeParameter>>,
    pub name: Ident,
    pub receiver: Option<Located<ReceiverParameter>>,
    pub parameters: Vec<Located<FormalParameter>>,
    pub throws: Vec<Located<Type>>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationElementDecl {
    pub modifiers: Modifiers,
    pub ty: Located<Type>,
    pub name: Ident,
    pub default: Option<Located<ElementValue>>,
}

/// Method, constructor, lambda or catch parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    pub modifiers: Modifiers,
    /// Includes brackets written after the parameter name.
    pub ty: Located<Type>,
    pub name: Ident,
    /// `Type... name`
    pub varargs: bool,
}

/// `Type this` or `Type Outer.this`, written first in a method or inner-class constructor parameter
/// list to annotate the receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverParameter {
    pub annotations: Vec<Located<Annotation>>,
    pub ty: Located<Type>,
    /// `Outer` in `Outer.this`.
    pub qualifier: Option<Ident>,
}

// ============================================================================
// Types
// ============================================================================

/// A type as written. Type annotations (`@A int`, `Outer.@A Inner`, `String @A []`) are kept on the
/// type; [`fmt::Display`] leaves them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Primitive type with array dimensions, e.g. `int[][]`.
    Basic {
        annotations: Vec<Located<Annotation>>,
        ty: BasicTypeId,
        dimensions: usize,
        /// Annotations written before any of the `[]` pairs, in source order.
        dimension_annotations: Vec<Located<Annotation>>,
    },
    /// Class or interface type, e.g. `Map.Entry<K, V>[]`.
    Reference(ReferenceType),
    /// `void`, only as a method result, in `void.class`, or as a method-reference target.
    Void,
}

impl Type {
    /// Unannotated primitive type without dimensions.
    pub fn basic(ty: BasicTypeId) -> Type {
        Type::Basic {
            annotations: Vec::new(),
            ty,
            dimensions: 0,
            dimension_annotations: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        match self {
            Type::Basic { dimensions, .. } => *dimensions,
            Type::Reference(r) => r.dimensions,
            Type::Void => 0,
        }
    }

    /// Same type with `extra` more array dimensions.
    pub fn with_extra_dimensions(mut self, extra: usize) -> Type {
        match &mut self {
            Type::Basic { dimensions, .. } => *dimensions += extra,
            Type::Reference(r) => r.dimensions += extra,
            Type::Void => {}
        }
        self
    }

    /// Same type with `annotations` appended to its dimension annotations.
    pub fn with_dimension_annotations(mut self, annotations: Vec<Located<Annotation>>) -> Type {
        match &mut self {
            Type::Basic {
                dimension_annotations, ..
            }
            | Type::Reference(ReferenceType {
                dimension_annotations, ..
            }) => dimension_annotations.extend(annotations),
            Type::Void => {}
        }
        self
    }

    /// Type annotations on this type itself in source order, not those inside its type arguments.
    pub fn annotations(&self) -> Vec<&Located<Annotation>> {
        match self {
            Type::Basic {
                annotations,
                dimension_annotations,
                ..
            } => annotations.iter().chain(dimension_annotations).collect(),
            Type::Reference(r) => r
                .segments
                .iter()
                .flat_map(|s| &s.annotations)
                .chain(&r.dimension_annotations)
                .collect(),
            Type::Void => Vec::new(),
        }
    }
}

/// Dotted class type; each segment may carry its own type arguments (`Outer<A>.Inner<B>`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceType {
    pub segments: Vec<TypeSegment>,
    pub dimensions: usize,
    /// Annotations written before any of the `[]` pairs, in source order.
    pub dimension_annotations: Vec<Located<Annotation>>,
}

impl ReferenceType {
    /// Segment names joined with dots, ignoring type arguments.
    pub fn name(&self) -> QualifiedName {
        QualifiedName(self.segments.iter().map(|s| s.name.clone()).collect())
    }

    /// Type arguments of the last segment.
    pub fn arguments(&self) -> Option<&TypeArguments> {
        self.segments.last().and_then(|s| s.arguments.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeSegment {
    /// Type annotations written before the segment name, e.g. `@A` in `Outer.@A Inner`.
    pub annotations: Vec<Located<Annotation>>,
    pub name: Ident,
    pub arguments: Option<TypeArguments>,
}

impl TypeSegment {
    /// Unannotated segment without type arguments.
    pub fn named(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A type-argument clause that is present.
///
/// Absence of the clause is `None` at the use site; `<>` is [`TypeArguments::Diamond`]; an explicit
/// list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeArguments {
    Diamond,
    List(Vec<Located<TypeArgument>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeArgument {
    Type(Type),
    /// `?`, `? extends T`, `? super T`
    Wildcard(Option<WildcardBound>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum WildcardBound {
    Extends(Located<Type>),
    Super(Located<Type>),
}

/// `T extends A & B`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameter {
    pub annotations: Vec<Located<Annotation>>,
    pub name: Ident,
    pub bounds: Vec<Located<Type>>,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic { ty, dimensions, .. } => {
                write!(f, "{}{}", basic_types::as_str(*ty), "[]".repeat(*dimensions))
            }
            Type::Reference(r) => {
                for (i, segment) in r.segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", segment.name)?;
                    match &segment.arguments {
                        None => {}
                        Some(TypeArguments::Diamond) => write!(f, "<>")?,
                        Some(TypeArguments::List(args)) => {
                            write!(f, "<")?;
                            for (j, arg) in args.iter().enumerate() {
                                if j > 0 {
                                    write!(f, ", ")?;
                                }
                                write!(f, "{}", arg.node)?;
                            }
                            write!(f, ">")?;
                        }
                    }
                }
                write!(f, "{}", "[]".repeat(r.dimensions))
            }
            Type::Void => write!(f, "void"),
        }
    }
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Type(ty) => write!(f, "{ty}"),
            TypeArgument::Wildcard(None) => write!(f, "?"),
            TypeArgument::Wildcard(Some(WildcardBound::Extends(t))) => write!(f, "? extends {}", t.node),
            TypeArgument::Wildcard(Some(WildcardBound::Super(t))) => write!(f, "? super {}", t.node),
        }
    }
}

// ============================================================================
// Annotations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub name: QualifiedName,
    /// `None` for a marker annotation (`@A`); `@A()` has an empty pair list.
    pub arguments: Option<AnnotationArguments>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationArguments {
    /// `@A(value)`
    Single(Located<ElementValue>),
    /// `@A(x = 1, y = 2)`
    Pairs(Vec<Located<ElementValuePair>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementValuePair {
    pub name: Ident,
    pub value: Located<ElementValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Expression(Expr),
    Annotation(Box<Annotation>),
    /// `{ v1, v2 }`
    Array(Vec<Located<ElementValue>>),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Located<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    If {
        condition: Located<Expr>,
        then_branch: Box<Located<Stmt>>,
        else_branch: Option<Box<Located<Stmt>>>,
    },
    /// Classic `for (init; condition; update)`.
    For {
        init: Option<ForInit>,
        condition: Option<Located<Expr>>,
        update: Vec<Located<Expr>>,
        body: Box<Located<Stmt>>,
    },
    /// `for (Type name : iterable)`
    ForEach {
        variable: Located<FormalParameter>,
        iterable: Located<Expr>,
        body: Box<Located<Stmt>>,
    },
    While {
        condition: Located<Expr>,
        body: Box<Located<Stmt>>,
    },
    DoWhile {
        body: Box<Located<Stmt>>,
        condition: Located<Expr>,
    },
    Switch {
        selector: Located<Expr>,
        cases: Vec<Located<SwitchCase>>,
    },
    Try {
        /// Empty unless this is a try-with-resources statement.
        resources: Vec<Located<Resource>>,
        block: Block,
        catches: Vec<Located<CatchClause>>,
        finally: Option<Block>,
    },
    Throw(Located<Expr>),
    Return(Option<Located<Expr>>),
    Break(Option<Ident>),
    Continue(Option<Ident>),
    Synchronized {
        lock: Located<Expr>,
        body: Block,
    },
    Assert {
        condition: Located<Expr>,
        message: Option<Located<Expr>>,
    },
    LocalVariable(LocalVariableDecl),
    LocalClass(TypeDecl),
    Labeled {
        label: Ident,
        body: Box<Located<Stmt>>,
    },
    Expression(Located<Expr>),
    /// `;`
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalVariableDecl {
    pub modifiers: Modifiers,
    pub ty: Located<Type>,
    pub declarators: Vec<Located<VariableDeclarator>>,
}

impl LocalVariableDecl {
    /// Declared variable names, in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.declarators.iter().map(|d| d.node.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    Declaration(LocalVariableDecl),
    Expressions(Vec<Located<Expr>>),
}

/// A group of consecutive labels sharing one statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub labels: Vec<Located<CaseLabel>>,
    pub body: Vec<Located<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseLabel {
    Case(Located<Expr>),
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub modifiers: Modifiers,
    /// One entry per alternative of a multi-catch `A | B`.
    pub types: Vec<Located<Type>>,
    pub name: Ident,
    pub block: Block,
}

/// `Type name = expr` inside `try ( ... )`.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub modifiers: Modifiers,
    pub ty: Located<Type>,
    pub name: Ident,
    pub initializer: Located<Expr>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorCallKind {
    This,
    Super,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operation with a precedence-table operator.
    Binary {
        operator: OperatorId,
        left: Box<Located<Expr>>,
        right: Box<Located<Expr>>,
    },
    /// `target op= value`, right-associative.
    Assignment {
        operator: OperatorId,
        target: Box<Located<Expr>>,
        value: Box<Located<Expr>>,
    },
    /// `condition ? then_expr : else_expr`, right-associative.
    Ternary {
        condition: Box<Located<Expr>>,
        then_expr: Box<Located<Expr>>,
        else_expr: Box<Located<Expr>>,
    },
    InstanceOf {
        expr: Box<Located<Expr>>,
        ty: Located<Type>,
    },
    Unary {
        operator: OperatorId,
        fixity: Fixity,
        operand: Box<Located<Expr>>,
    },
    /// `(T) expr` or the intersection cast `(T & I1 & I2) expr`.
    Cast {
        ty: Located<Type>,
        additional_bounds: Vec<Located<Type>>,
        expr: Box<Located<Expr>>,
    },
    /// `name(args)`, `target.name(args)` or `target.<T>name(args)`.
    MethodInvocation {
        target: Option<Box<Located<Expr>>>,
        type_arguments: Option<TypeArguments>,
        name: Ident,
        arguments: Vec<Located<Expr>>,
    },
    /// Member access on something that is not a plain name, e.g. `foo().bar` or `this.x`.
    FieldAccess {
        target: Box<Located<Expr>>,
        name: Ident,
    },
    ArrayAccess {
        array: Box<Located<Expr>>,
        index: Box<Located<Expr>>,
    },
    /// `super.name` or `Outer.super.name`
    SuperFieldAccess {
        qualifier: Option<QualifiedName>,
        name: Ident,
    },
    /// `super.name(args)` or `Outer.super.name(args)`
    SuperMethodInvocation {
        qualifier: Option<QualifiedName>,
        type_arguments: Option<TypeArguments>,
        name: Ident,
        arguments: Vec<Located<Expr>>,
    },
    /// `this(args)`, `super(args)` or `outer.super(args)` as the first statement of a constructor.
    ConstructorCall {
        kind: ConstructorCallKind,
        /// The enclosing instance of a qualified superclass constructor call.
        qualifier: Option<Box<Located<Expr>>>,
        arguments: Vec<Located<Expr>>,
    },
    New(Creator),
    Literal {
        kind: LiteralKind,
        /// Exact source text, e.g. `0x1F`, `"a\n"`, `'c'`.
        text: String,
    },
    /// Simple or dotted name. Whether `a.b` is a package, type or field is not decided here.
    Name(QualifiedName),
    /// `this` or `Outer.this`
    This { qualifier: Option<QualifiedName> },
    /// `T.class`, `int[].class`, `void.class`
    ClassLiteral(Located<Type>),
    /// `{ a, b }` as a variable initializer or array-creation initializer.
    ArrayInitializer(Vec<Located<Expr>>),
    Parenthesized(Box<Located<Expr>>),
    Lambda {
        parameters: LambdaParameters,
        body: LambdaBody,
    },
    MethodReference {
        target: MethodReferenceTarget,
        type_arguments: Option<TypeArguments>,
        name: MethodReferenceName,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Creator {
    /// `new T(args) [body]`; diamond and explicit arguments live on the type's last segment.
    Class {
        ty: Located<Type>,
        arguments: Vec<Located<Expr>>,
        body: Option<Vec<Located<Member>>>,
    },
    /// `new T[e1][e2][]` or `new T[] { ... }`
    Array {
        element: Located<Type>,
        dimension_exprs: Vec<Located<Expr>>,
        /// Total dimensions, sized and unsized.
        dimensions: usize,
        /// Annotations written before any of the brackets, in source order.
        dimension_annotations: Vec<Located<Annotation>>,
        initializer: Option<Vec<Located<Expr>>>,
    },
    /// `outer.new Inner<>(args) [body]`
    Inner {
        outer: Box<Located<Expr>>,
        name: Ident,
        type_arguments: Option<TypeArguments>,
        arguments: Vec<Located<Expr>>,
        body: Option<Vec<Located<Member>>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaParameters {
    /// `x -> ...`
    Single(Ident),
    /// `(x, y) -> ...` and `() -> ...`
    Inferred(Vec<Ident>),
    /// `(int x, String y) -> ...`
    Formal(Vec<Located<FormalParameter>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    Expression(Box<Located<Expr>>),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MethodReferenceTarget {
    /// `expr::name`, including plain names such as `String::valueOf`.
    Expr(Box<Located<Expr>>),
    /// A type that cannot be read as an expression: `List<String>::size`, `int[]::new`.
    Type(Located<Type>),
    /// `super::name` or `Outer.super::name`
    Super { qualifier: Option<QualifiedName> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum MethodReferenceName {
    Method(Ident),
    /// `::new`
    New,
}

impl Expr {
    /// Shorthand for a simple name expression.
    pub fn name(name: impl Into<Ident>) -> Expr {
        Expr::Name(QualifiedName::simple(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(names: &[&str], last_args: Option<TypeArguments>) -> Type {
        let mut segments: Vec<TypeSegment> = names.iter().map(|n| TypeSegment::named(*n)).collect();
        if let Some(last) = segments.last_mut() {
            last.arguments = last_args;
        }
        Type::Reference(ReferenceType {
            segments,
            ..ReferenceType::default()
        })
    }

    #[test]
    fn type_display() {
        let string = reference(&["String"], None);
        let args = TypeArguments::List(vec![
            Located::new(TypeArgument::Type(string.clone()), Position::default()),
            Located::new(
                TypeArgument::Wildcard(Some(WildcardBound::Extends(Located::new(string, Position::default())))),
                Position::default(),
            ),
        ]);
        let map = reference(&["java", "util", "Map"], Some(args)).with_extra_dimensions(1);
        assert_eq!(map.to_string(), "java.util.Map<String, ? extends String>[]");

        let diamond = reference(&["ArrayList"], Some(TypeArguments::Diamond));
        assert_eq!(diamond.to_string(), "ArrayList<>");

        let ints = Type::basic(BasicTypeId::Int).with_extra_dimensions(2);
        assert_eq!(ints.to_string(), "int[][]");
        assert_eq!(ints.with_extra_dimensions(1).dimensions(), 3);
    }

    #[test]
    fn type_annotations_in_source_order() {
        let marker = |name: &str, column| {
            Located::new(
                Annotation {
                    name: QualifiedName::simple(name),
                    arguments: None,
                },
                Position::new(1, column),
            )
        };
        let mut outer = TypeSegment::named("Outer");
        outer.annotations.push(marker("A", 1));
        let mut inner = TypeSegment::named("Inner");
        inner.annotations.push(marker("B", 10));
        let ty = Type::Reference(ReferenceType {
            segments: vec![outer, inner],
            ..ReferenceType::default()
        })
        .with_extra_dimensions(1)
        .with_dimension_annotations(vec![marker("C", 22)]);

        let names: Vec<String> = ty.annotations().iter().map(|a| a.node.name.to_string()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(ty.to_string(), "Outer.Inner[]");
        assert!(Type::Void.with_dimension_annotations(vec![marker("D", 1)]).annotations().is_empty());
    }

    #[test]
    fn modifiers_keep_source_order() {
        let at = Position::default();
        let modifiers = Modifiers {
            items: vec![
                Located::new(Modifier::Keyword(ModifierId::Static), at),
                Located::new(
                    Modifier::Annotation(Annotation {
                        name: QualifiedName::simple("Deprecated"),
                        arguments: None,
                    }),
                    at,
                ),
                Located::new(Modifier::Keyword(ModifierId::Public), at),
                Located::new(Modifier::Keyword(ModifierId::Static), at),
            ],
        };
        assert_eq!(modifiers.to_string(), "static public static");
        assert!(modifiers.contains(ModifierId::Public));
        assert!(!modifiers.contains(ModifierId::Final));
        assert_eq!(modifiers.annotations().count(), 1);
    }
}
