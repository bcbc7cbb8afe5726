//! Generic tree walking.
//!
//! [`NodeRef`] is a borrowed, position-carrying view of any node in the tree. It lets tools walk a
//! [`CompilationUnit`] without writing one match per node category:
//!
//! ```rust
//! use jparse_syntax::visit::{self, NodeKind, NodeRef};
//! use jparse_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("class A { int f() { return 1 + 2; } }").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//!
//! let mut binaries = 0;
//! visit::walk(NodeRef::from(&unit), &mut |node| {
//!     if node.kind() == NodeKind::BinaryOperation {
//!         binaries += 1;
//!     }
//! }, &mut |_| {});
//! assert_eq!(binaries, 1);
//! ```
//!
//! ## Notes
//! - Wrappers without a grammar identity of their own are flattened: a nested type declaration is
//!   reported as the declaration itself, a plain element value as its expression or annotation, and
//!   the statements of a method body or `try` block as direct children of their owner.
//! - Modifier keywords are not nodes; annotations written among them are.

use std::fmt;

use crate::ast::*;
use crate::lexer::Position;

/// Borrowed view of one node together with its position.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub position: Position,
    pub node: Node<'a>,
}

/// The node categories a [`NodeRef`] can point at.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    CompilationUnit(&'a CompilationUnit),
    Package(&'a PackageDecl),
    Import(&'a ImportDecl),
    TypeDecl(&'a TypeDecl),
    EnumConstant(&'a EnumConstant),
    /// Any member except nested types, which appear as [`Node::TypeDecl`].
    Member(&'a Member),
    VariableDeclarator(&'a VariableDeclarator),
    FormalParameter(&'a FormalParameter),
    ReceiverParameter(&'a ReceiverParameter),
    TypeParameter(&'a TypeParameter),
    Type(&'a Type),
    Wildcard(&'a Option<WildcardBound>),
    Annotation(&'a Annotation),
    ElementValuePair(&'a ElementValuePair),
    ElementValueArray(&'a [Located<ElementValue>]),
    Stmt(&'a Stmt),
    SwitchCase(&'a SwitchCase),
    CatchClause(&'a CatchClause),
    Resource(&'a Resource),
    Expr(&'a Expr),
}

/// Fine-grained kind of a node, one per grammar construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    CompilationUnit,
    PackageDeclaration,
    Import,
    ClassDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    AnnotationTypeDeclaration,
    EnumConstant,
    FieldDeclaration,
    MethodDeclaration,
    ConstructorDeclaration,
    Initializer,
    AnnotationElement,
    VariableDeclarator,
    FormalParameter,
    ReceiverParameter,
    TypeParameter,
    BasicType,
    ReferenceType,
    VoidType,
    WildcardTypeArgument,
    Annotation,
    ElementValuePair,
    ElementValueArray,
    BlockStatement,
    IfStatement,
    ForStatement,
    ForEachStatement,
    WhileStatement,
    DoStatement,
    SwitchStatement,
    TryStatement,
    ThrowStatement,
    ReturnStatement,
    BreakStatement,
    ContinueStatement,
    SynchronizedStatement,
    AssertStatement,
    LocalVariableDeclaration,
    LocalClassDeclaration,
    LabeledStatement,
    ExpressionStatement,
    EmptyStatement,
    SwitchCase,
    CatchClause,
    TryResource,
    BinaryOperation,
    Assignment,
    TernaryExpression,
    InstanceOf,
    UnaryOperation,
    Cast,
    MethodInvocation,
    FieldAccess,
    ArrayAccess,
    SuperFieldAccess,
    SuperMethodInvocation,
    ConstructorCall,
    ClassCreator,
    ArrayCreator,
    InnerClassCreator,
    Literal,
    Name,
    This,
    ClassLiteral,
    ArrayInitializer,
    Parenthesized,
    Lambda,
    MethodReference,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::CompilationUnit, NodeKind::PackageDeclaration, NodeKind::Import,
        NodeKind::ClassDeclaration, NodeKind::InterfaceDeclaration, NodeKind::EnumDeclaration,
        NodeKind::AnnotationTypeDeclaration, NodeKind::EnumConstant, NodeKind::FieldDeclaration,
        NodeKind::MethodDeclaration, NodeKind::ConstructorDeclaration, NodeKind::Initializer,
        NodeKind::AnnotationElement, NodeKind::VariableDeclarator, NodeKind::FormalParameter,
        NodeKind::ReceiverParameter, NodeKind::TypeParameter, NodeKind::BasicType, NodeKind::ReferenceType, NodeKind::VoidType,
        NodeKind::WildcardTypeArgument, NodeKind::Annotation, NodeKind::ElementValuePair,
        NodeKind::ElementValueArray, NodeKind::BlockStatement, NodeKind::IfStatement, NodeKind::ForStatement,
        NodeKind::ForEachStatement, NodeKind::WhileStatement, NodeKind::DoStatement,
        NodeKind::SwitchStatement, NodeKind::TryStatement, NodeKind::ThrowStatement,
        NodeKind::ReturnStatement, NodeKind::BreakStatement, NodeKind::ContinueStatement,
        NodeKind::SynchronizedStatement, NodeKind::AssertStatement, NodeKind::LocalVariableDeclaration,
        NodeKind::LocalClassDeclaration, NodeKind::LabeledStatement, NodeKind::ExpressionStatement,
        NodeKind::EmptyStatement, NodeKind::SwitchCase, NodeKind::CatchClause, NodeKind::TryResource,
        NodeKind::BinaryOperation, NodeKind::Assignment, NodeKind::TernaryExpression, NodeKind::InstanceOf,
        NodeKind::UnaryOperation, NodeKind::Cast, NodeKind::MethodInvocation, NodeKind::FieldAccess,
        NodeKind::ArrayAccess, NodeKind::SuperFieldAccess, NodeKind::SuperMethodInvocation,
        NodeKind::ConstructorCall, NodeKind::ClassCreator, NodeKind::ArrayCreator,
        NodeKind::InnerClassCreator, NodeKind::Literal, NodeKind::Name, NodeKind::This,
        NodeKind::ClassLiteral, NodeKind::ArrayInitializer, NodeKind::Parenthesized, NodeKind::Lambda,
        NodeKind::MethodReference,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::PackageDeclaration => "PackageDeclaration",
            NodeKind::Import => "Import",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::InterfaceDeclaration => "InterfaceDeclaration",
            NodeKind::EnumDeclaration => "EnumDeclaration",
            NodeKind::AnnotationTypeDeclaration => "AnnotationTypeDeclaration",
            NodeKind::EnumConstant => "EnumConstant",
            NodeKind::FieldDeclaration => "FieldDeclaration",
            NodeKind::MethodDeclaration => "MethodDeclaration",
            NodeKind::ConstructorDeclaration => "ConstructorDeclaration",
            NodeKind::Initializer => "Initializer",
            NodeKind::AnnotationElement => "AnnotationElement",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::FormalParameter => "FormalParameter",
            NodeKind::ReceiverParameter => "ReceiverParameter",
            NodeKind::TypeParameter => "TypeParameter",
            NodeKind::BasicType => "BasicType",
            NodeKind::ReferenceType => "ReferenceType",
            NodeKind::VoidType => "VoidType",
            NodeKind::WildcardTypeArgument => "WildcardTypeArgument",
            NodeKind::Annotation => "Annotation",
            NodeKind::ElementValuePair => "ElementValuePair",
            NodeKind::ElementValueArray => "ElementValueArray",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::ForEachStatement => "ForEachStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoStatement => "DoStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::SynchronizedStatement => "SynchronizedStatement",
            NodeKind::AssertStatement => "AssertStatement",
            NodeKind::LocalVariableDeclaration => "LocalVariableDeclaration",
            NodeKind::LocalClassDeclaration => "LocalClassDeclaration",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::SwitchCase => "SwitchCase",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::TryResource => "TryResource",
            NodeKind::BinaryOperation => "BinaryOperation",
            NodeKind::Assignment => "Assignment",
            NodeKind::TernaryExpression => "TernaryExpression",
            NodeKind::InstanceOf => "InstanceOf",
            NodeKind::UnaryOperation => "UnaryOperation",
            NodeKind::Cast => "Cast",
            NodeKind::MethodInvocation => "MethodInvocation",
            NodeKind::FieldAccess => "FieldAccess",
            NodeKind::ArrayAccess => "ArrayAccess",
            NodeKind::SuperFieldAccess => "SuperFieldAccess",
            NodeKind::SuperMethodInvocation => "SuperMethodInvocation",
            NodeKind::ConstructorCall => "ConstructorCall",
            NodeKind::ClassCreator => "ClassCreator",
            NodeKind::ArrayCreator => "ArrayCreator",
            NodeKind::InnerClassCreator => "InnerClassCreator",
            NodeKind::Literal => "Literal",
            NodeKind::Name => "Name",
            NodeKind::This => "This",
            NodeKind::ClassLiteral => "ClassLiteral",
            NodeKind::ArrayInitializer => "ArrayInitializer",
            NodeKind::Parenthesized => "Parenthesized",
            NodeKind::Lambda => "Lambda",
            NodeKind::MethodReference => "MethodReference",
        }
    }

    /// Look up a kind by its [`NodeKind::as_str`] name.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        NodeKind::ALL.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// Package, import, type and member declarations (not local variables).
    pub fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::PackageDeclaration
                | NodeKind::Import
                | NodeKind::ClassDeclaration
                | NodeKind::InterfaceDeclaration
                | NodeKind::EnumDeclaration
                | NodeKind::AnnotationTypeDeclaration
                | NodeKind::EnumConstant
                | NodeKind::FieldDeclaration
                | NodeKind::MethodDeclaration
                | NodeKind::ConstructorDeclaration
                | NodeKind::Initializer
                | NodeKind::AnnotationElement
        )
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            NodeKind::BasicType | NodeKind::ReferenceType | NodeKind::VoidType | NodeKind::WildcardTypeArgument
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::BlockStatement
                | NodeKind::IfStatement
                | NodeKind::ForStatement
                | NodeKind::ForEachStatement
                | NodeKind::WhileStatement
                | NodeKind::DoStatement
                | NodeKind::SwitchStatement
                | NodeKind::TryStatement
                | NodeKind::ThrowStatement
                | NodeKind::ReturnStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::SynchronizedStatement
                | NodeKind::AssertStatement
                | NodeKind::LocalVariableDeclaration
                | NodeKind::LocalClassDeclaration
                | NodeKind::LabeledStatement
                | NodeKind::ExpressionStatement
                | NodeKind::EmptyStatement
        )
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::BinaryOperation
                | NodeKind::Assignment
                | NodeKind::TernaryExpression
                | NodeKind::InstanceOf
                | NodeKind::UnaryOperation
                | NodeKind::Cast
                | NodeKind::MethodInvocation
                | NodeKind::FieldAccess
                | NodeKind::ArrayAccess
                | NodeKind::SuperFieldAccess
                | NodeKind::SuperMethodInvocation
                | NodeKind::ConstructorCall
                | NodeKind::ClassCreator
                | NodeKind::ArrayCreator
                | NodeKind::InnerClassCreator
                | NodeKind::Literal
                | NodeKind::Name
                | NodeKind::This
                | NodeKind::ClassLiteral
                | NodeKind::ArrayInitializer
                | NodeKind::Parenthesized
                | NodeKind::Lambda
                | NodeKind::MethodReference
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl<'a> From<&'a CompilationUnit> for NodeRef<'a> {
    fn from(unit: &'a CompilationUnit) -> Self {
        NodeRef::new(unit.position, Node::CompilationUnit(unit))
    }
}

impl<'a> From<&'a Located<TypeDecl>> for NodeRef<'a> {
    fn from(decl: &'a Located<TypeDecl>) -> Self {
        NodeRef::new(decl.position, Node::TypeDecl(&decl.node))
    }
}

impl<'a> From<&'a Located<Member>> for NodeRef<'a> {
    fn from(member: &'a Located<Member>) -> Self {
        match &member.node {
            Member::Type(decl) => NodeRef::new(member.position, Node::TypeDecl(decl)),
            other => NodeRef::new(member.position, Node::Member(other)),
        }
    }
}

impl<'a> From<&'a Located<Stmt>> for NodeRef<'a> {
    fn from(stmt: &'a Located<Stmt>) -> Self {
        NodeRef::new(stmt.position, Node::Stmt(&stmt.node))
    }
}

impl<'a> From<&'a Located<Expr>> for NodeRef<'a> {
    fn from(expr: &'a Located<Expr>) -> Self {
        NodeRef::new(expr.position, Node::Expr(&expr.node))
    }
}

impl<'a> From<&'a Located<Type>> for NodeRef<'a> {
    fn from(ty: &'a Located<Type>) -> Self {
        NodeRef::new(ty.position, Node::Type(&ty.node))
    }
}

impl<'a> NodeRef<'a> {
    pub fn new(position: Position, node: Node<'a>) -> Self {
        Self { position, node }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn kind(&self) -> NodeKind {
        match self.node {
            Node::CompilationUnit(_) => NodeKind::CompilationUnit,
            Node::Package(_) => NodeKind::PackageDeclaration,
            Node::Import(_) => NodeKind::Import,
            Node::TypeDecl(decl) => match decl {
                TypeDecl::Class(_) => NodeKind::ClassDeclaration,
                TypeDecl::Interface(_) => NodeKind::InterfaceDeclaration,
                TypeDecl::Enum(_) => NodeKind::EnumDeclaration,
                TypeDecl::AnnotationType(_) => NodeKind::AnnotationTypeDeclaration,
            },
            Node::EnumConstant(_) => NodeKind::EnumConstant,
            Node::Member(member) => match member {
                Member::Field(_) => NodeKind::FieldDeclaration,
                Member::Method(_) => NodeKind::MethodDeclaration,
                Member::Constructor(_) => NodeKind::ConstructorDeclaration,
                Member::Initializer(_) => NodeKind::Initializer,
                Member::AnnotationElement(_) => NodeKind::AnnotationElement,
                Member::Type(decl) => NodeRef::new(self.position, Node::TypeDecl(decl)).kind(),
            },
            Node::VariableDeclarator(_) => NodeKind::VariableDeclarator,
            Node::FormalParameter(_) => NodeKind::FormalParameter,
            Node::ReceiverParameter(_) => NodeKind::ReceiverParameter,
            Node::TypeParameter(_) => NodeKind::TypeParameter,
            Node::Type(ty) => match ty {
                Type::Basic { .. } => NodeKind::BasicType,
                Type::Reference(_) => NodeKind::ReferenceType,
                Type::Void => NodeKind::VoidType,
            },
            Node::Wildcard(_) => NodeKind::WildcardTypeArgument,
            Node::Annotation(_) => NodeKind::Annotation,
            Node::ElementValuePair(_) => NodeKind::ElementValuePair,
            Node::ElementValueArray(_) => NodeKind::ElementValueArray,
            Node::Stmt(stmt) => stmt_kind(stmt),
            Node::SwitchCase(_) => NodeKind::SwitchCase,
            Node::CatchClause(_) => NodeKind::CatchClause,
            Node::Resource(_) => NodeKind::TryResource,
            Node::Expr(expr) => expr_kind(expr),
        }
    }

    /// Declared name, for nodes that declare one.
    pub fn name(&self) -> Option<&'a str> {
        match self.node {
            Node::TypeDecl(decl) => Some(decl.name()),
            Node::EnumConstant(c) => Some(&c.name),
            Node::Member(member) => match member {
                Member::Method(m) => Some(&m.name),
                Member::Constructor(c) => Some(&c.name),
                Member::AnnotationElement(e) => Some(&e.name),
                Member::Type(decl) => Some(decl.name()),
                Member::Field(_) | Member::Initializer(_) => None,
            },
            Node::VariableDeclarator(d) => Some(&d.name),
            Node::FormalParameter(p) => Some(&p.name),
            Node::TypeParameter(p) => Some(&p.name),
            Node::Resource(r) => Some(&r.name),
            Node::CatchClause(c) => Some(&c.name),
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        let mut out = Children::default();
        match self.node {
            Node::CompilationUnit(unit) => {
                if let Some(package) = &unit.package {
                    out.push(package.position, Node::Package(&package.node));
                }
                for import in &unit.imports {
                    out.push(import.position, Node::Import(&import.node));
                }
                for decl in &unit.types {
                    out.nodes.push(decl.into());
                }
            }
            Node::Package(package) => out.annotations(&package.annotations),
            Node::Import(_) => {}
            Node::TypeDecl(decl) => out.type_decl(decl),
            Node::EnumConstant(constant) => {
                out.annotations(&constant.annotations);
                if let Some(arguments) = &constant.arguments {
                    out.exprs(arguments);
                }
                if let Some(body) = &constant.body {
                    out.members(body);
                }
            }
            Node::Member(member) => out.member(member),
            Node::VariableDeclarator(declarator) => {
                out.annotations(&declarator.dimension_annotations);
                if let Some(init) = &declarator.initializer {
                    out.expr(init);
                }
            }
            Node::FormalParameter(param) => {
                out.modifiers(&param.modifiers);
                out.ty(&param.ty);
            }
            Node::ReceiverParameter(receiver) => {
                out.annotations(&receiver.annotations);
                out.ty(&receiver.ty);
            }
            Node::TypeParameter(param) => {
                out.annotations(&param.annotations);
                out.types(&param.bounds);
            }
            Node::Type(ty) => match ty {
                Type::Basic {
                    annotations,
                    dimension_annotations,
                    ..
                } => {
                    out.annotations(annotations);
                    out.annotations(dimension_annotations);
                }
                Type::Reference(r) => {
                    for segment in &r.segments {
                        out.annotations(&segment.annotations);
                        out.type_arguments(segment.arguments.as_ref());
                    }
                    out.annotations(&r.dimension_annotations);
                }
                Type::Void => {}
            },
            Node::Wildcard(bound) => match bound {
                Some(WildcardBound::Extends(ty)) | Some(WildcardBound::Super(ty)) => out.ty(ty),
                None => {}
            },
            Node::Annotation(annotation) => match &annotation.arguments {
                None => {}
                Some(AnnotationArguments::Single(value)) => out.element_value(value),
                Some(AnnotationArguments::Pairs(pairs)) => {
                    for pair in pairs {
                        out.push(pair.position, Node::ElementValuePair(&pair.node));
                    }
                }
            },
            Node::ElementValuePair(pair) => out.element_value(&pair.value),
            Node::ElementValueArray(values) => {
                for value in values {
                    out.element_value(value);
                }
            }
            Node::Stmt(stmt) => out.stmt(stmt, self.position),
            Node::SwitchCase(case) => {
                for label in &case.labels {
                    if let CaseLabel::Case(expr) = &label.node {
                        out.expr(expr);
                    }
                }
                out.stmts(&case.body);
            }
            Node::CatchClause(clause) => {
                out.modifiers(&clause.modifiers);
                out.types(&clause.types);
                out.block(&clause.block);
            }
            Node::Resource(resource) => {
                out.modifiers(&resource.modifiers);
                out.ty(&resource.ty);
                out.expr(&resource.initializer);
            }
            Node::Expr(expr) => out.expr_children(expr),
        }
        out.nodes
    }
}

fn stmt_kind(stmt: &Stmt) -> NodeKind {
    match stmt {
        Stmt::Block(_) => NodeKind::BlockStatement,
        Stmt::If { .. } => NodeKind::IfStatement,
        Stmt::For { .. } => NodeKind::ForStatement,
        Stmt::ForEach { .. } => NodeKind::ForEachStatement,
        Stmt::While { .. } => NodeKind::WhileStatement,
        Stmt::DoWhile { .. } => NodeKind::DoStatement,
        Stmt::Switch { .. } => NodeKind::SwitchStatement,
        Stmt::Try { .. } => NodeKind::TryStatement,
        Stmt::Throw(_) => NodeKind::ThrowStatement,
        Stmt::Return(_) => NodeKind::ReturnStatement,
        Stmt::Break(_) => NodeKind::BreakStatement,
        Stmt::Continue(_) => NodeKind::ContinueStatement,
        Stmt::Synchronized { .. } => NodeKind::SynchronizedStatement,
        Stmt::Assert { .. } => NodeKind::AssertStatement,
        Stmt::LocalVariable(_) => NodeKind::LocalVariableDeclaration,
        Stmt::LocalClass(_) => NodeKind::LocalClassDeclaration,
        Stmt::Labeled { .. } => NodeKind::LabeledStatement,
        Stmt::Expression(_) => NodeKind::ExpressionStatement,
        Stmt::Empty => NodeKind::EmptyStatement,
    }
}

fn expr_kind(expr: &Expr) -> NodeKind {
    match expr {
        Expr::Binary { .. } => NodeKind::BinaryOperation,
        Expr::Assignment { .. } => NodeKind::Assignment,
        Expr::Ternary { .. } => NodeKind::TernaryExpression,
        Expr::InstanceOf { .. } => NodeKind::InstanceOf,
        Expr::Unary { .. } => NodeKind::UnaryOperation,
        Expr::Cast { .. } => NodeKind::Cast,
        Expr::MethodInvocation { .. } => NodeKind::MethodInvocation,
        Expr::FieldAccess { .. } => NodeKind::FieldAccess,
        Expr::ArrayAccess { .. } => NodeKind::ArrayAccess,
        Expr::SuperFieldAccess { .. } => NodeKind::SuperFieldAccess,
        Expr::SuperMethodInvocation { .. } => NodeKind::SuperMethodInvocation,
        Expr::ConstructorCall { .. } => NodeKind::ConstructorCall,
        Expr::New(Creator::Class { .. }) => NodeKind::ClassCreator,
        Expr::New(Creator::Array { .. }) => NodeKind::ArrayCreator,
        Expr::New(Creator::Inner { .. }) => NodeKind::InnerClassCreator,
        Expr::Literal { .. } => NodeKind::Literal,
        Expr::Name(_) => NodeKind::Name,
        Expr::This { .. } => NodeKind::This,
        Expr::ClassLiteral(_) => NodeKind::ClassLiteral,
        Expr::ArrayInitializer(_) => NodeKind::ArrayInitializer,
        Expr::Parenthesized(_) => NodeKind::Parenthesized,
        Expr::Lambda { .. } => NodeKind::Lambda,
        Expr::MethodReference { .. } => NodeKind::MethodReference,
    }
}

// ============================================================================
// Child collection
// ============================================================================

#[derive(Default)]
struct Children<'a> {
    nodes: Vec<NodeRef<'a>>,
}

impl<'a> Children<'a> {
    fn push(&mut self, position: Position, node: Node<'a>) {
        self.nodes.push(NodeRef::new(position, node));
    }

    fn expr(&mut self, expr: &'a Located<Expr>) {
        self.nodes.push(expr.into());
    }

    fn exprs(&mut self, exprs: &'a [Located<Expr>]) {
        for expr in exprs {
            self.expr(expr);
        }
    }

    fn ty(&mut self, ty: &'a Located<Type>) {
        self.nodes.push(ty.into());
    }

    fn types(&mut self, types: &'a [Located<Type>]) {
        for ty in types {
            self.ty(ty);
        }
    }

    fn stmts(&mut self, stmts: &'a [Located<Stmt>]) {
        for stmt in stmts {
            self.nodes.push(stmt.into());
        }
    }

    fn block(&mut self, block: &'a Block) {
        self.stmts(&block.statements);
    }

    fn members(&mut self, members: &'a [Located<Member>]) {
        for member in members {
            self.nodes.push(member.into());
        }
    }

    fn annotations(&mut self, annotations: &'a [Located<Annotation>]) {
        for annotation in annotations {
            self.push(annotation.position, Node::Annotation(&annotation.node));
        }
    }

    fn modifiers(&mut self, modifiers: &'a Modifiers) {
        for item in &modifiers.items {
            if let Modifier::Annotation(annotation) = &item.node {
                self.push(item.position, Node::Annotation(annotation));
            }
        }
    }

    fn type_parameters(&mut self, params: &'a [Located<TypeParameter>]) {
        for param in params {
            self.push(param.position, Node::TypeParameter(&param.node));
        }
    }

    fn receiver(&mut self, receiver: Option<&'a Located<ReceiverParameter>>) {
        if let Some(receiver) = receiver {
            self.push(receiver.position, Node::ReceiverParameter(&receiver.node));
        }
    }

    fn parameters(&mut self, params: &'a [Located<FormalParameter>]) {
        for param in params {
            self.push(param.position, Node::FormalParameter(&param.node));
        }
    }

    fn declarators(&mut self, declarators: &'a [Located<VariableDeclarator>]) {
        for declarator in declarators {
            self.push(declarator.position, Node::VariableDeclarator(&declarator.node));
        }
    }

    fn type_arguments(&mut self, arguments: Option<&'a TypeArguments>) {
        let Some(TypeArguments::List(args)) = arguments else {
            return;
        };
        for arg in args {
            match &arg.node {
                TypeArgument::Type(ty) => self.push(arg.position, Node::Type(ty)),
                TypeArgument::Wildcard(bound) => self.push(arg.position, Node::Wildcard(bound)),
            }
        }
    }

    fn element_value(&mut self, value: &'a Located<ElementValue>) {
        match &value.node {
            ElementValue::Expression(expr) => self.push(value.position, Node::Expr(expr)),
            ElementValue::Annotation(annotation) => self.push(value.position, Node::Annotation(&**annotation)),
            ElementValue::Array(values) => self.push(value.position, Node::ElementValueArray(values)),
        }
    }

    fn local_variable(&mut self, decl: &'a LocalVariableDecl) {
        self.modifiers(&decl.modifiers);
        self.ty(&decl.ty);
        self.declarators(&decl.declarators);
    }

    fn type_decl(&mut self, decl: &'a TypeDecl) {
        match decl {
            TypeDecl::Class(class) => {
                self.modifiers(&class.modifiers);
                self.type_parameters(&class.type_parameters);
                if let Some(extends) = &class.extends {
                    self.ty(extends);
                }
                self.types(&class.implements);
                self.members(&class.body);
            }
            TypeDecl::Interface(interface) => {
                self.modifiers(&interface.modifiers);
                self.type_parameters(&interface.type_parameters);
                self.types(&interface.extends);
                self.members(&interface.body);
            }
            TypeDecl::Enum(decl) => {
                self.modifiers(&decl.modifiers);
                self.types(&decl.implements);
                for constant in &decl.constants {
                    self.push(constant.position, Node::EnumConstant(&constant.node));
                }
                self.members(&decl.body);
            }
            TypeDecl::AnnotationType(decl) => {
                self.modifiers(&decl.modifiers);
                self.members(&decl.body);
            }
        }
    }

    fn member(&mut self, member: &'a Member) {
        match member {
            Member::Field(field) => {
                self.modifiers(&field.modifiers);
                self.ty(&field.ty);
                self.declarators(&field.declarators);
            }
            Member::Method(method) => {
                self.modifiers(&method.modifiers);
                self.type_parameters(&method.type_parameters);
                self.ty(&method.return_type);
                self.receiver(method.receiver.as_ref());
                self.parameters(&method.parameters);
                self.types(&method.throws);
                if let Some(body) = &method.body {
                    self.block(body);
                }
            }
            Member::Constructor(ctor) => {
                self.modifiers(&ctor.modifiers);
                self.type_parameters(&ctor.type_parameters);
                self.receiver(ctor.receiver.as_ref());
                self.parameters(&ctor.parameters);
                self.types(&ctor.throws);
                self.block(&ctor.body);
            }
            Member::Initializer(init) => self.block(&init.body),
            Member::Type(decl) => self.type_decl(decl),
            Member::AnnotationElement(element) => {
                self.modifiers(&element.modifiers);
                self.ty(&element.ty);
                if let Some(default) = &element.default {
                    self.element_value(default);
                }
            }
        }
    }

    fn stmt(&mut self, stmt: &'a Stmt, position: Position) {
        match stmt {
            Stmt::Block(block) => self.block(block),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.expr(condition);
                self.nodes.push(NodeRef::from(&**then_branch));
                if let Some(else_branch) = else_branch {
                    self.nodes.push(NodeRef::from(&**else_branch));
                }
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                match init {
                    Some(ForInit::Declaration(decl)) => self.local_variable(decl),
                    Some(ForInit::Expressions(exprs)) => self.exprs(exprs),
                    None => {}
                }
                if let Some(condition) = condition {
                    self.expr(condition);
                }
                self.exprs(update);
                self.nodes.push(NodeRef::from(&**body));
            }
            Stmt::ForEach {
                variable,
                iterable,
                body,
            } => {
                self.push(variable.position, Node::FormalParameter(&variable.node));
                self.expr(iterable);
                self.nodes.push(NodeRef::from(&**body));
            }
            Stmt::While { condition, body } => {
                self.expr(condition);
                self.nodes.push(NodeRef::from(&**body));
            }
            Stmt::DoWhile { body, condition } => {
                self.nodes.push(NodeRef::from(&**body));
                self.expr(condition);
            }
            Stmt::Switch { selector, cases } => {
                self.expr(selector);
                for case in cases {
                    self.push(case.position, Node::SwitchCase(&case.node));
                }
            }
            Stmt::Try {
                resources,
                block,
                catches,
                finally,
            } => {
                for resource in resources {
                    self.push(resource.position, Node::Resource(&resource.node));
                }
                self.block(block);
                for clause in catches {
                    self.push(clause.position, Node::CatchClause(&clause.node));
                }
                if let Some(finally) = finally {
                    self.block(finally);
                }
            }
            Stmt::Throw(expr) | Stmt::Expression(expr) => self.expr(expr),
            Stmt::Return(expr) => {
                if let Some(expr) = expr {
                    self.expr(expr);
                }
            }
            Stmt::Break(_) | Stmt::Continue(_) | Stmt::Empty => {}
            Stmt::Synchronized { lock, body } => {
                self.expr(lock);
                self.block(body);
            }
            Stmt::Assert { condition, message } => {
                self.expr(condition);
                if let Some(message) = message {
                    self.expr(message);
                }
            }
            Stmt::LocalVariable(decl) => self.local_variable(decl),
            Stmt::LocalClass(decl) => self.push(position, Node::TypeDecl(decl)),
            Stmt::Labeled { body, .. } => self.nodes.push(NodeRef::from(&**body)),
        }
    }

    fn expr_children(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Binary { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            Expr::Assignment { target, value, .. } => {
                self.expr(target);
                self.expr(value);
            }
            Expr::Ternary {
                condition,
                then_expr,
                else_expr,
            } => {
                self.expr(condition);
                self.expr(then_expr);
                self.expr(else_expr);
            }
            Expr::InstanceOf { expr, ty } => {
                self.expr(expr);
                self.ty(ty);
            }
            Expr::Unary { operand, .. } => self.expr(operand),
            Expr::Cast {
                ty,
                additional_bounds,
                expr,
            } => {
                self.ty(ty);
                self.types(additional_bounds);
                self.expr(expr);
            }
            Expr::MethodInvocation {
                target,
                type_arguments,
                arguments,
                ..
            } => {
                if let Some(target) = target {
                    self.expr(target);
                }
                self.type_arguments(type_arguments.as_ref());
                self.exprs(arguments);
            }
            Expr::FieldAccess { target, .. } => self.expr(target),
            Expr::ArrayAccess { array, index } => {
                self.expr(array);
                self.expr(index);
            }
            Expr::SuperFieldAccess { .. } => {}
            Expr::SuperMethodInvocation {
                type_arguments,
                arguments,
                ..
            } => {
                self.type_arguments(type_arguments.as_ref());
                self.exprs(arguments);
            }
            Expr::ConstructorCall {
                qualifier, arguments, ..
            } => {
                if let Some(qualifier) = qualifier {
                    self.expr(qualifier);
                }
                self.exprs(arguments);
            }
            Expr::New(creator) => match creator {
                Creator::Class { ty, arguments, body } => {
                    self.ty(ty);
                    self.exprs(arguments);
                    if let Some(body) = body {
                        self.members(body);
                    }
                }
                Creator::Array {
                    element,
                    dimension_exprs,
                    dimension_annotations,
                    initializer,
                    ..
                } => {
                    self.ty(element);
                    let brackets = self.nodes.len();
                    self.annotations(dimension_annotations);
                    self.exprs(dimension_exprs);
                    self.nodes[brackets..].sort_by_key(|n| n.position);
                    if let Some(initializer) = initializer {
                        self.exprs(initializer);
                    }
                }
                Creator::Inner {
                    outer,
                    type_arguments,
                    arguments,
                    body,
                    ..
                } => {
                    self.expr(outer);
                    self.type_arguments(type_arguments.as_ref());
                    self.exprs(arguments);
                    if let Some(body) = body {
                        self.members(body);
                    }
                }
            },
            Expr::Literal { .. } | Expr::Name(_) | Expr::This { .. } => {}
            Expr::ClassLiteral(ty) => self.ty(ty),
            Expr::ArrayInitializer(elements) => self.exprs(elements),
            Expr::Parenthesized(inner) => self.expr(inner),
            Expr::Lambda { parameters, body } => {
                if let LambdaParameters::Formal(params) = parameters {
                    self.parameters(params);
                }
                match body {
                    LambdaBody::Expression(expr) => self.expr(expr),
                    LambdaBody::Block(block) => self.block(block),
                }
            }
            Expr::MethodReference {
                target,
                type_arguments,
                ..
            } => {
                match target {
                    MethodReferenceTarget::Expr(expr) => self.expr(expr),
                    MethodReferenceTarget::Type(ty) => self.ty(ty),
                    MethodReferenceTarget::Super { .. } => {}
                }
                self.type_arguments(type_arguments.as_ref());
            }
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// One step of a depth-first traversal.
#[derive(Debug, Clone, Copy)]
pub enum Visit<'a> {
    Enter(NodeRef<'a>),
    Leave(NodeRef<'a>),
}

/// Depth-first traversal reporting every enter and leave to a single callback.
///
/// Uses an explicit stack, so arbitrarily deep trees do not grow the call stack.
pub fn walk_events<'a>(root: NodeRef<'a>, on_visit: &mut impl FnMut(Visit<'a>)) {
    let mut stack = vec![(root, false)];
    while let Some((node, children_done)) = stack.pop() {
        if children_done {
            on_visit(Visit::Leave(node));
            continue;
        }
        on_visit(Visit::Enter(node));
        stack.push((node, true));
        for child in node.children().into_iter().rev() {
            stack.push((child, false));
        }
    }
}

/// Depth-first traversal calling `on_enter` before a node's children and `on_leave` after them.
///
/// Callbacks that share state should use [`walk_events`] instead.
pub fn walk<'a>(
    root: NodeRef<'a>,
    on_enter: &mut impl FnMut(NodeRef<'a>),
    on_leave: &mut impl FnMut(NodeRef<'a>),
) {
    walk_events(root, &mut |visit| match visit {
        Visit::Enter(node) => on_enter(node),
        Visit::Leave(node) => on_leave(node),
    });
}

/// All nodes below and including `root`, in pre-order.
pub fn descendants(root: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    let mut out = Vec::new();
    walk(root, &mut |node| out.push(node), &mut |_| {});
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer, parser};

    fn unit(source: &str) -> CompilationUnit {
        let tokens = lexer::lex(source).unwrap();
        parser::parse(&tokens).unwrap()
    }

    #[test]
    fn enter_and_leave_are_balanced_and_nested() {
        let unit = unit("class A { void f(int x) { if (x > 0) { g(x); } } }");
        let mut events = Vec::new();
        walk_events(NodeRef::from(&unit), &mut |visit| match visit {
            Visit::Enter(n) => events.push(format!("+{}", n.kind())),
            Visit::Leave(n) => events.push(format!("-{}", n.kind())),
        });
        assert_eq!(events.first().map(String::as_str), Some("+CompilationUnit"));
        assert_eq!(events.last().map(String::as_str), Some("-CompilationUnit"));
        let enters = events.iter().filter(|e| e.starts_with('+')).count();
        assert_eq!(enters * 2, events.len());

        let order: Vec<&str> = events.iter().filter(|e| e.starts_with('+')).map(String::as_str).collect();
        let pos = |k: &str| order.iter().position(|e| *e == k).unwrap();
        assert!(pos("+ClassDeclaration") < pos("+MethodDeclaration"));
        assert!(pos("+MethodDeclaration") < pos("+FormalParameter"));
        assert!(pos("+IfStatement") < pos("+MethodInvocation"));
    }

    #[test]
    fn nested_types_are_reported_as_declarations() {
        let unit = unit("class A { enum E { X, Y } interface I {} }");
        let kinds: Vec<NodeKind> = descendants(NodeRef::from(&unit)).iter().map(|n| n.kind()).collect();
        assert!(kinds.contains(&NodeKind::EnumDeclaration));
        assert!(kinds.contains(&NodeKind::InterfaceDeclaration));
        assert_eq!(kinds.iter().filter(|k| **k == NodeKind::EnumConstant).count(), 2);
    }

    #[test]
    fn positions_and_names() {
        let unit = unit("class A {\n  int count;\n  void run() {}\n}");
        let nodes = descendants(NodeRef::from(&unit));
        let method = nodes.iter().find(|n| n.kind() == NodeKind::MethodDeclaration).unwrap();
        assert_eq!(method.name(), Some("run"));
        assert_eq!(method.position(), Position::new(3, 3));
        let declarator = nodes.iter().find(|n| n.kind() == NodeKind::VariableDeclarator).unwrap();
        assert_eq!(declarator.name(), Some("count"));
    }

    #[test]
    fn case_label_expressions_keep_their_own_position() {
        let unit = unit("class A { void f(int x) { switch (x) {\ncase    FOO: break;\ndefault: } } }");
        let nodes = descendants(NodeRef::from(&unit));
        let case = nodes.iter().find(|n| n.kind() == NodeKind::SwitchCase).unwrap();
        assert_eq!(case.position(), Position::new(2, 1));
        let label = case.children().into_iter().next().unwrap();
        assert_eq!(label.kind(), NodeKind::Name);
        assert_eq!(label.position(), Position::new(2, 9));
    }

    #[test]
    fn nested_annotation_values_are_annotation_nodes() {
        let unit = unit("@Outer(inner = @Inner(@Leaf)) class A {}");
        let annotations: Vec<Position> = descendants(NodeRef::from(&unit))
            .iter()
            .filter(|n| n.kind() == NodeKind::Annotation)
            .map(|n| n.position())
            .collect();
        assert_eq!(annotations, [Position::new(1, 1), Position::new(1, 16), Position::new(1, 23)]);
    }

    #[test]
    fn type_annotations_and_receivers_are_walked() {
        let unit = unit("class A { void f(@R A this, int @D [] x) { Object o = new int @N [1]; } }");
        let nodes = descendants(NodeRef::from(&unit));
        let annotations: Vec<Position> = nodes
            .iter()
            .filter(|n| n.kind() == NodeKind::Annotation)
            .map(|n| n.position())
            .collect();
        assert_eq!(annotations, [Position::new(1, 18), Position::new(1, 33), Position::new(1, 63)]);

        let receiver = nodes.iter().find(|n| n.kind() == NodeKind::ReceiverParameter).unwrap();
        assert_eq!(receiver.position(), Position::new(1, 18));
        let children: Vec<NodeKind> = receiver.children().iter().map(|n| n.kind()).collect();
        assert_eq!(children, [NodeKind::Annotation, NodeKind::ReferenceType]);
    }

    #[test]
    fn kind_categories() {
        assert!(NodeKind::MethodDeclaration.is_declaration());
        assert!(NodeKind::LocalVariableDeclaration.is_statement());
        assert!(!NodeKind::LocalVariableDeclaration.is_declaration());
        assert!(NodeKind::Lambda.is_expression());
        assert!(NodeKind::WildcardTypeArgument.is_type());
        assert_eq!(NodeKind::TernaryExpression.to_string(), "TernaryExpression");
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_name(kind.as_str()), Some(*kind));
        }
        assert_eq!(NodeKind::from_name("Nope"), None);
    }
}
