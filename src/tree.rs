//! Queries over a parsed compilation unit.
//!
//! [`SyntaxTree`] owns a [`CompilationUnit`] and answers the questions analysis tools usually ask
//! first: which nodes of a given kind exist, which of them are outermost or innermost, and what the
//! overall shape of the tree is.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use jparse::visit::NodeKind;
//! use jparse::{SearchFilter, SyntaxTree};
//!
//! let tree = SyntaxTree::parse("class A { class B { void f() {} } }").unwrap();
//! let outer = tree.find_nodes(&[NodeKind::ClassDeclaration], SearchFilter::TopLevel);
//! assert_eq!(outer.len(), 1);
//! assert_eq!(outer[0].name(), Some("A"));
//! ```

use std::fmt;

use crate::ast::CompilationUnit;
use crate::visit::{self, NodeKind, NodeRef, Visit};
use crate::Error;

/// Which of the matching nodes a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    /// Every matching node, in pre-order.
    #[default]
    All,
    /// Matching nodes that are not nested inside another matching node, in pre-order.
    ///
    /// With no kinds given, this is just the root.
    TopLevel,
    /// Matching nodes that contain no other matching node, in the order they are left.
    BottomLevel,
}

/// A parsed compilation unit with query helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    unit: CompilationUnit,
}

impl SyntaxTree {
    pub fn new(unit: CompilationUnit) -> Self {
        Self { unit }
    }

    /// Tokenize and parse `source` into a tree.
    ///
    /// ## Errors
    /// Same as [`crate::parse_source`].
    pub fn parse(source: &str) -> Result<Self, Error> {
        crate::parse_source(source).map(Self::new)
    }

    pub fn unit(&self) -> &CompilationUnit {
        &self.unit
    }

    pub fn into_unit(self) -> CompilationUnit {
        self.unit
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::from(&self.unit)
    }

    /// Every node in pre-order, the root first.
    pub fn nodes(&self) -> Vec<NodeRef<'_>> {
        visit::descendants(self.root())
    }

    /// Nodes whose kind is one of `kinds` (any kind when `kinds` is empty), narrowed by `filter`.
    pub fn find_nodes(&self, kinds: &[NodeKind], filter: SearchFilter) -> Vec<NodeRef<'_>> {
        find_nodes(self.root(), kinds, filter)
    }

    /// Depth-first walk of the whole tree; see [`visit::walk`].
    pub fn traverse<'a>(&'a self, mut on_enter: impl FnMut(NodeRef<'a>), mut on_leave: impl FnMut(NodeRef<'a>)) {
        visit::walk(self.root(), &mut on_enter, &mut on_leave);
    }
}

impl From<CompilationUnit> for SyntaxTree {
    fn from(unit: CompilationUnit) -> Self {
        Self::new(unit)
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&outline(self.root()))
    }
}

/// [`SyntaxTree::find_nodes`] for any subtree.
pub fn find_nodes<'a>(root: NodeRef<'a>, kinds: &[NodeKind], filter: SearchFilter) -> Vec<NodeRef<'a>> {
    let matches = |node: &NodeRef<'_>| kinds.is_empty() || kinds.contains(&node.kind());
    match filter {
        SearchFilter::All => visit::descendants(root).into_iter().filter(matches).collect(),
        SearchFilter::TopLevel if kinds.is_empty() => vec![root],
        SearchFilter::TopLevel => top_level(root, matches),
        SearchFilter::BottomLevel => bottom_level(root, matches),
    }
}

fn top_level<'a>(root: NodeRef<'a>, matches: impl Fn(&NodeRef<'a>) -> bool) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut depth = 0usize;
    // Depth of the match currently enclosing the walk.
    let mut open: Option<usize> = None;
    visit::walk_events(root, &mut |step| match step {
        Visit::Enter(node) => {
            depth += 1;
            if open.is_none() && matches(&node) {
                found.push(node);
                open = Some(depth);
            }
        }
        Visit::Leave(_) => {
            if open == Some(depth) {
                open = None;
            }
            depth -= 1;
        }
    });
    found
}

fn bottom_level<'a>(root: NodeRef<'a>, matches: impl Fn(&NodeRef<'a>) -> bool) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    // One entry per open match: whether a match was seen below it.
    let mut open: Vec<bool> = Vec::new();
    visit::walk_events(root, &mut |step| match step {
        Visit::Enter(node) if matches(&node) => open.push(false),
        Visit::Leave(node) if matches(&node) => {
            if open.pop() == Some(false) {
                found.push(node);
            }
            if let Some(parent) = open.last_mut() {
                *parent = true;
            }
        }
        _ => {}
    });
    found
}

/// Indented outline of the subtree at `root`, one node per line.
///
/// Each line is `|   ` per level of depth, the node kind, the declared name if any, and the line
/// number.
pub fn outline(root: NodeRef<'_>) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    visit::walk_events(root, &mut |step| match step {
        Visit::Enter(node) => {
            out.push_str(&"|   ".repeat(depth));
            out.push_str(node.kind().as_str());
            if let Some(name) = node.name() {
                out.push_str(": ");
                out.push_str(name);
            }
            out.push_str(&format!(", line = {}\n", node.position().line));
            depth += 1;
        }
        Visit::Leave(_) => depth -= 1,
    });
    out
}
