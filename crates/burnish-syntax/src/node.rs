//! Node identity and tree navigation.
//!
//! A `tree_sitter::Node` borrows the tree it came from, so it cannot outlive
//! an edit. [`NodeHandle`] is the owned stand-in: the node kind plus its byte
//! range. Handles compare by value and are re-resolved against whatever tree
//! is current; a handle that no longer resolves is stale.

use std::fmt;
use std::ops::Range;

use tree_sitter::Node;

/// Owned, identity-comparable reference to a syntax node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    kind: &'static str,
    range: Range<usize>,
}

impl NodeHandle {
    /// Captures the identity of `node`.
    #[must_use]
    pub fn of(node: Node<'_>) -> Self {
        Self {
            kind: node.kind(),
            range: node.byte_range(),
        }
    }

    /// Returns the Tree-sitter kind of the node.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the node's byte range at the time the handle was taken.
    #[must_use]
    pub fn byte_range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Finds the node with this kind and range below `root`.
    ///
    /// Returns `None` when no such node exists in the tree any more.
    #[must_use]
    pub fn resolve<'t>(&self, root: Node<'t>) -> Option<Node<'t>> {
        let smallest = root.descendant_for_byte_range(self.range.start, self.range.end)?;
        // Several nested nodes can share a range; climb until the kind agrees.
        std::iter::successors(Some(smallest), Node::parent)
            .take_while(|node| node.byte_range() == self.range)
            .find(|node| node.kind() == self.kind)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}..{}", self.kind, self.range.start, self.range.end)
    }
}

/// Returns the source text covered by `node`.
#[must_use]
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Iterates over the strict ancestors of `node`, innermost first.
pub fn ancestors(node: Node<'_>) -> impl Iterator<Item = Node<'_>> {
    std::iter::successors(node.parent(), Node::parent)
}

/// Returns the closest strict ancestor whose kind is one of `kinds`.
#[must_use]
pub fn ancestor_of_kind<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    ancestors(node).find(|ancestor| kinds.contains(&ancestor.kind()))
}

/// Collects the named children of `node` in source order.
#[must_use]
pub fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Returns the sole named child of `node`, or `None` when there are zero or
/// several.
#[must_use]
pub fn only_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let mut children = node.named_children(&mut cursor);
    let first = children.next()?;
    children.next().is_none().then_some(first)
}

/// Returns the first child token (named or not) of `node`.
#[must_use]
pub fn first_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).next()
}

/// Reports whether `node` has a direct child of the given kind.
#[must_use]
pub fn has_child_of_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == kind)
}

/// Returns the first direct child of the given kind.
#[must_use]
pub fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|child| child.kind() == kind)
}

/// Reports whether `node` is the child stored under `field` of its parent.
#[must_use]
pub fn is_field_of_parent(node: Node<'_>, field: &str) -> bool {
    node.parent()
        .and_then(|parent| parent.child_by_field_name(field))
        .is_some_and(|child| child.id() == node.id())
}

/// Collects every named node below and including `root` in pre-order.
#[must_use]
pub fn named_descendants(root: Node<'_>) -> Vec<Node<'_>> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_named() {
            out.push(node);
        }
        let mut children = {
            let mut cursor = node.walk();
            node.children(&mut cursor).collect::<Vec<_>>()
        };
        children.reverse();
        stack.extend(children);
    }
    out
}
