//! Diagnostics attached to syntax nodes.

use std::collections::HashMap;
use std::fmt;

use burnish_syntax::{Node, NodeHandle};

use crate::tag::DiagnosticTag;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The code does not compile as written.
    Error,
    /// The code compiles but is not idiomatic.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A classified fact about one syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    tag: DiagnosticTag,
    node: NodeHandle,
    severity: Severity,
    message: String,
}

impl Diagnostic {
    /// Creates a diagnostic attached to `node`.
    #[must_use]
    pub fn new(
        tag: DiagnosticTag,
        node: NodeHandle,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            tag,
            node,
            severity,
            message: message.into(),
        }
    }

    /// Returns the classification tag.
    #[must_use]
    pub const fn tag(&self) -> DiagnosticTag {
        self.tag
    }

    /// Returns the node the diagnostic applies to.
    #[must_use]
    pub const fn node(&self) -> &NodeHandle {
        &self.node
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// All diagnostics for one document revision, indexed by node.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSet {
    ordered: Vec<Diagnostic>,
    by_node: HashMap<NodeHandle, Vec<usize>>,
}

impl DiagnosticSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let index = self.ordered.len();
        self.by_node
            .entry(diagnostic.node.clone())
            .or_default()
            .push(index);
        self.ordered.push(diagnostic);
    }

    /// Returns the diagnostics attached to `node` in insertion order.
    pub fn for_node(&self, node: &NodeHandle) -> impl Iterator<Item = &Diagnostic> {
        self.by_node
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(|index| self.ordered.get(*index))
    }

    /// Returns the first diagnostic on `node` whose tag is one of `tags`.
    #[must_use]
    pub fn first_matching(&self, node: Node<'_>, tags: &[DiagnosticTag]) -> Option<&Diagnostic> {
        self.for_node(&NodeHandle::of(node))
            .find(|diagnostic| tags.contains(&diagnostic.tag))
    }

    /// Iterates over every diagnostic in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.ordered.iter()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` when the set holds no diagnostics.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl FromIterator<Diagnostic> for DiagnosticSet {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        let mut set = Self::new();
        for diagnostic in iter {
            set.push(diagnostic);
        }
        set
    }
}
