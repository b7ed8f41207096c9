//! Built-in syntactic analyser for Rust sources.
//!
//! The analyser walks the tree once per revision and records tagged facts
//! that diagnostic-gated rules key on. Each check is conservative: when a
//! fact cannot be established from the syntax alone, nothing is reported.

mod casts;
mod mutability;
mod unwrap;

use std::sync::Arc;

use burnish_syntax::{Document, Node, NodeHandle, named_descendants};
use tracing::debug;

use crate::diagnostic::{Diagnostic, DiagnosticSet, Severity};
use crate::provider::DiagnosticsProvider;
use crate::tag::DiagnosticTag;

/// Default [`DiagnosticsProvider`] for Rust documents.
///
/// # Example
///
/// ```
/// use burnish_diagnostics::{Analyzer, DiagnosticsProvider, tags};
/// use burnish_syntax::Document;
///
/// let doc = Document::parse("fn f() { let a = 1u8 as u8; }")?;
/// let set = Analyzer::new().diagnostics(&doc);
/// assert!(set.iter().any(|d| d.tag() == tags::USELESS_CAST));
/// # Ok::<(), burnish_syntax::SyntaxError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer;

impl Analyzer {
    /// Creates the analyser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs every check over `document`.
    #[must_use]
    pub fn analyze(&self, document: &Document) -> DiagnosticSet {
        let mut sink = Sink {
            source: document.source(),
            set: DiagnosticSet::new(),
        };
        for node in named_descendants(document.root_node()) {
            match node.kind() {
                "type_cast_expression" => casts::check_cast(node, &mut sink),
                "assignment_expression" | "compound_assignment_expr" => {
                    mutability::check_assignment(node, &mut sink);
                }
                "reference_expression" => mutability::check_mut_borrow(node, &mut sink),
                "let_declaration" => mutability::check_unused_mut(node, &mut sink),
                "call_expression" => unwrap::check_unwrap(node, &mut sink),
                _ => {}
            }
        }
        debug!(
            document = document.id(),
            revision = document.revision(),
            count = sink.set.len(),
            "analysed document"
        );
        sink.set
    }
}

impl DiagnosticsProvider for Analyzer {
    fn diagnostics(&self, document: &Document) -> Arc<DiagnosticSet> {
        Arc::new(self.analyze(document))
    }
}

/// Collects diagnostics while the checks run.
struct Sink<'s> {
    source: &'s str,
    set: DiagnosticSet,
}

impl<'s> Sink<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        burnish_syntax::node_text(node, self.source)
    }

    fn report(
        &mut self,
        tag: DiagnosticTag,
        node: Node<'_>,
        severity: Severity,
        message: impl Into<String>,
    ) {
        self.set
            .push(Diagnostic::new(tag, NodeHandle::of(node), severity, message));
    }
}
