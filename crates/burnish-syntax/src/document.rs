//! Mutable source document backed by an incrementally maintained tree.
//!
//! A [`Document`] owns the source text and its Tree-sitter tree. The only way
//! to change it is [`Document::apply`], which validates a batch of edits,
//! splices them into the text, tells the old tree about each edit, and
//! reparses incrementally. Every successful apply bumps the revision.

use std::sync::atomic::{AtomicU64, Ordering};

use tree_sitter::{InputEdit, Node, Tree};

use crate::edit::{TextEdit, ordered_for_application};
use crate::error::SyntaxError;
use crate::node::{NodeHandle, named_descendants, node_text};
use crate::parser::{Parser, SyntaxErrorInfo, collect_errors, has_error_nodes};
use crate::position::point_at;

static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Parsed Rust source that can be edited in place.
#[derive(Debug)]
pub struct Document {
    id: u64,
    revision: u64,
    source: String,
    tree: Tree,
}

impl Document {
    /// Parses `source` into a new document at revision zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be created or yields no tree.
    pub fn parse(source: impl Into<String>) -> Result<Self, SyntaxError> {
        let text = source.into();
        let tree = Parser::new()?.parse(&text)?;
        Ok(Self {
            id: NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed),
            revision: 0,
            source: text,
            tree,
        })
    }

    /// Returns an identifier unique to this document within the process.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns how many edit batches have been applied.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the current source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Consumes the document and returns its source text.
    #[must_use]
    pub fn into_source(self) -> String {
        self.source
    }

    /// Returns the current syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the root node of the current tree.
    #[must_use]
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the text covered by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(node, &self.source)
    }

    /// Resolves a handle against the current tree.
    #[must_use]
    pub fn resolve(&self, handle: &NodeHandle) -> Option<Node<'_>> {
        handle.resolve(self.tree.root_node())
    }

    /// Returns handles to every named node in pre-order.
    #[must_use]
    pub fn handles(&self) -> Vec<NodeHandle> {
        named_descendants(self.tree.root_node())
            .into_iter()
            .map(NodeHandle::of)
            .collect()
    }

    /// Returns whether the current tree contains syntax errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        has_error_nodes(self.tree.root_node())
    }

    /// Collects the syntax errors in the current tree.
    #[must_use]
    pub fn errors(&self) -> Vec<SyntaxErrorInfo> {
        collect_errors(self.tree.root_node(), &self.source)
    }

    /// Applies a batch of edits atomically.
    ///
    /// All edits are interpreted against the current text. They are checked
    /// for bounds, UTF-8 boundaries and overlap before anything changes; on
    /// error the document is left untouched. An empty batch is a no-op that
    /// does not bump the revision.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid or overlapping edits, or when the
    /// reparse fails.
    pub fn apply(&mut self, edits: &[TextEdit]) -> Result<(), SyntaxError> {
        if edits.is_empty() {
            return Ok(());
        }
        let ordered = ordered_for_application(&self.source, edits)?;

        let mut source = self.source.clone();
        let mut tree = self.tree.clone();
        for edit in ordered {
            let range = edit.range();
            let start_position = point_at(&source, range.start);
            let old_end_position = point_at(&source, range.end);
            source.replace_range(range.clone(), edit.replacement());
            let new_end_byte = range.start.saturating_add(edit.replacement().len());
            tree.edit(&InputEdit {
                start_byte: range.start,
                old_end_byte: range.end,
                new_end_byte,
                start_position,
                old_end_position,
                new_end_position: point_at(&source, new_end_byte),
            });
        }

        let reparsed = Parser::new()?.reparse(&source, Some(&tree))?;
        self.source = source;
        self.tree = reparsed;
        self.revision = self.revision.saturating_add(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'d>(doc: &'d Document, kind: &str) -> Node<'d> {
        named_descendants(doc.root_node())
            .into_iter()
            .find(|n| n.kind() == kind)
            .unwrap_or_else(|| panic!("no {kind} node"))
    }

    #[test]
    fn apply_splices_text_and_reparses() {
        let mut doc = Document::parse("fn main() { let x = (1); }").expect("parse");
        let paren = find(&doc, "parenthesized_expression");
        let edit = TextEdit::replace(paren.byte_range(), "1");

        doc.apply(&[edit]).expect("apply");

        assert_eq!(doc.source(), "fn main() { let x = 1; }");
        assert_eq!(doc.revision(), 1);
        assert!(!doc.has_errors());
        assert_eq!(doc.text(find(&doc, "integer_literal")), "1");
    }

    #[test]
    fn apply_handles_multiple_edits_in_any_order() {
        let mut doc = Document::parse("fn a() {}\nfn b() {}\n").expect("parse");
        let edits = vec![
            TextEdit::replace(3..4, "first"),
            TextEdit::replace(13..14, "second"),
        ];

        doc.apply(&edits).expect("apply");

        assert_eq!(doc.source(), "fn first() {}\nfn second() {}\n");
        let names: Vec<_> = named_descendants(doc.root_node())
            .into_iter()
            .filter(|n| n.kind() == "identifier")
            .map(|n| doc.text(n).to_owned())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn rejected_edit_leaves_document_untouched() {
        let mut doc = Document::parse("fn main() {}").expect("parse");

        let result = doc.apply(&[TextEdit::delete(0..100)]);

        assert!(result.is_err());
        assert_eq!(doc.source(), "fn main() {}");
        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn empty_batch_keeps_revision() {
        let mut doc = Document::parse("fn main() {}").expect("parse");

        doc.apply(&[]).expect("apply");

        assert_eq!(doc.revision(), 0);
    }

    #[test]
    fn stale_handle_stops_resolving_after_edit() {
        let mut doc = Document::parse("fn main() { let x = (1); }").expect("parse");
        let handle = NodeHandle::of(find(&doc, "parenthesized_expression"));
        let range = handle.byte_range();

        doc.apply(&[TextEdit::replace(range, "1")]).expect("apply");

        assert!(doc.resolve(&handle).is_none());
    }

    #[test]
    fn documents_have_distinct_ids() {
        let first = Document::parse("").expect("parse");
        let second = Document::parse("").expect("parse");

        assert_ne!(first.id(), second.id());
    }
}
