//! Planned mutations.

use std::ops::Range;

use burnish_syntax::{Node, TextEdit};

/// The edits a rule wants to make, computed from the tree at check time.
///
/// A rewrite always holds at least one edit; every constructor starts with
/// one. Edits are interpreted against the text the rule inspected and are
/// applied together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    edits: Vec<TextEdit>,
}

impl Rewrite {
    /// Replaces the text of `node` with `replacement`.
    #[must_use]
    pub fn replace(node: Node<'_>, replacement: impl Into<String>) -> Self {
        Self::from_edit(TextEdit::replace(node.byte_range(), replacement))
    }

    /// Replaces an arbitrary byte range.
    #[must_use]
    pub fn replace_range(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self::from_edit(TextEdit::replace(range, replacement))
    }

    /// Inserts `text` at `offset`.
    #[must_use]
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::from_edit(TextEdit::insert(offset, text))
    }

    /// Deletes `node` together with the spaces that follow it on its line.
    ///
    /// Used for keyword-like tokens such as `pub` or `mut`.
    #[must_use]
    pub fn delete_token(node: Node<'_>, source: &str) -> Self {
        let end = node.end_byte();
        let trailing = source
            .get(end..)
            .map_or(0, |rest| rest.len() - rest.trim_start_matches([' ', '\t']).len());
        Self::from_edit(TextEdit::delete(node.start_byte()..end + trailing))
    }

    /// Adds a further edit.
    #[must_use]
    pub fn and(mut self, edit: TextEdit) -> Self {
        self.edits.push(edit);
        self
    }

    /// Returns the edits.
    #[must_use]
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    fn from_edit(edit: TextEdit) -> Self {
        Self { edits: vec![edit] }
    }
}
