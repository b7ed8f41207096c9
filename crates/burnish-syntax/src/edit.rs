//! Text edits against a document's source.

use std::ops::Range;

use crate::error::SyntaxError;

/// Replacement of a byte range with new text.
///
/// An empty range inserts; an empty replacement deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    range: Range<usize>,
    replacement: String,
}

impl TextEdit {
    /// Creates an edit replacing `range` with `replacement`.
    #[must_use]
    pub fn replace(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Creates an edit removing `range`.
    #[must_use]
    pub const fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }

    /// Creates an edit inserting `text` at byte `offset`.
    #[must_use]
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: offset..offset,
            replacement: text.into(),
        }
    }

    /// Returns the byte range being replaced.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Checks edits against `source` and orders them back to front.
///
/// The returned order lets callers apply edits one after another without
/// shifting the offsets of edits still pending.
pub(crate) fn ordered_for_application<'e>(
    source: &str,
    edits: &'e [TextEdit],
) -> Result<Vec<&'e TextEdit>, SyntaxError> {
    for edit in edits {
        let range = edit.range();
        if range.start > range.end || range.end > source.len() {
            return Err(SyntaxError::invalid_edit(range, "range is out of bounds"));
        }
        if !source.is_char_boundary(range.start) || !source.is_char_boundary(range.end) {
            return Err(SyntaxError::invalid_edit(
                range,
                "range is not on a UTF-8 boundary",
            ));
        }
    }

    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| a.range.start.cmp(&b.range.start).then(a.range.end.cmp(&b.range.end)));
    for pair in ordered.windows(2) {
        if let [first, second] = pair {
            // Two inserts at one offset would make the result order-dependent.
            let same_point = first.range.start == second.range.start;
            if first.range.end > second.range.start || same_point {
                return Err(SyntaxError::overlapping(first.range(), second.range()));
            }
        }
    }
    ordered.reverse();
    Ok(ordered)
}
