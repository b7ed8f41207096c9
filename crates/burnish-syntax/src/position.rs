//! Shared position conversion helpers.
//!
//! Tree-sitter positions are zero-based rows and byte columns. For user-facing
//! messages, we prefer one-based line and column numbers.

use tree_sitter::Point;

/// Converts a Tree-sitter position (0-based) to one-based display coordinates.
#[must_use]
pub fn point_to_one_based(pos: Point) -> (u32, u32) {
    // Line/column numbers will realistically never exceed u32::MAX.
    let line = u32::try_from(pos.row.saturating_add(1)).unwrap_or(u32::MAX);
    let column = u32::try_from(pos.column.saturating_add(1)).unwrap_or(u32::MAX);
    (line, column)
}

/// Computes the Tree-sitter point for a byte offset in `source`.
///
/// Offsets past the end clamp to the end of the text.
pub(crate) fn point_at(source: &str, byte: usize) -> Point {
    let prefix = source.as_bytes().get(..byte).unwrap_or(source.as_bytes());
    let row = prefix.iter().filter(|b| **b == b'\n').count();
    let column = prefix
        .iter()
        .rposition(|b| *b == b'\n')
        .map_or(prefix.len(), |newline| {
            prefix.len().saturating_sub(newline.saturating_add(1))
        });
    Point { row, column }
}
