//! Tree-sitter powered syntax layer for the Burnish rewrite engine.
//!
//! This crate provides everything the rewrite engine needs to know about
//! source trees:
//!
//! - **Parsing** via [`Parser`], an error-tolerant wrapper around the Rust
//!   grammar
//! - **Editable documents** via [`Document`], which applies batches of
//!   [`TextEdit`]s and reparses incrementally
//! - **Node identity** via [`NodeHandle`], an owned handle that survives
//!   edits and is re-resolved against the current tree
//! - **Navigation** helpers such as [`ancestor_of_kind`] and
//!   [`only_named_child`]
//! - **Syntactic validation** via [`SyntacticLock`], which rejects rewrites
//!   that introduce syntax errors
//!
//! # Example
//!
//! ```
//! use burnish_syntax::{Document, NodeHandle, TextEdit};
//!
//! let mut doc = Document::parse("fn main() { let x = (1); }")?;
//! let handle = doc.handles()
//!     .into_iter()
//!     .find(|h| h.kind() == "parenthesized_expression")
//!     .expect("parenthesized expression");
//!
//! doc.apply(&[TextEdit::replace(handle.byte_range(), "1")])?;
//! assert_eq!(doc.source(), "fn main() { let x = 1; }");
//! assert!(doc.resolve(&handle).is_none());
//! # Ok::<(), burnish_syntax::SyntaxError>(())
//! ```

mod document;
mod edit;
mod error;
mod node;
mod parser;
mod position;
mod syntactic_lock;

pub use document::Document;
pub use edit::TextEdit;
pub use error::SyntaxError;
pub use node::{
    NodeHandle, ancestor_of_kind, ancestors, child_of_kind, first_child, has_child_of_kind,
    is_field_of_parent, named_children, named_descendants, node_text, only_named_child,
};
pub use parser::{Parser, SyntaxErrorInfo};
pub use position::point_to_one_based;
pub use syntactic_lock::{SyntacticLock, ValidationFailure};

/// Re-export of the Tree-sitter node type the rest of the workspace matches on.
pub use tree_sitter::Node;

/// File extensions handled by the Rust grammar.
pub const RUST_EXTENSIONS: &[&str] = &["rs"];

/// Reports whether a path names a Rust source file.
#[must_use]
pub fn is_rust_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RUST_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests;
