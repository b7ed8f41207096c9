//! Error types for parsing and editing documents.
//!
//! Every fallible operation in `burnish-syntax` reports a [`SyntaxError`].
//! Rewrites are validated before a document is touched, so an error never
//! leaves a half-applied edit behind.

use std::ops::Range;

use thiserror::Error;

/// Errors from parsing and editing operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// Failed to initialise the Tree-sitter parser.
    #[error("failed to initialise Rust parser: {message}")]
    ParserInitError {
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a syntax tree.
    #[error("failed to parse source: {message}")]
    ParseError {
        /// Description of the failure.
        message: String,
    },

    /// A text edit does not fit the document it was applied to.
    #[error("invalid edit at {}..{}: {message}", .range.start, .range.end)]
    InvalidEdit {
        /// Byte range of the rejected edit.
        range: Range<usize>,
        /// Why the edit was rejected.
        message: String,
    },

    /// Two edits of one rewrite touch the same bytes.
    #[error("overlapping edits at {}..{} and {}..{}", .first.start, .first.end, .second.start, .second.end)]
    OverlappingEdits {
        /// The earlier edit's range.
        first: Range<usize>,
        /// The later edit's range.
        second: Range<usize>,
    },
}

impl SyntaxError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(message: impl Into<String>) -> Self {
        Self::ParserInitError {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Creates an invalid edit error.
    #[must_use]
    pub fn invalid_edit(range: Range<usize>, message: impl Into<String>) -> Self {
        Self::InvalidEdit {
            range,
            message: message.into(),
        }
    }

    /// Creates an overlapping edits error.
    #[must_use]
    pub const fn overlapping(first: Range<usize>, second: Range<usize>) -> Self {
        Self::OverlappingEdits { first, second }
    }
}
