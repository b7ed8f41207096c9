//! Syntactic validation of rewritten documents.
//!
//! [`SyntacticLock`] compares a rewritten document with the source it started
//! from. Input that was already broken is tolerated, since Tree-sitter is
//! error tolerant and rules may still tidy the parts that parse; what the lock
//! refuses is a rewrite that introduces new syntax errors.

use std::fmt;

use crate::document::Document;
use crate::parser::SyntaxErrorInfo;

/// Guards against rewrites that break the syntax of a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntacticLock;

impl SyntacticLock {
    /// Creates a syntactic lock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates `rewritten` against the `original_errors` of its input.
    ///
    /// Returns the syntax errors of the rewritten document when it has more
    /// of them than the original had. An empty list means the rewrite is
    /// acceptable.
    #[must_use]
    pub fn verify(
        &self,
        original_errors: &[SyntaxErrorInfo],
        rewritten: &Document,
    ) -> Vec<ValidationFailure> {
        let errors = rewritten.errors();
        if errors.len() <= original_errors.len() {
            return Vec::new();
        }

        errors
            .into_iter()
            .map(|e| ValidationFailure {
                line: e.line,
                column: e.column,
                message: e.message,
            })
            .collect()
    }

    /// Validates a standalone source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser cannot be initialised.
    pub fn validate_source(
        &self,
        source: &str,
    ) -> Result<Vec<ValidationFailure>, crate::SyntaxError> {
        let document = Document::parse(source)?;
        Ok(self.verify(&[], &document))
    }
}

/// A validation failure from the syntactic lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Line number (one-based).
    pub line: u32,
    /// Column number (one-based).
    pub column: u32,
    /// Human-readable description of the problem.
    pub message: String,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}
