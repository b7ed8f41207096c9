//! Error types for dispatching and applying rewrites.

use burnish_syntax::{SyntaxError, ValidationFailure};
use thiserror::Error;

/// Errors surfaced while running rules over a document.
///
/// A rule that no longer matches is not an error: see
/// [`ActionOutcome::Stale`](crate::ActionOutcome::Stale).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RewriteError {
    /// Parsing or editing the document failed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A thread panicked while holding the document lock.
    #[error("document lock poisoned by a panicking rewrite")]
    LockPoisoned,

    /// A rule name does not appear in the registry.
    #[error("unknown rule: {name}")]
    UnknownRule {
        /// The name that failed to resolve.
        name: String,
    },

    /// The rewritten source has syntax errors the input did not have.
    #[error("rewrite introduced {} syntax error(s): {}", .failures.len(), render(.failures))]
    BrokenSyntax {
        /// The syntax errors of the rewritten source.
        failures: Vec<ValidationFailure>,
    },
}

impl RewriteError {
    /// Creates an unknown rule error.
    #[must_use]
    pub fn unknown_rule(name: impl Into<String>) -> Self {
        Self::UnknownRule { name: name.into() }
    }

    /// Creates a broken syntax error.
    #[must_use]
    pub const fn broken_syntax(failures: Vec<ValidationFailure>) -> Self {
        Self::BrokenSyntax { failures }
    }
}

fn render(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
