//! Diagnostic classification tags.
//!
//! A tag names the kind of fact a diagnostic records. Rules only ever test
//! tags for membership in a fixed set, so a tag is an opaque string key
//! rather than an exhaustive catalogue.

use std::fmt;

/// Opaque classification key of a [`Diagnostic`](crate::Diagnostic).
///
/// # Example
///
/// ```
/// use burnish_diagnostics::{DiagnosticTag, tags};
///
/// assert_eq!(tags::USELESS_CAST.as_str(), "USELESS_CAST");
/// assert_eq!(DiagnosticTag::new("CUSTOM").to_string(), "CUSTOM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagnosticTag(&'static str);

impl DiagnosticTag {
    /// Creates a tag from its key.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Returns the tag key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DiagnosticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Tags produced by the built-in [`Analyzer`](crate::Analyzer).
pub mod tags {
    use super::DiagnosticTag;

    /// A cast to the type the expression already has.
    pub const USELESS_CAST: DiagnosticTag = DiagnosticTag::new("USELESS_CAST");
    /// Assignment to an immutable binding or to a `const`/`static` item.
    pub const VAL_REASSIGNMENT: DiagnosticTag = DiagnosticTag::new("VAL_REASSIGNMENT");
    /// `&mut` borrow of an immutable binding.
    pub const MUT_BORROW_OF_IMMUTABLE: DiagnosticTag =
        DiagnosticTag::new("MUT_BORROW_OF_IMMUTABLE");
    /// A `mut` binding that is never mutated.
    pub const UNUSED_MUT: DiagnosticTag = DiagnosticTag::new("UNUSED_MUT");
    /// `unwrap`/`expect` on a value built with `Some(..)` or `Ok(..)`.
    pub const UNNECESSARY_UNWRAP: DiagnosticTag = DiagnosticTag::new("UNNECESSARY_UNWRAP");
}
