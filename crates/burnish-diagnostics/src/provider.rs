//! The seam through which rules obtain diagnostics.

use std::sync::{Arc, Mutex, PoisonError};

use burnish_syntax::Document;

use crate::diagnostic::DiagnosticSet;

/// Produces the diagnostics for a document revision.
///
/// Implementations must be pure with respect to the document: two calls for
/// the same revision return equivalent sets.
pub trait DiagnosticsProvider: Send + Sync {
    /// Computes (or fetches) the diagnostics for `document`.
    fn diagnostics(&self, document: &Document) -> Arc<DiagnosticSet>;
}

/// Provider that returns the same set for every document.
///
/// Useful for hosts that compute diagnostics elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedDiagnostics {
    set: Arc<DiagnosticSet>,
}

impl FixedDiagnostics {
    /// Wraps a precomputed set.
    #[must_use]
    pub fn new(set: DiagnosticSet) -> Self {
        Self { set: Arc::new(set) }
    }

    /// A provider that never reports anything.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl DiagnosticsProvider for FixedDiagnostics {
    fn diagnostics(&self, _document: &Document) -> Arc<DiagnosticSet> {
        Arc::clone(&self.set)
    }
}

type CacheKey = (u64, u64);

/// Memoises another provider per document revision.
///
/// Only the most recent `(document id, revision)` is kept. A rewrite pass
/// asks for diagnostics once per visited node, and the answer only changes
/// when the document does.
#[derive(Debug)]
pub struct RevisionCache<P> {
    inner: P,
    last: Mutex<Option<(CacheKey, Arc<DiagnosticSet>)>>,
}

impl<P: DiagnosticsProvider> RevisionCache<P> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: P) -> Self {
        Self {
            inner,
            last: Mutex::new(None),
        }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: DiagnosticsProvider> DiagnosticsProvider for RevisionCache<P> {
    fn diagnostics(&self, document: &Document) -> Arc<DiagnosticSet> {
        let key = (document.id(), document.revision());
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_key, set)) = last.as_ref()
            && *cached_key == key
        {
            return Arc::clone(set);
        }
        let set = self.inner.diagnostics(document);
        *last = Some((key, Arc::clone(&set)));
        set
    }
}
