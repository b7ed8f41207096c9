//! Scoped write access to a document.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use burnish_syntax::Document;

use crate::error::RewriteError;

/// A document behind a read/write lock.
///
/// Walking and dispatching take the shared scope; mutation takes the
/// exclusive one. Guards release on drop, including during unwinding. A lock
/// poisoned by a panic reports [`RewriteError::LockPoisoned`] rather than
/// blocking.
#[derive(Debug)]
pub struct TreeLock {
    document: RwLock<Document>,
}

impl TreeLock {
    /// Places `document` behind the lock.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Acquires the shared scope.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::LockPoisoned`] if a writer panicked.
    pub fn read(&self) -> Result<RwLockReadGuard<'_, Document>, RewriteError> {
        self.document.read().map_err(|_| RewriteError::LockPoisoned)
    }

    /// Acquires the exclusive write scope.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::LockPoisoned`] if a writer panicked.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Document>, RewriteError> {
        self.document.write().map_err(|_| RewriteError::LockPoisoned)
    }

    /// Releases the document.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::LockPoisoned`] if a writer panicked.
    pub fn into_inner(self) -> Result<Document, RewriteError> {
        self.document
            .into_inner()
            .map_err(|_| RewriteError::LockPoisoned)
    }
}
