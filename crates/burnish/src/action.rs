//! Deferred mutations produced by dispatch.
//!
//! An [`Action`] does not carry the rewrite computed at dispatch time. It
//! carries the rule and the node, and checks again when invoked: the tree may
//! have changed in between, and a rewrite computed against old text must
//! never be applied to new text.

use std::sync::Arc;

use burnish_diagnostics::DiagnosticsProvider;
use burnish_syntax::{Document, NodeHandle};
use tracing::debug;

use crate::access::TreeLock;
use crate::dispatcher::Dispatch;
use crate::error::RewriteError;
use crate::rewrite::Rewrite;
use crate::rule::{Rule, RuleContext};

/// Tracing target for action execution.
pub(crate) const ACTION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::action");

/// What happened when an action was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The rule still applied and its rewrite was committed.
    Applied,
    /// The node is gone or the rule no longer applies; nothing changed.
    Stale,
}

/// The deferred mutation for one dispatch.
///
/// Invoking consumes the action, so it runs at most once.
#[derive(Debug)]
pub struct Action {
    rule: Arc<dyn Rule>,
    target: NodeHandle,
}

impl Action {
    /// Creates an action applying `rule` at `target`.
    #[must_use]
    pub const fn new(rule: Arc<dyn Rule>, target: NodeHandle) -> Self {
        Self { rule, target }
    }

    /// Returns the name of the rule that will run.
    #[must_use]
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Returns the node the action targets.
    #[must_use]
    pub const fn target(&self) -> &NodeHandle {
        &self.target
    }

    /// Re-validates and applies the rewrite to a document the caller already
    /// holds exclusively.
    ///
    /// # Errors
    ///
    /// Returns an error when the rewrite cannot be applied to the document.
    pub fn invoke(
        self,
        document: &mut Document,
        provider: &dyn DiagnosticsProvider,
    ) -> Result<ActionOutcome, RewriteError> {
        let Some(rewrite) = self.revalidate(document, provider) else {
            return Ok(self.stale());
        };
        document.apply(rewrite.edits())?;
        Ok(self.applied())
    }

    /// Holds the exclusive scope across re-validation and mutation.
    ///
    /// # Errors
    ///
    /// Returns an error when the lock is poisoned or the rewrite cannot be
    /// applied.
    pub fn invoke_exclusive(
        self,
        lock: &TreeLock,
        provider: &dyn DiagnosticsProvider,
    ) -> Result<ActionOutcome, RewriteError> {
        let mut document = lock.write()?;
        self.invoke(&mut document, provider)
    }

    /// Re-validates under the shared scope and takes the exclusive scope
    /// only to commit.
    ///
    /// If another writer moved the document on in between, the action is
    /// stale.
    ///
    /// # Errors
    ///
    /// Returns an error when the lock is poisoned or the rewrite cannot be
    /// applied.
    pub fn invoke_shared(
        self,
        lock: &TreeLock,
        provider: &dyn DiagnosticsProvider,
    ) -> Result<ActionOutcome, RewriteError> {
        let (revision, rewrite) = {
            let document = lock.read()?;
            let Some(rewrite) = self.revalidate(&document, provider) else {
                return Ok(self.stale());
            };
            (document.revision(), rewrite)
        };
        let mut document = lock.write()?;
        if document.revision() != revision {
            return Ok(self.stale());
        }
        document.apply(rewrite.edits())?;
        Ok(self.applied())
    }

    fn revalidate(
        &self,
        document: &Document,
        provider: &dyn DiagnosticsProvider,
    ) -> Option<Rewrite> {
        let node = document.resolve(&self.target)?;
        let diagnostics = provider.diagnostics(document);
        let context = RuleContext::new(document.source(), &diagnostics);
        self.rule.check(node, &context)
    }

    fn applied(&self) -> ActionOutcome {
        debug!(
            target: ACTION_TARGET,
            rule = self.rule.name(),
            node = %self.target,
            "applied rewrite"
        );
        ActionOutcome::Applied
    }

    fn stale(&self) -> ActionOutcome {
        debug!(
            target: ACTION_TARGET,
            rule = self.rule.name(),
            node = %self.target,
            "action is stale"
        );
        ActionOutcome::Stale
    }
}

impl Dispatch {
    /// Runs the action under the scope it asked for.
    ///
    /// # Errors
    ///
    /// Returns an error when the lock is poisoned or the rewrite cannot be
    /// applied.
    pub fn execute(
        self,
        lock: &TreeLock,
        provider: &dyn DiagnosticsProvider,
    ) -> Result<ActionOutcome, RewriteError> {
        if self.requires_exclusive_write {
            self.action.invoke_exclusive(lock, provider)
        } else {
            self.action.invoke_shared(lock, provider)
        }
    }
}
