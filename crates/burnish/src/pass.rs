//! Whole-tree rewrite passes.
//!
//! A sweep visits every named node in reverse pre-order. Edits then only
//! move text after nodes that are still waiting to be visited, so their
//! handles stay valid. A node whose range changed under an earlier edit is
//! skipped; the next sweep sees the new tree. Sweeps repeat until one applies
//! nothing or the pass limit is reached.

use std::sync::Arc;

use burnish_diagnostics::{Analyzer, DiagnosticsProvider, RevisionCache};
use burnish_syntax::{Document, SyntacticLock, point_to_one_based};
use tracing::{debug, info};

use crate::access::TreeLock;
use crate::action::ActionOutcome;
use crate::dispatcher::RuleDispatcher;
use crate::error::RewriteError;
use crate::rule::RuleContext;

/// Tracing target for pass execution.
pub(crate) const PASS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::pass");

/// Sweep limit used when none is configured.
pub const DEFAULT_MAX_PASSES: u32 = 8;

/// Where a rule fired, or would fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// The rule's name.
    pub rule: &'static str,
    /// One-based line of the node's start.
    pub line: u32,
    /// One-based column of the node's start.
    pub column: u32,
}

/// Outcome of [`RewritePass::run`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Rewrites that were applied, in application order.
    pub applied: Vec<RuleHit>,
    /// Actions that found their rule no longer applied.
    pub stale: usize,
    /// Number of sweeps performed.
    pub passes: u32,
    /// Whether the last sweep applied nothing.
    pub converged: bool,
    /// The rewritten source.
    pub output: String,
}

impl PassReport {
    /// Returns whether any rewrite was applied.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Drives a [`RuleDispatcher`] over whole documents.
pub struct RewritePass {
    dispatcher: RuleDispatcher,
    provider: Arc<dyn DiagnosticsProvider>,
    max_passes: u32,
}

impl std::fmt::Debug for RewritePass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewritePass")
            .field("dispatcher", &self.dispatcher)
            .field("max_passes", &self.max_passes)
            .finish_non_exhaustive()
    }
}

impl RewritePass {
    /// Creates a pass using the built-in [`Analyzer`] for diagnostics.
    #[must_use]
    pub fn new(dispatcher: RuleDispatcher) -> Self {
        Self {
            dispatcher,
            provider: Arc::new(RevisionCache::new(Analyzer::new())),
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Replaces the diagnostics provider. Results are cached per revision.
    #[must_use]
    pub fn with_provider(mut self, provider: impl DiagnosticsProvider + 'static) -> Self {
        self.provider = Arc::new(RevisionCache::new(provider));
        self
    }

    /// Sets the sweep limit. A limit of zero is treated as one.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Rewrites `source` until no rule applies or the sweep limit is hit.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed, a rewrite cannot be
    /// applied, or the result has syntax errors the input did not have.
    pub fn run(&self, source: &str) -> Result<PassReport, RewriteError> {
        let parsed = Document::parse(source)?;
        let original_errors = parsed.errors();
        let lock = TreeLock::new(parsed);
        let mut report = PassReport::default();

        while report.passes < self.max_passes {
            report.passes += 1;
            let before = report.applied.len();
            self.sweep(&lock, &mut report)?;
            let applied = report.applied.len() - before;
            info!(
                target: PASS_TARGET,
                pass = report.passes,
                applied,
                stale = report.stale,
                "sweep complete"
            );
            if applied == 0 {
                report.converged = true;
                break;
            }
        }

        let document = lock.into_inner()?;
        let failures = SyntacticLock::new().verify(&original_errors, &document);
        if !failures.is_empty() {
            return Err(RewriteError::broken_syntax(failures));
        }
        report.output = document.into_source();
        Ok(report)
    }

    /// Lists where rules match `source` without changing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed.
    pub fn plan(&self, source: &str) -> Result<Vec<RuleHit>, RewriteError> {
        let document = Document::parse(source)?;
        let diagnostics = self.provider.diagnostics(&document);
        let context = RuleContext::new(document.source(), &diagnostics);
        let mut hits = Vec::new();
        for handle in document.handles() {
            let Some(node) = document.resolve(&handle) else {
                continue;
            };
            if let Some(dispatch) = self.dispatcher.dispatch(node, &context) {
                let (line, column) = point_to_one_based(node.start_position());
                hits.push(RuleHit {
                    rule: dispatch.action.rule_name(),
                    line,
                    column,
                });
            }
        }
        Ok(hits)
    }

    fn sweep(&self, lock: &TreeLock, report: &mut PassReport) -> Result<(), RewriteError> {
        let handles = lock.read()?.handles();
        for handle in handles.into_iter().rev() {
            let (dispatch, (line, column)) = {
                let document = lock.read()?;
                let Some(node) = document.resolve(&handle) else {
                    continue;
                };
                let diagnostics = self.provider.diagnostics(&document);
                let context = RuleContext::new(document.source(), &diagnostics);
                let Some(matched) = self.dispatcher.dispatch(node, &context) else {
                    continue;
                };
                (matched, point_to_one_based(node.start_position()))
            };
            let rule = dispatch.action.rule_name();
            match dispatch.execute(lock, self.provider.as_ref())? {
                ActionOutcome::Applied => report.applied.push(RuleHit { rule, line, column }),
                ActionOutcome::Stale => {
                    debug!(target: PASS_TARGET, rule, line, column, "skipped stale action");
                    report.stale += 1;
                }
            }
        }
        Ok(())
    }
}
