//! Rule dispatch and rewriting for Rust sources.
//!
//! An ordered list of rewrite rules is matched against syntax nodes; the
//! first rule that applies wins and yields a deferred [`Action`]. Invoking
//! the action re-checks the rule against the current tree and only then
//! mutates it, under the write scope the rule asked for.
//!
//! - [`Rule`] with the [`StructuralRule`] and [`DiagnosticRule`] strategies
//! - [`RuleDispatcher`]: first-match dispatch over an ordered rule list
//! - [`Action`] and [`TreeLock`]: deferred, re-validated, scoped mutation
//! - [`registry`]: the process-wide table of built-in rules
//! - [`RewritePass`]: repeated whole-tree sweeps up to a fixpoint
//!
//! # Example
//!
//! ```
//! use burnish::{RewritePass, registry};
//!
//! let dispatcher = registry().dispatcher::<&str>(&[])?;
//! let report = RewritePass::new(dispatcher).run("fn main() -> () { let a = (1); }")?;
//! assert_eq!(report.output, "fn main() { let a = 1; }");
//! # Ok::<(), burnish::RewriteError>(())
//! ```

mod access;
mod action;
mod dispatcher;
mod error;
mod pass;
mod registry;
mod rewrite;
mod rule;
mod rules;

pub use access::TreeLock;
pub use action::{Action, ActionOutcome};
pub use dispatcher::{Dispatch, RuleDispatcher};
pub use error::RewriteError;
pub use pass::{DEFAULT_MAX_PASSES, PassReport, RewritePass, RuleHit};
pub use registry::{RuleInfo, RuleRegistry, registry};
pub use rewrite::Rewrite;
pub use rule::{
    DiagnosticRule, GatedFix, Rule, RuleContext, Strategy, StructuralCheck, StructuralRule,
};

#[cfg(test)]
mod tests;
