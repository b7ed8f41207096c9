//! The rule capability and its three strategies.
//!
//! Every rule answers one question through [`Rule::check`]: given a node and
//! the diagnostics of the current revision, is there a rewrite to make? The
//! strategies differ only in how they reach the answer:
//!
//! - [`StructuralRule`] matches node kinds and tree shape, and never looks at
//!   diagnostics.
//! - [`DiagnosticRule`] with [`GatedFix::Always`] fires only when the node
//!   carries a diagnostic with one of its tags, and then always rewrites.
//! - [`DiagnosticRule`] with [`GatedFix::Suppressible`] is gated the same
//!   way, but its fix may still decline.

use std::fmt;

use burnish_diagnostics::{Diagnostic, DiagnosticSet, DiagnosticTag};
use burnish_syntax::{Node, node_text};
use strum::{Display, IntoStaticStr};

use crate::rewrite::Rewrite;

/// How a rule decides whether it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Kind filter plus shape predicate.
    Structural,
    /// Requires a diagnostic with a matching tag; always rewrites.
    DiagnosticGated,
    /// Requires a diagnostic with a matching tag; the fix may decline.
    DiagnosticGatedSuppressible,
}

/// What a rule sees when it is checked.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    source: &'a str,
    diagnostics: &'a DiagnosticSet,
}

impl<'a> RuleContext<'a> {
    /// Creates a context over `source` and its diagnostics.
    #[must_use]
    pub const fn new(source: &'a str, diagnostics: &'a DiagnosticSet) -> Self {
        Self {
            source,
            diagnostics,
        }
    }

    /// Returns the document text.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the diagnostics of the current revision.
    #[must_use]
    pub const fn diagnostics(&self) -> &'a DiagnosticSet {
        self.diagnostics
    }

    /// Returns the text covered by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &'a str {
        node_text(node, self.source)
    }
}

/// A rewrite rule.
///
/// `check` must be pure: no side effects, and calling it twice on the same
/// inputs gives the same answer. Actions rely on this to re-validate before
/// they mutate.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Stable identifier used in configuration and reports.
    fn name(&self) -> &'static str;

    /// The strategy the rule follows.
    fn strategy(&self) -> Strategy;

    /// Whether executing the rule's action needs the exclusive write scope
    /// for the whole of re-validation and mutation.
    fn requires_exclusive_write(&self) -> bool;

    /// Returns the rewrite to make at `node`, if the rule applies.
    fn check(&self, node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite>;
}

/// Shape predicate and transform of a structural rule.
pub type StructuralCheck = fn(Node<'_>, &RuleContext<'_>) -> Option<Rewrite>;

/// Rule that matches node kinds and tree shape.
#[derive(Debug, Clone, Copy)]
pub struct StructuralRule {
    name: &'static str,
    kinds: &'static [&'static str],
    exclusive: bool,
    check: StructuralCheck,
}

impl StructuralRule {
    /// Creates a structural rule that needs exclusive write access.
    #[must_use]
    pub const fn new(
        name: &'static str,
        kinds: &'static [&'static str],
        check: StructuralCheck,
    ) -> Self {
        Self {
            name,
            kinds,
            exclusive: true,
            check,
        }
    }

    /// Lets the rule's actions commit through a short write scope.
    #[must_use]
    pub const fn shared(mut self) -> Self {
        self.exclusive = false;
        self
    }
}

impl Rule for StructuralRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn strategy(&self) -> Strategy {
        Strategy::Structural
    }

    fn requires_exclusive_write(&self) -> bool {
        self.exclusive
    }

    fn check(&self, node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
        if !self.kinds.contains(&node.kind()) {
            return None;
        }
        (self.check)(node, context)
    }
}

/// Transform of a diagnostic-gated rule.
#[derive(Debug, Clone, Copy)]
pub enum GatedFix {
    /// The fix always yields a rewrite once the gate is passed.
    Always(fn(Node<'_>, &Diagnostic, &RuleContext<'_>) -> Rewrite),
    /// The fix may decline, letting later rules have the node.
    Suppressible(fn(Node<'_>, &Diagnostic, &RuleContext<'_>) -> Option<Rewrite>),
}

/// Rule gated on diagnostics with particular tags.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticRule {
    name: &'static str,
    kinds: &'static [&'static str],
    tags: &'static [DiagnosticTag],
    fix: GatedFix,
}

impl DiagnosticRule {
    /// Creates a gated rule. Gated rules always need exclusive write access.
    #[must_use]
    pub const fn new(
        name: &'static str,
        kinds: &'static [&'static str],
        tags: &'static [DiagnosticTag],
        fix: GatedFix,
    ) -> Self {
        Self {
            name,
            kinds,
            tags,
            fix,
        }
    }

    /// Returns the tags that open the gate.
    #[must_use]
    pub const fn tags(&self) -> &'static [DiagnosticTag] {
        self.tags
    }
}

impl Rule for DiagnosticRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn strategy(&self) -> Strategy {
        match self.fix {
            GatedFix::Always(_) => Strategy::DiagnosticGated,
            GatedFix::Suppressible(_) => Strategy::DiagnosticGatedSuppressible,
        }
    }

    fn requires_exclusive_write(&self) -> bool {
        true
    }

    fn check(&self, node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
        if !self.kinds.contains(&node.kind()) {
            return None;
        }
        let diagnostic = context.diagnostics().first_matching(node, self.tags)?;
        match self.fix {
            GatedFix::Always(fix) => Some(fix(node, diagnostic, context)),
            GatedFix::Suppressible(fix) => fix(node, diagnostic, context),
        }
    }
}
