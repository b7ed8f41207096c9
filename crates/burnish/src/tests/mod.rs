//! Crate-level tests for dispatch and action execution.

mod behaviour;

use std::sync::Arc;

use burnish_diagnostics::{Diagnostic, DiagnosticTag};
use burnish_syntax::{Document, Node};

use crate::registry::registry;
use crate::rewrite::Rewrite;
use crate::rule::{DiagnosticRule, GatedFix, Rule, RuleContext, StructuralRule};

fn replace_literal_with_ten(node: Node<'_>, _context: &RuleContext<'_>) -> Option<Rewrite> {
    Some(Rewrite::replace(node, "10"))
}

fn replace_literal_with_twenty(node: Node<'_>, _context: &RuleContext<'_>) -> Option<Rewrite> {
    Some(Rewrite::replace(node, "20"))
}

fn rename_old(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    (context.text(node) == "old").then(|| Rewrite::replace(node, "new"))
}

/// Structural rule rewriting any integer literal to `10`.
pub(crate) const FIRST: StructuralRule =
    StructuralRule::new("first", &["integer_literal"], replace_literal_with_ten);

/// Structural rule rewriting any integer literal to `20`.
pub(crate) const SECOND: StructuralRule =
    StructuralRule::new("second", &["integer_literal"], replace_literal_with_twenty);

/// Structural rule renaming the identifier `old` to `new`.
pub(crate) const RENAME: StructuralRule =
    StructuralRule::new("rename-old", &["identifier"], rename_old);

fn decline(
    _node: Node<'_>,
    _diagnostic: &Diagnostic,
    _context: &RuleContext<'_>,
) -> Option<Rewrite> {
    None
}

/// Tag that opens the gate of [`DECLINING`].
pub(crate) const LITERAL_TAG: DiagnosticTag = DiagnosticTag::new("LITERAL");

/// Suppressible gated rule on integer literals whose fix always declines.
pub(crate) const DECLINING: DiagnosticRule = DiagnosticRule::new(
    "declining",
    &["integer_literal"],
    &[LITERAL_TAG],
    GatedFix::Suppressible(decline),
);

/// Rule whose check always panics.
#[derive(Debug)]
pub(crate) struct Exploding;

impl Rule for Exploding {
    fn name(&self) -> &'static str {
        "exploding"
    }

    fn strategy(&self) -> crate::Strategy {
        crate::Strategy::Structural
    }

    fn requires_exclusive_write(&self) -> bool {
        true
    }

    fn check(&self, _node: Node<'_>, _context: &RuleContext<'_>) -> Option<Rewrite> {
        panic!("rule exploded");
    }
}

/// Looks up a built-in rule by name.
pub(crate) fn builtin(name: &str) -> Arc<dyn Rule> {
    let dispatcher = registry()
        .dispatcher::<&str>(&[])
        .expect("built-in dispatcher");
    dispatcher
        .rules()
        .iter()
        .find(|rule| rule.name() == name)
        .cloned()
        .unwrap_or_else(|| panic!("no built-in rule {name}"))
}

/// Resolves the first node of `kind` in pre-order.
pub(crate) fn first_node<'d>(document: &'d Document, kind: &str) -> Node<'d> {
    document
        .handles()
        .into_iter()
        .find(|handle| handle.kind() == kind)
        .and_then(|handle| document.resolve(&handle))
        .unwrap_or_else(|| panic!("no {kind} node"))
}
