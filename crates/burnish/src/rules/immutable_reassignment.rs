//! `immutable-reassignment`: makes a local `mut` when the code assigns to it
//! or borrows it mutably.
//!
//! Constants and statics are never made mutable, and neither is a name the
//! resolver cannot find; the rule steps aside for those.

use burnish_diagnostics::scope::{self, Binding};
use burnish_diagnostics::{Diagnostic, tags};
use burnish_syntax::Node;

use crate::rewrite::Rewrite;
use crate::rule::{DiagnosticRule, GatedFix, RuleContext};

pub(crate) const RULE: DiagnosticRule = DiagnosticRule::new(
    "immutable-reassignment",
    &[
        "assignment_expression",
        "compound_assignment_expr",
        "reference_expression",
    ],
    &[tags::VAL_REASSIGNMENT, tags::MUT_BORROW_OF_IMMUTABLE],
    GatedFix::Suppressible(fix),
);

fn fix(node: Node<'_>, _diagnostic: &Diagnostic, context: &RuleContext<'_>) -> Option<Rewrite> {
    let field = if node.kind() == "reference_expression" {
        "value"
    } else {
        "left"
    };
    let target = node.child_by_field_name(field)?;
    if target.kind() != "identifier" {
        return None;
    }
    match scope::resolve(target, context.source())? {
        Binding::Local {
            name,
            mutable: false,
            ..
        } => Some(Rewrite::insert(name.start_byte(), "mut ")),
        Binding::Local { .. } | Binding::Item { .. } => None,
    }
}
