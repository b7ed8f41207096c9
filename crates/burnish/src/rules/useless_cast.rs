//! `useless-cast`: drops a cast the analyser proved to be the identity.

use burnish_diagnostics::{Diagnostic, tags};
use burnish_syntax::Node;

use crate::rewrite::Rewrite;
use crate::rule::{DiagnosticRule, GatedFix, RuleContext};

pub(crate) const RULE: DiagnosticRule = DiagnosticRule::new(
    "useless-cast",
    &["type_cast_expression"],
    &[tags::USELESS_CAST],
    GatedFix::Suppressible(fix),
);

fn fix(node: Node<'_>, _diagnostic: &Diagnostic, context: &RuleContext<'_>) -> Option<Rewrite> {
    let value = node.child_by_field_name("value")?;
    Some(Rewrite::replace(node, context.text(value)))
}
