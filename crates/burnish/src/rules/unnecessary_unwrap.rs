//! `unnecessary-unwrap`: `Some(e).unwrap()` and `Ok(e).unwrap()` are just `e`.

use burnish_diagnostics::{Diagnostic, tags};
use burnish_syntax::{Node, named_children};

use super::is_atomic;
use crate::rewrite::Rewrite;
use crate::rule::{DiagnosticRule, GatedFix, RuleContext};

pub(crate) const RULE: DiagnosticRule = DiagnosticRule::new(
    "unnecessary-unwrap",
    &["call_expression"],
    &[tags::UNNECESSARY_UNWRAP],
    GatedFix::Suppressible(fix),
);

fn fix(node: Node<'_>, _diagnostic: &Diagnostic, context: &RuleContext<'_>) -> Option<Rewrite> {
    let inner = wrapped_value(node, context)?;
    let text = context.text(inner);
    Some(if is_atomic(inner) {
        Rewrite::replace(node, text)
    } else {
        Rewrite::replace(node, format!("({text})"))
    })
}

/// `Some(e).unwrap()` -> `e`
fn wrapped_value<'t>(call: Node<'t>, context: &RuleContext<'_>) -> Option<Node<'t>> {
    let function = call.child_by_field_name("function")?;
    if function.kind() != "field_expression"
        || !matches!(
            context.text(function.child_by_field_name("field")?),
            "unwrap" | "expect"
        )
    {
        return None;
    }
    let receiver = function.child_by_field_name("value")?;
    if receiver.kind() != "call_expression"
        || !matches!(
            context.text(receiver.child_by_field_name("function")?),
            "Some" | "Ok"
        )
    {
        return None;
    }
    match named_children(receiver.child_by_field_name("arguments")?).as_slice() {
        [value] => Some(*value),
        _ => None,
    }
}
