//! `len-zero-to-is-empty`: `x.len() == 0` is `x.is_empty()`.

use burnish_syntax::{Node, named_children};

use super::binary_operator;
use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("len-zero-to-is-empty", &["binary_expression"], check);

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let negate = match binary_operator(node, context.source())? {
        "==" => false,
        "!=" => true,
        _ => return None,
    };
    let left = node.child_by_field_name("left")?;
    let right = node.child_by_field_name("right")?;
    let receiver = if is_zero(right, context) {
        len_receiver(left, context)?
    } else if is_zero(left, context) {
        len_receiver(right, context)?
    } else {
        return None;
    };
    let bang = if negate { "!" } else { "" };
    Some(Rewrite::replace(
        node,
        format!("{bang}{}.is_empty()", context.text(receiver)),
    ))
}

fn is_zero(node: Node<'_>, context: &RuleContext<'_>) -> bool {
    node.kind() == "integer_literal" && context.text(node) == "0"
}

/// `x.len()` -> `x`
fn len_receiver<'t>(call: Node<'t>, context: &RuleContext<'_>) -> Option<Node<'t>> {
    if call.kind() != "call_expression" {
        return None;
    }
    let arguments = call.child_by_field_name("arguments")?;
    if !named_children(arguments).is_empty() {
        return None;
    }
    let method = call.child_by_field_name("function")?;
    if method.kind() != "field_expression" {
        return None;
    }
    let name = method.child_by_field_name("field")?;
    (context.text(name) == "len")
        .then(|| method.child_by_field_name("value"))
        .flatten()
}
