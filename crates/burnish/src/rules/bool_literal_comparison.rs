//! `bool-literal-comparison`: `x == true` is `x`, `x == false` is `!x`.

use burnish_syntax::Node;

use super::{binary_operator, is_atomic};
use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("bool-literal-comparison", &["binary_expression"], check);

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let equal = match binary_operator(node, context.source())? {
        "==" => true,
        "!=" => false,
        _ => return None,
    };
    let left = node.child_by_field_name("left")?;
    let right = node.child_by_field_name("right")?;
    let (literal, operand) = if left.kind() == "boolean_literal" {
        (left, right)
    } else if right.kind() == "boolean_literal" {
        (right, left)
    } else {
        return None;
    };
    if !is_atomic(operand) || operand.kind() == "boolean_literal" {
        return None;
    }
    let keep = (context.text(literal) == "true") == equal;
    let text = context.text(operand);
    let replacement = if keep {
        text.to_owned()
    } else {
        format!("!{text}")
    };
    Some(Rewrite::replace(node, replacement))
}
