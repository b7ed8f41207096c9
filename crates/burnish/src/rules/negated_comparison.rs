//! `simplify-negated-comparison`: `!(a == b)` is `a != b`, and the other way
//! round.
//!
//! Ordering comparisons are left alone: `!(a < b)` is not `a >= b` when
//! either side is NaN.

use burnish_syntax::{Node, only_named_child};

use super::binary_operator;
use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("simplify-negated-comparison", &["unary_expression"], check).shared();

/// Parents in which a comparison can replace a unary expression as is.
const LOOSE_CONTEXTS: &[&str] = &[
    "let_declaration",
    "expression_statement",
    "block",
    "arguments",
    "return_expression",
    "parenthesized_expression",
    "if_expression",
    "while_expression",
    "assignment_expression",
    "array_expression",
    "tuple_expression",
    "field_initializer",
    "closure_expression",
    "match_arm",
];

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let source = context.source();
    if !context.text(node).starts_with('!') {
        return None;
    }
    let parent = node.parent()?;
    let loose = LOOSE_CONTEXTS.contains(&parent.kind())
        || matches!(binary_operator(parent, source), Some("&&" | "||"));
    if !loose {
        return None;
    }
    let inner = only_named_child(node)?;
    if inner.kind() != "parenthesized_expression" {
        return None;
    }
    let comparison = only_named_child(inner)?;
    let flipped = match binary_operator(comparison, source)? {
        "==" => "!=",
        "!=" => "==",
        _ => return None,
    };
    let left = comparison.child_by_field_name("left")?;
    let right = comparison.child_by_field_name("right")?;
    Some(Rewrite::replace(
        node,
        format!("{} {flipped} {}", context.text(left), context.text(right)),
    ))
}
