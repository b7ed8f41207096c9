//! `fold-if-to-return`: an `if`/`else` whose branches each just return a
//! value becomes a single `return if .. { a } else { b };`.

use burnish_syntax::{Node, only_named_child};

use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("fold-if-to-return", &["if_expression"], check);

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    // The `if` must be a statement, not a value.
    let parent = node.parent()?;
    let statement = match parent.kind() {
        "expression_statement" => parent,
        "block" => node,
        _ => return None,
    };
    let condition = node.child_by_field_name("condition")?;
    let consequence = node.child_by_field_name("consequence")?;
    let alternative = only_named_child(node.child_by_field_name("alternative")?)?;
    if alternative.kind() != "block" {
        return None;
    }
    let then_value = returned_value(consequence)?;
    let else_value = returned_value(alternative)?;
    Some(Rewrite::replace(
        statement,
        format!(
            "return if {} {{ {} }} else {{ {} }};",
            context.text(condition),
            context.text(then_value),
            context.text(else_value),
        ),
    ))
}

/// Returns `e` when `block` consists of exactly `return e;`.
fn returned_value(block: Node<'_>) -> Option<Node<'_>> {
    let mut only = only_named_child(block)?;
    if only.kind() == "expression_statement" {
        only = only_named_child(only)?;
    }
    if only.kind() != "return_expression" {
        return None;
    }
    only_named_child(only)
}
