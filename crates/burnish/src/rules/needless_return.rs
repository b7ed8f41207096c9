//! `needless-return`: a `return e;` that ends a function body is just `e`.

use burnish_syntax::{Node, named_children, only_named_child};

use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("needless-return", &["return_expression"], check);

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let value = only_named_child(node)?;
    let parent = node.parent()?;
    let (statement, body) = if parent.kind() == "expression_statement" {
        (parent, parent.parent()?)
    } else {
        (node, parent)
    };
    let is_function_body = body.kind() == "block"
        && body
            .parent()
            .is_some_and(|function| function.kind() == "function_item");
    let is_last = named_children(body)
        .last()
        .is_some_and(|last| last.id() == statement.id());
    (is_function_body && is_last).then(|| Rewrite::replace(statement, context.text(value)))
}
