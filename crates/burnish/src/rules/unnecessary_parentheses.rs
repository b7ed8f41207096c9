//! `unnecessary-parentheses`: drops parentheses that do not change how the
//! expression parses.

use burnish_syntax::{Node, is_field_of_parent, only_named_child};

use super::is_atomic;
use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("unnecessary-parentheses", &["parenthesized_expression"], check).shared();

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let inner = only_named_child(node)?;
    let parent = node.parent()?;
    // `(f.field)()` calls a field; `f.field()` calls a method.
    if parent.kind() == "call_expression" && is_field_of_parent(node, "function") {
        return None;
    }
    // `(1).max(2)` would lex differently without the parentheses.
    if parent.kind() == "field_expression"
        && matches!(inner.kind(), "integer_literal" | "float_literal")
    {
        return None;
    }
    // `let .. = e else { .. }` rejects a trailing `}` or a lazy boolean
    // before `else`.
    if parent.kind() == "let_declaration"
        && parent.child_by_field_name("alternative").is_some()
        && (!is_atomic(inner) || context.text(inner).ends_with('}'))
    {
        return None;
    }
    let whole_value = match parent.kind() {
        "let_declaration" => is_field_of_parent(node, "value"),
        "return_expression" | "arguments" => true,
        _ => false,
    };
    (is_atomic(inner) || whole_value).then(|| Rewrite::replace(node, context.text(inner)))
}
