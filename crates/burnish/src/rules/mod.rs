//! The built-in rule table.

mod bool_literal_comparison;
mod explicit_unit_return;
mod fold_if_to_return;
mod immutable_reassignment;
mod len_zero;
mod needless_return;
mod negated_comparison;
mod redundant_visibility;
mod string_concat;
mod unnecessary_parentheses;
mod unnecessary_unwrap;
mod unused_mut;
mod useless_cast;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use burnish_syntax::Node;

use crate::rule::Rule;

/// Returns the built-in rules in priority order.
pub(crate) fn builtin() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(redundant_visibility::RULE),
        Arc::new(explicit_unit_return::RULE),
        Arc::new(string_concat::RULE),
        Arc::new(useless_cast::RULE),
        Arc::new(immutable_reassignment::RULE),
        Arc::new(unused_mut::RULE),
        Arc::new(unnecessary_unwrap::RULE),
        Arc::new(fold_if_to_return::RULE),
        Arc::new(needless_return::RULE),
        Arc::new(negated_comparison::RULE),
        Arc::new(bool_literal_comparison::RULE),
        Arc::new(len_zero::RULE),
        Arc::new(unnecessary_parentheses::RULE),
    ]
}

/// Expression kinds that bind at least as tightly as a method call, so they
/// can replace any expression without parentheses.
const ATOMIC_KINDS: &[&str] = &[
    "identifier",
    "self",
    "scoped_identifier",
    "integer_literal",
    "float_literal",
    "string_literal",
    "raw_string_literal",
    "char_literal",
    "boolean_literal",
    "call_expression",
    "field_expression",
    "index_expression",
    "try_expression",
    "macro_invocation",
    "parenthesized_expression",
    "tuple_expression",
    "array_expression",
    "unit_expression",
    "generic_function",
];

/// Reports whether `node` can stand anywhere an expression can without
/// parentheses.
pub(crate) fn is_atomic(node: Node<'_>) -> bool {
    ATOMIC_KINDS.contains(&node.kind())
}

/// Returns the operator token of a binary expression.
pub(crate) fn binary_operator<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    (node.kind() == "binary_expression")
        .then(|| node.child_by_field_name("operator"))
        .flatten()
        .map(|operator| burnish_syntax::node_text(operator, source))
}
