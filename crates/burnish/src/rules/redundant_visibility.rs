//! `redundant-trait-impl-visibility`: items of a trait impl take the trait's
//! visibility, so a modifier on them is noise.

use burnish_syntax::Node;

use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule = StructuralRule::new(
    "redundant-trait-impl-visibility",
    &["visibility_modifier"],
    check,
);

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let item = node.parent()?;
    let list = item.parent()?;
    let implementation = list.parent()?;
    let in_trait_impl = list.kind() == "declaration_list"
        && implementation.kind() == "impl_item"
        && implementation.child_by_field_name("trait").is_some();
    in_trait_impl.then(|| Rewrite::delete_token(node, context.source()))
}
