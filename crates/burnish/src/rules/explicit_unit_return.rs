//! `explicit-unit-return`: `-> ()` says nothing a signature without a return
//! type does not.

use burnish_syntax::Node;

use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule = StructuralRule::new(
    "explicit-unit-return",
    &["function_item", "function_signature_item"],
    check,
);

fn check(node: Node<'_>, _context: &RuleContext<'_>) -> Option<Rewrite> {
    let return_type = node.child_by_field_name("return_type")?;
    if return_type.kind() != "unit_type" {
        return None;
    }
    let parameters = node.child_by_field_name("parameters")?;
    Some(Rewrite::replace_range(
        parameters.end_byte()..return_type.end_byte(),
        "",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::rewrite_once;
    use rstest::rstest;

    #[rstest]
    #[case("fn run() -> () {}", Some("fn run() {}"))]
    #[case("trait T { fn run(&self) -> (); }", Some("trait T { fn run(&self); }"))]
    #[case("fn run() -> u8 { 1 }", None)]
    #[case("fn run() {}", None)]
    fn strips_unit_return(#[case] code: &str, #[case] expected: Option<&str>) {
        assert_eq!(rewrite_once(&RULE, code).as_deref(), expected);
    }
}
