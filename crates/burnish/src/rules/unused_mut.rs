//! `unused-mut`: removes `mut` from a binding that is never mutated.

use burnish_diagnostics::{Diagnostic, tags};
use burnish_syntax::Node;

use crate::rewrite::Rewrite;
use crate::rule::{DiagnosticRule, GatedFix, RuleContext};

pub(crate) const RULE: DiagnosticRule = DiagnosticRule::new(
    "unused-mut",
    &["mutable_specifier"],
    &[tags::UNUSED_MUT],
    GatedFix::Always(fix),
);

fn fix(node: Node<'_>, _diagnostic: &Diagnostic, context: &RuleContext<'_>) -> Rewrite {
    Rewrite::delete_token(node, context.source())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::rewrite_once;

    #[test]
    fn removes_unneeded_mut() {
        assert_eq!(
            rewrite_once(&RULE, "fn f() { let mut x = 1; g(x); }").as_deref(),
            Some("fn f() { let x = 1; g(x); }")
        );
    }

    #[test]
    fn keeps_needed_mut() {
        assert!(rewrite_once(&RULE, "fn f() { let mut x = 1; x += 1; }").is_none());
    }
}
