//! The process-wide rule registry.
//!
//! The built-in table is assembled once, on first use, and never changes
//! afterwards. Its order is dispatch priority.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::dispatcher::RuleDispatcher;
use crate::error::RewriteError;
use crate::rule::{Rule, Strategy};
use crate::rules;

static REGISTRY: Lazy<RuleRegistry> = Lazy::new(|| RuleRegistry {
    rules: rules::builtin(),
});

/// Returns the built-in rule registry.
#[must_use]
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}

/// Immutable, ordered collection of registered rules.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
}

/// Summary of one registered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Position in the table; lower runs first.
    pub priority: usize,
    /// Stable rule name.
    pub name: &'static str,
    /// How the rule decides whether it applies.
    pub strategy: Strategy,
    /// Whether the rule's actions need the exclusive write scope.
    pub requires_exclusive_write: bool,
}

impl RuleRegistry {
    /// Returns the priority of the named rule.
    #[must_use]
    pub fn priority(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.name() == name)
    }

    /// Returns the rule names in priority order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Builds a dispatcher over every rule except `disabled`, keeping order.
    ///
    /// # Errors
    ///
    /// Returns [`RewriteError::UnknownRule`] when a disabled name is not
    /// registered.
    pub fn dispatcher<S: AsRef<str>>(&self, disabled: &[S]) -> Result<RuleDispatcher, RewriteError> {
        let mut skip = HashSet::new();
        for entry in disabled {
            let name = entry.as_ref();
            if self.priority(name).is_none() {
                return Err(RewriteError::unknown_rule(name));
            }
            skip.insert(name);
        }
        Ok(RuleDispatcher::new(
            self.rules
                .iter()
                .filter(|rule| !skip.contains(rule.name()))
                .cloned(),
        ))
    }

    /// Describes every rule in priority order.
    #[must_use]
    pub fn describe(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .enumerate()
            .map(|(priority, rule)| RuleInfo {
                priority,
                name: rule.name(),
                strategy: rule.strategy(),
                requires_exclusive_write: rule.requires_exclusive_write(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_order_is_priority_order() {
        let names: Vec<_> = registry().names().collect();
        insta::assert_debug_snapshot!(names, @r#"
        [
            "redundant-trait-impl-visibility",
            "explicit-unit-return",
            "string-concat-to-format",
            "useless-cast",
            "immutable-reassignment",
            "unused-mut",
            "unnecessary-unwrap",
            "fold-if-to-return",
            "needless-return",
            "simplify-negated-comparison",
            "bool-literal-comparison",
            "len-zero-to-is-empty",
            "unnecessary-parentheses",
        ]
        "#);
    }

    #[rstest]
    #[case("redundant-trait-impl-visibility", Some(0))]
    #[case("useless-cast", Some(3))]
    #[case("unnecessary-parentheses", Some(12))]
    #[case("no-such-rule", None)]
    fn priorities_follow_the_table(#[case] name: &str, #[case] expected: Option<usize>) {
        assert_eq!(registry().priority(name), expected);
    }

    #[test]
    fn disabling_keeps_remaining_order() {
        let dispatcher = registry()
            .dispatcher(&["useless-cast", "unused-mut"])
            .expect("known rules");
        let names: Vec<_> = dispatcher.rules().iter().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), 11);
        assert!(!names.contains(&"useless-cast"));
        assert_eq!(names.get(3).copied(), Some("immutable-reassignment"));
    }

    #[test]
    fn unknown_disabled_rule_is_an_error() {
        let error = registry()
            .dispatcher(&["not-a-rule"])
            .expect_err("unknown rule");
        assert!(matches!(error, RewriteError::UnknownRule { ref name } if name == "not-a-rule"));
    }

    #[test]
    fn only_two_rules_commit_through_a_shared_scope() {
        let shared: Vec<_> = registry()
            .describe()
            .into_iter()
            .filter(|info| !info.requires_exclusive_write)
            .map(|info| info.name)
            .collect();
        assert_eq!(
            shared,
            vec!["simplify-negated-comparison", "unnecessary-parentheses"]
        );
    }
}
