//! First-match rule dispatch.

use std::sync::Arc;

use burnish_syntax::{Node, NodeHandle};

use crate::action::Action;
use crate::rule::{Rule, RuleContext};

/// Ordered list of rules; the first rule whose check succeeds wins.
///
/// Order is fixed at construction and is the dispatch priority: an earlier
/// rule shadows later ones that match the same node.
#[derive(Debug, Clone, Default)]
pub struct RuleDispatcher {
    rules: Vec<Arc<dyn Rule>>,
}

/// A matched rule, ready to run.
#[derive(Debug)]
pub struct Dispatch {
    /// The deferred mutation.
    pub action: Action,
    /// Whether the action must run inside the exclusive write scope.
    pub requires_exclusive_write: bool,
}

impl RuleDispatcher {
    /// Creates a dispatcher over `rules` in priority order.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = Arc<dyn Rule>>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Finds the first rule that applies to `node`.
    ///
    /// Returns `None` when no rule matches. A panic in a rule's check is not
    /// caught.
    #[must_use]
    pub fn dispatch(&self, node: Node<'_>, context: &RuleContext<'_>) -> Option<Dispatch> {
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.check(node, context).is_some())?;
        Some(Dispatch {
            action: Action::new(Arc::clone(rule), NodeHandle::of(node)),
            requires_exclusive_write: rule.requires_exclusive_write(),
        })
    }
}
