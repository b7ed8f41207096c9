//! Helpers shared by the rule tests.

use burnish_diagnostics::{Analyzer, DiagnosticsProvider};
use burnish_syntax::{Document, named_descendants};

use crate::rule::{Rule, RuleContext};

/// Applies the first match of `rule` in reverse pre-order and returns the
/// rewritten source, or `None` when the rule matches nowhere.
pub(crate) fn rewrite_once(rule: &dyn Rule, code: &str) -> Option<String> {
    let mut document = Document::parse(code).expect("source should parse");
    let diagnostics = Analyzer::new().diagnostics(&document);
    let context = RuleContext::new(document.source(), &diagnostics);
    let rewrite = named_descendants(document.root_node())
        .into_iter()
        .rev()
        .find_map(|node| rule.check(node, &context))?;
    document.apply(rewrite.edits()).expect("rewrite should apply");
    assert!(
        !document.has_errors(),
        "rewrite broke syntax: {}",
        document.source()
    );
    Some(document.into_source())
}
