//! Behaviour-driven development (BDD) step definitions for rule dispatch.

use std::cell::RefCell;
use std::sync::Arc;

use burnish_diagnostics::{Analyzer, DiagnosticsProvider, FixedDiagnostics};
use burnish_syntax::{Document, NodeHandle, TextEdit};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::{FIRST, RENAME, SECOND};
use crate::{ActionOutcome, Dispatch, Rule, RuleContext, RuleDispatcher, TreeLock, registry};

// =============================================================================
// Test World
// =============================================================================

/// State shared across BDD steps.
#[derive(Default)]
struct TestWorld {
    /// The document under rewrite.
    lock: Option<TreeLock>,
    /// Rules in priority order.
    dispatcher: Option<RuleDispatcher>,
    /// Replaces the analyzer when set.
    provider: Option<Arc<dyn DiagnosticsProvider>>,
    /// The node last dispatched.
    target: Option<NodeHandle>,
    /// The pending dispatch, until executed.
    dispatch: Option<Dispatch>,
    /// Name of the rule that matched, if any.
    chosen: Option<&'static str>,
    /// Outcome of the last execution.
    outcome: Option<ActionOutcome>,
}

impl TestWorld {
    fn lock(&self) -> &TreeLock {
        self.lock.as_ref().expect("source should be parsed")
    }

    fn dispatcher(&self) -> &RuleDispatcher {
        self.dispatcher.as_ref().expect("rules should be registered")
    }

    fn provider(&self) -> Arc<dyn DiagnosticsProvider> {
        self.provider
            .clone()
            .unwrap_or_else(|| Arc::new(Analyzer::new()))
    }

    fn first_handle(&self, kind: &str) -> NodeHandle {
        self.lock()
            .read()
            .expect("read")
            .handles()
            .into_iter()
            .find(|h| h.kind() == kind)
            .unwrap_or_else(|| panic!("no {kind} node in document"))
    }

    fn dispatch_at(&self, handle: &NodeHandle) -> Option<Dispatch> {
        let document = self.lock().read().expect("read");
        let node = document.resolve(handle).expect("handle should resolve");
        let diagnostics = self.provider().diagnostics(&document);
        let context = RuleContext::new(document.source(), &diagnostics);
        self.dispatcher().dispatch(node, &context)
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

/// Strips surrounding double quotes from a string if present.
fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}

fn test_rule(name: &str) -> Arc<dyn Rule> {
    match name {
        "first" => Arc::new(FIRST),
        "second" => Arc::new(SECOND),
        "rename-old" => Arc::new(RENAME),
        other => panic!("unknown test rule {other}"),
    }
}

// =============================================================================
// Given Steps
// =============================================================================

#[given("Rust source {code}")]
fn given_rust_source(world: &RefCell<TestWorld>, code: String) {
    let document = Document::parse(strip_quotes(&code)).expect("parse");
    world.borrow_mut().lock = Some(TreeLock::new(document));
}

#[given("the test rules {names} in that order")]
fn given_test_rules(world: &RefCell<TestWorld>, names: String) {
    let rules = strip_quotes(&names).split(',').map(|n| test_rule(n.trim()));
    world.borrow_mut().dispatcher = Some(RuleDispatcher::new(rules));
}

#[given("the built-in rules")]
fn given_builtin_rules(world: &RefCell<TestWorld>) {
    let dispatcher = registry().dispatcher::<&str>(&[]).expect("dispatcher");
    world.borrow_mut().dispatcher = Some(dispatcher);
}

#[given("no diagnostics are available")]
fn given_no_diagnostics(world: &RefCell<TestWorld>) {
    world.borrow_mut().provider = Some(Arc::new(FixedDiagnostics::empty()));
}

// =============================================================================
// When Steps
// =============================================================================

#[when("the first {kind} node is dispatched")]
fn when_dispatched(world: &RefCell<TestWorld>, kind: String) {
    let mut w = world.borrow_mut();
    let handle = w.first_handle(strip_quotes(&kind));
    let dispatch = w.dispatch_at(&handle);
    w.chosen = dispatch.as_ref().map(|d| d.action.rule_name());
    w.dispatch = dispatch;
    w.target = Some(handle);
}

#[when("the first {kind} node is replaced with {text}")]
fn when_replaced(world: &RefCell<TestWorld>, kind: String, text: String) {
    let w = world.borrow();
    let handle = w.first_handle(strip_quotes(&kind));
    let mut document = w.lock().write().expect("write");
    document
        .apply(&[TextEdit::replace(handle.byte_range(), strip_quotes(&text))])
        .expect("edit");
}

#[when("the action is executed")]
fn when_executed(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let dispatch = w.dispatch.take().expect("a rule should have matched");
    let provider = w.provider();
    let outcome = dispatch
        .execute(w.lock(), provider.as_ref())
        .expect("execute");
    w.outcome = Some(outcome);
}

// =============================================================================
// Then Steps
// =============================================================================

#[then("the chosen rule is {name}")]
fn then_chosen(world: &RefCell<TestWorld>, name: String) {
    assert_eq!(world.borrow().chosen, Some(strip_quotes(&name)));
}

#[then("no rule is chosen")]
fn then_none_chosen(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    assert!(w.chosen.is_none(), "unexpected match: {:?}", w.chosen);
}

#[then("dispatching it again chooses the same rule")]
fn then_same_again(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let handle = w.target.as_ref().expect("a node should be dispatched");
    let again = w.dispatch_at(handle).map(|d| d.action.rule_name());
    assert_eq!(again, w.chosen);
}

#[then("the action uses the shared write scope")]
fn then_shared_scope(world: &RefCell<TestWorld>) {
    let w = world.borrow();
    let dispatch = w.dispatch.as_ref().expect("a rule should have matched");
    assert!(!dispatch.requires_exclusive_write);
}

#[then("the outcome is {outcome}")]
fn then_outcome(world: &RefCell<TestWorld>, outcome: String) {
    let expected = match strip_quotes(&outcome) {
        "applied" => ActionOutcome::Applied,
        "stale" => ActionOutcome::Stale,
        other => panic!("unknown outcome {other}"),
    };
    assert_eq!(world.borrow().outcome, Some(expected));
}

#[then("the source is {expected}")]
fn then_source_is(world: &RefCell<TestWorld>, expected: String) {
    let w = world.borrow();
    assert_eq!(
        w.lock().read().expect("read").source(),
        strip_quotes(&expected)
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[scenario(
    path = "tests/features/rule_dispatch.feature",
    name = "The earlier of two matching rules wins"
)]
fn earlier_rule_wins(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/rule_dispatch.feature",
    name = "A gated rule stays silent without its diagnostic"
)]
fn gated_rule_silent(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/rule_dispatch.feature",
    name = "A gated rule fires on its diagnostic"
)]
fn gated_rule_fires(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/rule_dispatch.feature",
    name = "An action whose target changed does nothing"
)]
fn stale_action_does_nothing(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/rule_dispatch.feature",
    name = "Dispatching the same node twice picks the same rule"
)]
fn repeated_dispatch_is_stable(world: RefCell<TestWorld>) {
    drop(world);
}
