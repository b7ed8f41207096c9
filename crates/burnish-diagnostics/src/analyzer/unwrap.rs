//! `UNNECESSARY_UNWRAP`: unwrapping a value that was just wrapped.

use burnish_syntax::{Node, named_children};

use super::Sink;
use crate::diagnostic::Severity;
use crate::tag::tags;

pub(super) fn check_unwrap(call: Node<'_>, sink: &mut Sink<'_>) {
    let Some(method) = call.child_by_field_name("function") else {
        return;
    };
    if method.kind() != "field_expression" {
        return;
    }
    let (Some(receiver), Some(field)) = (
        method.child_by_field_name("value"),
        method.child_by_field_name("field"),
    ) else {
        return;
    };
    let arity = call
        .child_by_field_name("arguments")
        .map_or(0, |arguments| named_children(arguments).len());
    let method_name = sink.text(field);
    match (method_name, arity) {
        ("unwrap", 0) | ("expect", 1) => {}
        _ => return,
    }
    let Some(constructor) = wrapped_by(receiver, sink) else {
        return;
    };
    sink.report(
        tags::UNNECESSARY_UNWRAP,
        call,
        Severity::Warning,
        format!("used `{method_name}()` on `{constructor}(..)` which can never fail"),
    );
}

/// Returns `Some` or `Ok` when `receiver` is a one-argument call to either.
fn wrapped_by<'s>(receiver: Node<'_>, sink: &Sink<'s>) -> Option<&'s str> {
    if receiver.kind() != "call_expression" {
        return None;
    }
    let constructor = receiver.child_by_field_name("function")?;
    let name = sink.text(constructor);
    let arguments = receiver.child_by_field_name("arguments")?;
    (constructor.kind() == "identifier"
        && matches!(name, "Some" | "Ok")
        && named_children(arguments).len() == 1)
        .then_some(name)
}
