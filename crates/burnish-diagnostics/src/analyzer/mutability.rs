//! Mutability checks: `VAL_REASSIGNMENT`, `MUT_BORROW_OF_IMMUTABLE` and
//! `UNUSED_MUT`.

use burnish_syntax::{Node, ancestor_of_kind, child_of_kind, has_child_of_kind, named_descendants};

use super::Sink;
use crate::diagnostic::Severity;
use crate::scope::{self, Binding};
use crate::tag::tags;

pub(super) fn check_assignment(assignment: Node<'_>, sink: &mut Sink<'_>) {
    let Some(target) = assignment.child_by_field_name("left") else {
        return;
    };
    if target.kind() != "identifier" {
        return;
    }
    let name = sink.text(target);
    match scope::resolve(target, sink.source) {
        Some(binding @ Binding::Local { mutable: false, .. }) => {
            // `let x; x = 1;` is a deferred initialisation, not a reassignment.
            let deferred = binding
                .let_declaration()
                .is_some_and(|decl| decl.child_by_field_name("value").is_none());
            if !deferred {
                sink.report(
                    tags::VAL_REASSIGNMENT,
                    assignment,
                    Severity::Error,
                    format!("cannot assign twice to immutable variable `{name}`"),
                );
            }
        }
        Some(Binding::Item { item, mutable: false }) => {
            let what = if item.kind() == "const_item" {
                "constant"
            } else {
                "immutable static item"
            };
            sink.report(
                tags::VAL_REASSIGNMENT,
                assignment,
                Severity::Error,
                format!("cannot assign to {what} `{name}`"),
            );
        }
        _ => {}
    }
}

pub(super) fn check_mut_borrow(reference: Node<'_>, sink: &mut Sink<'_>) {
    if !has_child_of_kind(reference, "mutable_specifier") {
        return;
    }
    let Some(value) = reference.child_by_field_name("value") else {
        return;
    };
    if value.kind() != "identifier" {
        return;
    }
    if let Some(Binding::Local { mutable: false, .. }) = scope::resolve(value, sink.source) {
        sink.report(
            tags::MUT_BORROW_OF_IMMUTABLE,
            reference,
            Severity::Error,
            format!(
                "cannot borrow `{}` as mutable, as it is not declared as mutable",
                sink.text(value)
            ),
        );
    }
}

pub(super) fn check_unused_mut(declaration: Node<'_>, sink: &mut Sink<'_>) {
    let Some(specifier) = child_of_kind(declaration, "mutable_specifier") else {
        return;
    };
    let Some(pattern) = declaration.child_by_field_name("pattern") else {
        return;
    };
    if pattern.kind() != "identifier" || declaration.child_by_field_name("value").is_none() {
        return;
    }
    let Some(scope_block) = ancestor_of_kind(declaration, &["block"]) else {
        return;
    };
    let name = sink.text(pattern);

    let mutated = named_descendants(scope_block)
        .into_iter()
        .filter(|node| {
            node.kind() == "identifier"
                && node.start_byte() >= declaration.end_byte()
                && sink.text(*node) == name
        })
        .filter(|use_site| {
            matches!(
                scope::resolve(*use_site, sink.source),
                Some(Binding::Local { name: bound, .. }) if bound.id() == pattern.id()
            )
        })
        .any(is_mutating_use);

    if !mutated {
        sink.report(
            tags::UNUSED_MUT,
            specifier,
            Severity::Warning,
            format!("variable `{name}` does not need to be mutable"),
        );
    }
}

/// Reports whether the use of a binding may require it to be mutable.
///
/// Method calls and calls of the binding itself count, since a `&mut self`
/// receiver or an `FnMut` closure cannot be ruled out syntactically. So does
/// any mention inside a macro body.
fn is_mutating_use(use_site: Node<'_>) -> bool {
    if ancestor_of_kind(use_site, &["token_tree"]).is_some() {
        return true;
    }
    // Climb through field and index projections to the place expression.
    let mut place = use_site;
    while let Some(parent) = place.parent() {
        let projects = match parent.kind() {
            "field_expression" => parent
                .child_by_field_name("value")
                .is_some_and(|value| value.id() == place.id()),
            "index_expression" => burnish_syntax::first_child(parent)
                .is_some_and(|base| base.id() == place.id()),
            _ => false,
        };
        if !projects {
            break;
        }
        place = parent;
    }
    let Some(parent) = place.parent() else {
        return false;
    };
    let is_field = |field: &str| {
        parent
            .child_by_field_name(field)
            .is_some_and(|child| child.id() == place.id())
    };
    match parent.kind() {
        "assignment_expression" | "compound_assignment_expr" => is_field("left"),
        "reference_expression" => has_child_of_kind(parent, "mutable_specifier"),
        "call_expression" => is_field("function"),
        _ => false,
    }
}
