//! `string-concat-to-format`: folds `"a".to_string() + &b + "c"` into a
//! single `format!`.

use burnish_syntax::{Node, named_children};

use super::binary_operator;
use crate::rewrite::Rewrite;
use crate::rule::{RuleContext, StructuralRule};

pub(crate) const RULE: StructuralRule =
    StructuralRule::new("string-concat-to-format", &["binary_expression"], check);

/// One operand of the chain.
enum Piece<'s> {
    /// Contents of a string literal, without the quotes.
    Literal(&'s str),
    /// An expression formatted with `{}`.
    Argument(&'s str),
}

fn check(node: Node<'_>, context: &RuleContext<'_>) -> Option<Rewrite> {
    let source = context.source();
    if binary_operator(node, source) != Some("+") {
        return None;
    }
    // Only the outermost `+` of a chain is rewritten.
    if node
        .parent()
        .is_some_and(|parent| binary_operator(parent, source) == Some("+"))
    {
        return None;
    }

    let mut operands = Vec::new();
    let mut head = node;
    while binary_operator(head, source) == Some("+") {
        operands.push(head.child_by_field_name("right")?);
        head = head.child_by_field_name("left")?;
    }
    operands.reverse();

    let mut pieces = vec![Piece::Literal(owned_literal(head, context)?)];
    for operand in operands {
        pieces.push(piece(operand, context)?);
    }
    if !pieces.iter().any(|piece| matches!(piece, Piece::Argument(_))) {
        return None;
    }

    let mut template = String::new();
    let mut arguments = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Literal(text) => template.push_str(&escape_braces(text)),
            Piece::Argument(expression) => {
                template.push_str("{}");
                arguments.push(expression);
            }
        }
    }
    Some(Rewrite::replace(
        node,
        format!("format!(\"{template}\", {})", arguments.join(", ")),
    ))
}

/// Doubles the braces of a literal piece so `format!` prints them. The
/// braces of a `\u{..}` escape are part of the escape and are copied as is.
fn escape_braces(literal: &str) -> String {
    let mut escaped = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                escaped.push(ch);
                let Some(next) = chars.next() else {
                    break;
                };
                escaped.push(next);
                if next == 'u' {
                    for inner in chars.by_ref() {
                        escaped.push(inner);
                        if inner == '}' {
                            break;
                        }
                    }
                }
            }
            '{' => escaped.push_str("{{"),
            '}' => escaped.push_str("}}"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Matches `"lit".to_string()`, `"lit".to_owned()` or `String::from("lit")`.
fn owned_literal<'s>(node: Node<'_>, context: &RuleContext<'s>) -> Option<&'s str> {
    if node.kind() != "call_expression" {
        return None;
    }
    let function = node.child_by_field_name("function")?;
    let arguments = named_children(node.child_by_field_name("arguments")?);
    match function.kind() {
        "field_expression" => {
            let method = context.text(function.child_by_field_name("field")?);
            let receiver = function.child_by_field_name("value")?;
            (matches!(method, "to_string" | "to_owned") && arguments.is_empty())
                .then(|| literal_contents(receiver, context))
                .flatten()
        }
        "scoped_identifier" => match arguments.as_slice() {
            [literal] if context.text(function) == "String::from" => {
                literal_contents(*literal, context)
            }
            _ => None,
        },
        _ => None,
    }
}

fn piece<'s>(operand: Node<'_>, context: &RuleContext<'s>) -> Option<Piece<'s>> {
    match operand.kind() {
        "string_literal" => literal_contents(operand, context).map(Piece::Literal),
        "reference_expression" => {
            let text = context.text(operand);
            // `&mut` operands are not plain string reads.
            if text.starts_with("&mut") {
                return None;
            }
            let value = operand.child_by_field_name("value")?;
            Some(Piece::Argument(context.text(value)))
        }
        _ => None,
    }
}

fn literal_contents<'s>(node: Node<'_>, context: &RuleContext<'s>) -> Option<&'s str> {
    if node.kind() != "string_literal" {
        return None;
    }
    context
        .text(node)
        .strip_prefix('"')
        .and_then(|text| text.strip_suffix('"'))
}
