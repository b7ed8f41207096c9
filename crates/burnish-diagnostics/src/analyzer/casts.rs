//! `USELESS_CAST`: casts to the type an expression already has.

use burnish_syntax::Node;

use super::Sink;
use crate::diagnostic::Severity;
use crate::scope::{self, Binding};
use crate::tag::tags;

const INTEGER_SUFFIXES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];
const FLOAT_SUFFIXES: &[&str] = &["f32", "f64"];

pub(super) fn check_cast(cast: Node<'_>, sink: &mut Sink<'_>) {
    let (Some(value), Some(target_type)) = (
        cast.child_by_field_name("value"),
        cast.child_by_field_name("type"),
    ) else {
        return;
    };
    let target = normalise(sink.text(target_type));

    let already = match value.kind() {
        "integer_literal" | "float_literal" => {
            literal_suffix(sink.text(value)).is_some_and(|suffix| suffix == target)
        }
        "type_cast_expression" => value
            .child_by_field_name("type")
            .is_some_and(|inner| normalise(sink.text(inner)) == target),
        "identifier" => matches!(
            scope::resolve(value, sink.source),
            Some(Binding::Local { declared_type: Some(ty), .. }) if normalise(sink.text(ty)) == target
        ),
        _ => false,
    };

    if already {
        sink.report(
            tags::USELESS_CAST,
            cast,
            Severity::Warning,
            format!("casting to the same type is unnecessary (`{target}` -> `{target}`)"),
        );
    }
}

/// Returns the type suffix of a numeric literal, if it has one.
fn literal_suffix(literal: &str) -> Option<&'static str> {
    let hex = literal.starts_with("0x") || literal.starts_with("0X");
    INTEGER_SUFFIXES
        .iter()
        // In hex literals `f32` is just digits.
        .chain(FLOAT_SUFFIXES.iter().filter(|_| !hex))
        .copied()
        .find(|suffix| literal.ends_with(suffix))
        .filter(|suffix| literal.len() > suffix.len())
}

fn normalise(ty: &str) -> String {
    ty.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1u8", Some("u8"))]
    #[case("1_000i128", Some("i128"))]
    #[case("2.5f32", Some("f32"))]
    #[case("0x1f32", None)]
    #[case("0xffu8", Some("u8"))]
    #[case("42", None)]
    #[case("1.0", None)]
    fn suffixes_are_recognised(#[case] literal: &str, #[case] expected: Option<&str>) {
        assert_eq!(literal_suffix(literal), expected);
    }
}
