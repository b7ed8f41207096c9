//! Lexical name resolution for local bindings and items.
//!
//! Resolution is purely syntactic. From the use site it walks enclosing
//! blocks backwards (the latest preceding `let` wins, so shadowing is
//! respected), then the parameters of the enclosing closure or function, then
//! `const` and `static` items visible from the use site. Bindings introduced
//! by `match` arms and `if let`/`while let` conditions are not tracked; a name
//! bound there resolves to `None`.

use burnish_syntax::{Node, ancestors, has_child_of_kind, named_children, node_text};

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding<'t> {
    /// A local introduced by `let`, a parameter, or a `for` pattern.
    Local {
        /// The node that introduces the binding (`let_declaration`,
        /// `parameter`, `closure_expression` or `for_expression`).
        declaration: Node<'t>,
        /// The identifier inside the pattern that names the binding.
        name: Node<'t>,
        /// Whether the binding is declared `mut`.
        mutable: bool,
        /// The declared type, when the pattern is a plain identifier with a
        /// type annotation.
        declared_type: Option<Node<'t>>,
    },
    /// A `const` or `static` item.
    Item {
        /// The `const_item` or `static_item` node.
        item: Node<'t>,
        /// Whether the item is a `static mut`.
        mutable: bool,
    },
}

impl<'t> Binding<'t> {
    /// Returns the declaring `let`, when the binding comes from one.
    #[must_use]
    pub fn let_declaration(&self) -> Option<Node<'t>> {
        match self {
            Self::Local { declaration, .. } if declaration.kind() == "let_declaration" => {
                Some(*declaration)
            }
            _ => None,
        }
    }
}

/// Resolves the identifier `use_site` to its binding.
///
/// Returns `None` when the name is bound somewhere resolution does not track,
/// or is not bound in this file at all.
#[must_use]
pub fn resolve<'t>(use_site: Node<'t>, source: &str) -> Option<Binding<'t>> {
    let name = node_text(use_site, source);
    let offset = use_site.start_byte();

    let mut previous = use_site;
    for ancestor in ancestors(use_site) {
        match ancestor.kind() {
            "block" => {
                if let Some(binding) = latest_let(ancestor, name, offset, source) {
                    return Some(binding);
                }
            }
            "for_expression" => {
                let in_body = ancestor
                    .child_by_field_name("body")
                    .is_some_and(|body| body.id() == previous.id());
                if in_body
                    && let Some(pattern) = ancestor.child_by_field_name("pattern")
                    && let Some((ident, mutable)) = pattern_binding(pattern, name, source)
                {
                    return Some(local(ancestor, ident, mutable, None));
                }
            }
            "closure_expression" => {
                if let Some(binding) = closure_parameter(ancestor, name, source) {
                    return Some(binding);
                }
            }
            "if_expression" | "while_expression" => {
                if condition_binds(ancestor, name, source) {
                    return None;
                }
            }
            "match_arm" => {
                if ancestor
                    .child_by_field_name("pattern")
                    .is_some_and(|pattern| pattern_binding(pattern, name, source).is_some())
                {
                    return None;
                }
            }
            "function_item" => {
                return function_parameter(ancestor, name, source)
                    .or_else(|| item_binding(use_site, name, source));
            }
            _ => {}
        }
        previous = ancestor;
    }
    item_binding(use_site, name, source)
}

const fn local<'t>(
    declaration: Node<'t>,
    name: Node<'t>,
    mutable: bool,
    declared_type: Option<Node<'t>>,
) -> Binding<'t> {
    Binding::Local {
        declaration,
        name,
        mutable,
        declared_type,
    }
}

/// Finds the last `let` in `block` that ends before `offset` and binds `name`.
fn latest_let<'t>(block: Node<'t>, name: &str, offset: usize, source: &str) -> Option<Binding<'t>> {
    named_children(block)
        .into_iter()
        .rev()
        .filter(|statement| statement.kind() == "let_declaration" && statement.end_byte() <= offset)
        .find_map(|statement| {
            let pattern = statement.child_by_field_name("pattern")?;
            let (ident, nested_mut) = pattern_binding(pattern, name, source)?;
            let plain = pattern.id() == ident.id();
            let mutable = nested_mut || (plain && has_child_of_kind(statement, "mutable_specifier"));
            let declared_type = if plain {
                statement.child_by_field_name("type")
            } else {
                None
            };
            Some(local(statement, ident, mutable, declared_type))
        })
}

fn function_parameter<'t>(function: Node<'t>, name: &str, source: &str) -> Option<Binding<'t>> {
    let parameters = function.child_by_field_name("parameters")?;
    named_children(parameters)
        .into_iter()
        .filter(|parameter| parameter.kind() == "parameter")
        .find_map(|parameter| parameter_binding(parameter, name, source))
}

fn parameter_binding<'t>(parameter: Node<'t>, name: &str, source: &str) -> Option<Binding<'t>> {
    let pattern = parameter.child_by_field_name("pattern")?;
    let (ident, nested_mut) = pattern_binding(pattern, name, source)?;
    let plain = pattern.id() == ident.id();
    let mutable = nested_mut || (plain && has_child_of_kind(parameter, "mutable_specifier"));
    let declared_type = if plain {
        parameter.child_by_field_name("type")
    } else {
        None
    };
    Some(local(parameter, ident, mutable, declared_type))
}

fn closure_parameter<'t>(closure: Node<'t>, name: &str, source: &str) -> Option<Binding<'t>> {
    let parameters = closure.child_by_field_name("parameters")?;
    named_children(parameters).into_iter().find_map(|entry| {
        if entry.kind() == "parameter" {
            parameter_binding(entry, name, source)
        } else {
            let (ident, mutable) = pattern_binding(entry, name, source)?;
            Some(local(closure, ident, mutable, None))
        }
    })
}

fn condition_binds(expression: Node<'_>, name: &str, source: &str) -> bool {
    let Some(condition) = expression.child_by_field_name("condition") else {
        return false;
    };
    std::iter::once(condition)
        .chain(named_children(condition))
        .filter(|node| node.kind() == "let_condition")
        .filter_map(|node| node.child_by_field_name("pattern"))
        .any(|pattern| pattern_binding(pattern, name, source).is_some())
}

/// Finds a `const` or `static` named `name` in any item list enclosing `from`.
fn item_binding<'t>(from: Node<'t>, name: &str, source: &str) -> Option<Binding<'t>> {
    ancestors(from)
        .filter(|scope| matches!(scope.kind(), "source_file" | "declaration_list" | "block"))
        .find_map(|scope| {
            named_children(scope).into_iter().find_map(|item| {
                if !matches!(item.kind(), "const_item" | "static_item") {
                    return None;
                }
                let item_name = item.child_by_field_name("name")?;
                (node_text(item_name, source) == name).then(|| Binding::Item {
                    item,
                    mutable: has_child_of_kind(item, "mutable_specifier"),
                })
            })
        })
}

/// Finds the identifier in `pattern` that binds `name`.
///
/// The flag is `true` when the identifier sits under a `mut` pattern.
pub(crate) fn pattern_binding<'t>(
    pattern: Node<'t>,
    name: &str,
    source: &str,
) -> Option<(Node<'t>, bool)> {
    match pattern.kind() {
        "identifier" => (node_text(pattern, source) == name).then_some((pattern, false)),
        "mut_pattern" => named_children(pattern)
            .into_iter()
            .find_map(|inner| pattern_binding(inner, name, source))
            .map(|(ident, _)| (ident, true)),
        "field_pattern" => {
            let field_name = pattern.child_by_field_name("name")?;
            pattern.child_by_field_name("pattern").map_or_else(
                || {
                    (node_text(field_name, source) == name)
                        .then(|| (field_name, has_child_of_kind(pattern, "mutable_specifier")))
                },
                |inner| pattern_binding(inner, name, source),
            )
        }
        "tuple_struct_pattern" | "struct_pattern" => {
            let path = pattern.child_by_field_name("type");
            named_children(pattern)
                .into_iter()
                .filter(|child| path.is_none_or(|path| path.id() != child.id()))
                .find_map(|child| pattern_binding(child, name, source))
        }
        "match_pattern" => named_children(pattern)
            .into_iter()
            .next()
            .and_then(|inner| pattern_binding(inner, name, source)),
        "ref_pattern" | "tuple_pattern" | "slice_pattern" | "captured_pattern"
        | "reference_pattern" => named_children(pattern)
            .into_iter()
            .find_map(|child| pattern_binding(child, name, source)),
        _ => None,
    }
}
