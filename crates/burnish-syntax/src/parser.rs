//! Tree-sitter parsing wrapper with error recovery.
//!
//! This module wraps the raw Tree-sitter parser for the Rust grammar. The
//! parser is error tolerant: it always yields a tree, and syntax problems show
//! up as ERROR or MISSING nodes that [`collect_errors`] turns into
//! [`SyntaxErrorInfo`] values.

use std::ops::Range;

use crate::error::SyntaxError;
use crate::position::point_to_one_based;

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();

        // Extract context: the text of the error node, truncated if too long
        let context = source
            .get(byte_range.clone())
            .map(|s| {
                if s.len() > 50 {
                    let truncated: String = s.chars().take(47).collect();
                    format!("{truncated}...")
                } else {
                    s.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let (line, column) = point_to_one_based(node.start_position());

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Tree-sitter parser configured for Rust sources.
pub struct Parser {
    inner: tree_sitter::Parser,
}

impl Parser {
    /// Creates a new parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the Tree-sitter parser cannot be initialised
    /// with the Rust grammar.
    pub fn new() -> Result<Self, SyntaxError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&tree_sitter_rust::LANGUAGE.into())
            .map_err(|e| SyntaxError::parser_init(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Parses source code from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree. This
    /// is rare and typically indicates a parser configuration issue.
    pub fn parse(&mut self, source: &str) -> Result<tree_sitter::Tree, SyntaxError> {
        self.reparse(source, None)
    }

    /// Parses source code, reusing an edited previous tree when given.
    ///
    /// The old tree must already have been told about every edit through
    /// `tree_sitter::Tree::edit`, otherwise node positions come out wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if the parser fails to produce a syntax tree.
    pub fn reparse(
        &mut self,
        source: &str,
        old: Option<&tree_sitter::Tree>,
    ) -> Result<tree_sitter::Tree, SyntaxError> {
        self.inner
            .parse(source, old)
            .ok_or_else(|| SyntaxError::parse("parsing failed"))
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

/// Recursively checks if a node or any of its descendants is an ERROR node.
pub(crate) fn has_error_nodes(node: tree_sitter::Node<'_>) -> bool {
    if node.is_error() || node.is_missing() {
        return true;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_error_nodes(child) {
            return true;
        }
    }

    false
}

/// Collects every ERROR and MISSING node below `node`.
pub(crate) fn collect_errors(node: tree_sitter::Node<'_>, source: &str) -> Vec<SyntaxErrorInfo> {
    let mut errors = Vec::new();
    collect_error_nodes(node, source, &mut errors);
    errors
}

fn collect_error_nodes(
    node: tree_sitter::Node<'_>,
    source: &str,
    errors: &mut Vec<SyntaxErrorInfo>,
) {
    if node.is_error() || node.is_missing() {
        errors.push(SyntaxErrorInfo::from_node(node, source));
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_error_nodes(child, source, errors);
    }
}
