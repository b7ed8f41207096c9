//! Diagnostics for the Burnish rewrite engine.
//!
//! Diagnostic-gated rewrite rules only fire on nodes that carry a diagnostic
//! with one of their tags. This crate defines the vocabulary those rules
//! share with whatever produces the facts:
//!
//! - [`Diagnostic`] and [`DiagnosticTag`]: a classified fact about one node
//! - [`DiagnosticSet`]: every diagnostic for one document revision
//! - [`DiagnosticsProvider`]: the seam through which rules obtain them, with
//!   [`RevisionCache`] to memoise per revision
//! - [`Analyzer`]: the built-in provider for Rust sources
//! - [`scope`]: the lexical name resolution the analyser and rules share

mod analyzer;
mod diagnostic;
mod provider;
pub mod scope;
mod tag;

pub use analyzer::Analyzer;
pub use diagnostic::{Diagnostic, DiagnosticSet, Severity};
pub use provider::{DiagnosticsProvider, FixedDiagnostics, RevisionCache};
pub use tag::{DiagnosticTag, tags};
