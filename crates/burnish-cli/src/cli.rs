//! Command-line interface definition for the `burnish` binary.
//!
//! Configuration flags are handled separately by the configuration loader
//! and must precede the subcommand.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Rewrites Rust sources with an ordered table of cleanup rules.
#[derive(Parser, Debug)]
#[command(name = "burnish", disable_help_subcommand = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Subcommands of the `burnish` binary.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Rewrites `.rs` files in place.
    Fix {
        /// Prints a unified diff instead of writing files.
        #[arg(long)]
        diff: bool,
        /// Files or directories to rewrite.
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<Utf8PathBuf>,
    },
    /// Lists every place a rule would fire, without writing.
    Check {
        /// Files or directories to check.
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<Utf8PathBuf>,
    },
    /// Lists the rule table in priority order.
    Rules,
}
