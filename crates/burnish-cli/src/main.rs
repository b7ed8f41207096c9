//! Entrypoint for the `burnish` rewrite tool.
//!
//! The binary delegates to [`burnish_cli::run`], which loads configuration,
//! parses the subcommand, and rewrites or checks the requested files.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    burnish_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
