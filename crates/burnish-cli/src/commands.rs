//! Execution of the `fix`, `check`, and `rules` subcommands.

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use burnish::{RewritePass, registry};
use burnish_config::Config;
use camino::{Utf8Path, Utf8PathBuf};
use similar::TextDiff;
use tracing::debug;

use crate::cli::CliCommand;
use crate::discover::rust_files;
use crate::errors::AppError;

const COMMAND_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::command");

/// Exit code of `check` when at least one rule would fire.
const CHANGES_PENDING: u8 = 1;

pub(crate) fn execute<W: Write>(
    command: CliCommand,
    config: &Config,
    stdout: &mut W,
) -> Result<ExitCode, AppError> {
    match command {
        CliCommand::Fix { diff, paths } => fix(&paths, diff, config, stdout),
        CliCommand::Check { paths } => check(&paths, config, stdout),
        CliCommand::Rules => rules(stdout),
    }
}

fn build_pass(config: &Config) -> Result<RewritePass, AppError> {
    let dispatcher = registry()
        .dispatcher(config.disabled_rules())
        .map_err(AppError::Rules)?;
    Ok(RewritePass::new(dispatcher).with_max_passes(config.max_passes()))
}

fn read(path: &Utf8Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|error| AppError::read(path, error))
}

fn fix<W: Write>(
    paths: &[Utf8PathBuf],
    diff: bool,
    config: &Config,
    stdout: &mut W,
) -> Result<ExitCode, AppError> {
    let pass = build_pass(config)?;
    for path in rust_files(paths)? {
        debug!(target: COMMAND_TARGET, %path, "fixing");
        let source = read(&path)?;
        let report = pass.run(&source).map_err(|error| AppError::Rewrite {
            path: path.clone(),
            source: error,
        })?;

        if diff {
            if report.changed() {
                write!(stdout, "{}", unified_diff(&path, &source, &report.output))?;
            }
            continue;
        }

        if report.changed() {
            fs::write(&path, &report.output).map_err(|error| AppError::write(&path, error))?;
            let limit = if report.converged {
                ""
            } else {
                " (pass limit reached)"
            };
            writeln!(
                stdout,
                "{path}: {} rewrites in {} passes{limit}",
                report.applied.len(),
                report.passes
            )?;
        } else {
            writeln!(stdout, "{path}: unchanged")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check<W: Write>(
    paths: &[Utf8PathBuf],
    config: &Config,
    stdout: &mut W,
) -> Result<ExitCode, AppError> {
    let pass = build_pass(config)?;
    let mut pending = false;
    for path in rust_files(paths)? {
        let source = read(&path)?;
        let hits = pass.plan(&source).map_err(|error| AppError::Rewrite {
            path: path.clone(),
            source: error,
        })?;
        for hit in &hits {
            writeln!(stdout, "{path}:{}:{}: {}", hit.line, hit.column, hit.rule)?;
        }
        pending |= !hits.is_empty();
    }
    Ok(if pending {
        ExitCode::from(CHANGES_PENDING)
    } else {
        ExitCode::SUCCESS
    })
}

fn rules<W: Write>(stdout: &mut W) -> Result<ExitCode, AppError> {
    for info in registry().describe() {
        let scope = if info.requires_exclusive_write {
            "exclusive"
        } else {
            "shared"
        };
        writeln!(
            stdout,
            "{:>2}  {:<32} {:<30} {scope}",
            info.priority,
            info.name,
            info.strategy.to_string()
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

fn unified_diff(path: &Utf8Path, before: &str, after: &str) -> String {
    TextDiff::from_lines(before, after)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
