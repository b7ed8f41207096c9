//! Unit tests for the CLI runtime with configuration loading stubbed out.

use std::cell::RefCell;
use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use burnish_config::Config;
use camino::Utf8PathBuf;
use insta::assert_snapshot;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::config::ConfigLoader;
use crate::errors::AppError;
use crate::run_with_loader;

/// Loader returning defaults and recording what it was given.
#[derive(Default)]
struct DefaultLoader {
    seen: RefCell<Vec<OsString>>,
}

impl ConfigLoader for DefaultLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        self.seen.borrow_mut().extend(args.iter().cloned());
        Ok(Config::default())
    }
}

struct Outcome {
    code: ExitCode,
    stdout: String,
    stderr: String,
}

fn run(loader: &DefaultLoader, args: &[&str]) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run_with_loader(
        std::iter::once("burnish")
            .chain(args.iter().copied())
            .map(OsString::from),
        &mut stdout,
        &mut stderr,
        loader,
    );
    Outcome {
        code,
        stdout: String::from_utf8(stdout).expect("utf-8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf-8 stderr"),
    }
}

struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write source");
        path
    }
}

#[fixture]
fn workspace() -> Workspace {
    let dir = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp dir");
    Workspace { _dir: dir, root }
}

const MESSY: &str = "fn main() -> () {\n    let a = (1);\n    g(a);\n}\n";
const TIDY: &str = "fn main() {\n    let a = 1;\n    g(a);\n}\n";

#[rstest]
fn fix_rewrites_files_in_place(workspace: Workspace) {
    let path = workspace.write("main.rs", MESSY);
    let outcome = run(&DefaultLoader::default(), &["fix", path.as_str()]);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert_eq!(fs::read_to_string(&path).expect("read"), TIDY);
    assert_eq!(
        outcome.stdout,
        format!("{path}: 2 rewrites in 3 passes\n")
    );
}

#[rstest]
fn fix_reports_unchanged_files(workspace: Workspace) {
    let path = workspace.write("main.rs", TIDY);
    let outcome = run(&DefaultLoader::default(), &["fix", path.as_str()]);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert_eq!(outcome.stdout, format!("{path}: unchanged\n"));
}

#[rstest]
fn fix_with_diff_leaves_files_alone(workspace: Workspace) {
    let path = workspace.write("main.rs", MESSY);
    let outcome = run(&DefaultLoader::default(), &["fix", "--diff", path.as_str()]);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert_eq!(fs::read_to_string(&path).expect("read"), MESSY);
    let diff = outcome.stdout.replace(path.as_str(), "main.rs");
    assert_snapshot!(diff, @r"
    --- a/main.rs
    +++ b/main.rs
    @@ -1,4 +1,4 @@
    -fn main() -> () {
    -    let a = (1);
    +fn main() {
    +    let a = 1;
         g(a);
     }
    ");
}

#[rstest]
fn check_lists_matches_and_fails(workspace: Workspace) {
    let path = workspace.write("main.rs", MESSY);
    let outcome = run(&DefaultLoader::default(), &["check", path.as_str()]);

    assert_eq!(outcome.code, ExitCode::from(1));
    assert_eq!(
        outcome.stdout,
        format!("{path}:1:1: explicit-unit-return\n{path}:2:13: unnecessary-parentheses\n")
    );
    assert_eq!(fs::read_to_string(&path).expect("read"), MESSY);
}

#[rstest]
fn check_passes_on_clean_sources(workspace: Workspace) {
    workspace.write("main.rs", TIDY);
    let outcome = run(&DefaultLoader::default(), &["check", workspace.root.as_str()]);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert!(outcome.stdout.is_empty());
}

#[test]
fn rules_lists_the_table() {
    let outcome = run(&DefaultLoader::default(), &["rules"]);
    assert_eq!(outcome.code, ExitCode::SUCCESS);

    let lines: Vec<_> = outcome.stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines.first().is_some_and(|line| line.contains("redundant-trait-impl-visibility")));
    assert!(lines.last().is_some_and(|line| {
        line.contains("unnecessary-parentheses") && line.ends_with("shared")
    }));
}

#[test]
fn config_flags_reach_the_loader() {
    let loader = DefaultLoader::default();
    let outcome = run(&loader, &["--log-filter", "debug", "rules"]);

    assert_eq!(outcome.code, ExitCode::SUCCESS);
    let seen: Vec<_> = loader.seen.borrow().iter().cloned().collect();
    assert_eq!(
        seen,
        vec![
            OsString::from("burnish"),
            OsString::from("--log-filter"),
            OsString::from("debug"),
        ]
    );
}

#[rstest]
fn missing_paths_fail(workspace: Workspace) {
    let missing = workspace.root.join("absent.rs");
    let outcome = run(&DefaultLoader::default(), &["fix", missing.as_str()]);

    assert_eq!(outcome.code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("path does not exist"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let outcome = run(&DefaultLoader::default(), &[]);
    assert_eq!(outcome.code, ExitCode::FAILURE);
    assert!(outcome.stderr.contains("Usage"));
}

#[test]
fn help_goes_to_stdout() {
    let outcome = run(&DefaultLoader::default(), &["--help"]);
    assert_eq!(outcome.code, ExitCode::SUCCESS);
    assert!(outcome.stdout.contains("fix"));
    assert!(outcome.stderr.is_empty());
}
