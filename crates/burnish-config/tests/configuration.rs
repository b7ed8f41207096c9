//! Precedence and failure behaviour of configuration loading.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::sync::{Mutex, MutexGuard};

use burnish_config::{Config, DEFAULT_LOG_FILTER, DEFAULT_MAX_PASSES, LogFormat};
use once_cell::sync::Lazy;
use ortho_config::OrthoConfig;
use rstest::{fixture, rstest};
use tempfile::TempDir;

static ENV_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Serialises environment access and restores the previous value on drop.
struct EnvOverride {
    key: &'static str,
    previous: Option<OsString>,
    guard: Option<MutexGuard<'static, ()>>,
}

impl EnvOverride {
    fn set_var(key: &'static str, value: &OsStr) -> Self {
        let guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        let previous = std::env::var_os(key);
        // Environment mutation is unsafe in the 2024 edition; the guard keeps
        // tests in this binary from racing on it.
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            previous,
            guard: Some(guard),
        }
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(value) => unsafe { std::env::set_var(self.key, value) },
            None => unsafe { std::env::remove_var(self.key) },
        }
        drop(self.guard.take());
    }
}

fn args(extra: &[&str]) -> Vec<OsString> {
    std::iter::once("burnish")
        .chain(extra.iter().copied())
        .map(OsString::from)
        .collect()
}

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

#[test]
fn defaults_apply_without_overrides() {
    let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
    let config = Config::load_from_iter(args(&[])).expect("load");

    assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    assert_eq!(config.log_format(), LogFormat::Compact);
    assert_eq!(config.max_passes(), DEFAULT_MAX_PASSES);
    assert!(config.disabled_rules().is_empty());
    assert_eq!(config, Config::default());
}

#[rstest]
fn file_values_are_loaded(temp_dir: TempDir) {
    let path = temp_dir.path().join("burnish.toml");
    fs::write(
        &path,
        "log_format = \"json\"\nmax_passes = 3\ndisabled_rules = [\"unused-mut\"]\n",
    )
    .expect("write config");
    let path_arg = path.to_str().expect("utf-8 path");

    let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
    let config = Config::load_from_iter(args(&["--config-path", path_arg])).expect("load");

    assert_eq!(config.log_format(), LogFormat::Json);
    assert_eq!(config.max_passes(), 3);
    assert_eq!(config.disabled_rules(), ["unused-mut".to_owned()]);
}

#[rstest]
fn cli_flags_override_the_file(temp_dir: TempDir) {
    let path = temp_dir.path().join("burnish.toml");
    fs::write(&path, "max_passes = 3\nlog_filter = \"info\"\n").expect("write config");
    let path_arg = path.to_str().expect("utf-8 path");

    let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
    let config = Config::load_from_iter(args(&[
        "--config-path",
        path_arg,
        "--max-passes",
        "5",
    ]))
    .expect("load");

    assert_eq!(config.max_passes(), 5);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn environment_overrides_defaults() {
    let _env = EnvOverride::set_var("BURNISH_LOG_FILTER", OsStr::new("debug"));
    let config = Config::load_from_iter(args(&[])).expect("load");
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn cli_flags_override_the_environment() {
    let _env = EnvOverride::set_var("BURNISH_MAX_PASSES", OsStr::new("2"));
    let config = Config::load_from_iter(args(&["--max-passes", "4"])).expect("load");
    assert_eq!(config.max_passes(), 4);
}

#[rstest]
fn malformed_file_is_an_error(temp_dir: TempDir) {
    let path = temp_dir.path().join("burnish.toml");
    fs::write(&path, "max_passes = \"many\"\n").expect("write config");
    let path_arg = path.to_str().expect("utf-8 path");

    let _lock = ENV_MUTEX.lock().expect("env mutex poisoned");
    let result = Config::load_from_iter(args(&["--config-path", path_arg]));
    assert!(result.is_err(), "expected a load error, got {result:?}");
}
