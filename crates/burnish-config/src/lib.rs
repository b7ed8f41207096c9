//! Layered configuration for the `burnish` binary.
//!
//! Values are merged from built-in defaults, a TOML file (`--config-path` or
//! the discovered `.burnish.toml`), `BURNISH_*` environment variables, and
//! command-line flags, in increasing order of precedence.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_PASSES, default_log_filter, default_log_filter_string,
    default_log_format, default_max_passes,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Configuration flags understood before the subcommand.
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--max-passes",
    "--disabled-rules",
];

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BURNISH")]
pub struct Config {
    #[ortho_config(default = defaults::default_log_filter_string())]
    log_filter: String,
    #[ortho_config(default = defaults::default_log_format())]
    log_format: LogFormat,
    #[ortho_config(default = defaults::DEFAULT_MAX_PASSES)]
    max_passes: u32,
    #[serde(default)]
    #[ortho_config(merge_strategy = "append")]
    disabled_rules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            max_passes: default_max_passes(),
            disabled_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Tracing filter directive, in `EnvFilter` syntax.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for log events.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Maximum number of sweeps per file.
    #[must_use]
    pub const fn max_passes(&self) -> u32 {
        self.max_passes
    }

    /// Names of rules that should not run.
    #[must_use]
    pub fn disabled_rules(&self) -> &[String] {
        &self.disabled_rules
    }
}
