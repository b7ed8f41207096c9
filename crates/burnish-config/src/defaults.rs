use crate::logging::LogFormat;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default sweep limit for a rewrite pass.
pub const DEFAULT_MAX_PASSES: u32 = burnish::DEFAULT_MAX_PASSES;

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default sweep limit for a rewrite pass.
#[must_use]
pub const fn default_max_passes() -> u32 {
    DEFAULT_MAX_PASSES
}
