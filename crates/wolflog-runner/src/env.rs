//! Environment variable configuration for the runner
//!
//! Every setting has a default; command-line flags take precedence over the
//! values read here.

use std::env;
use std::path::PathBuf;
use tracing::warn;
use wolflog_lib::OutputFormat;

pub const LOG_DIR_VAR: &str = "WOLFLOG_DIR";
pub const OUTPUT_VAR: &str = "WOLFLOG_OUTPUT";

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILTER: &str = "warn,wolflog_lib=info,wolflog_runner=info";

/// Directory used to resolve transcript names that are not existing paths
pub fn log_dir() -> PathBuf {
    env::var(LOG_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Default output format, falling back to JSON on unknown values
pub fn output_format() -> OutputFormat {
    match env::var(OUTPUT_VAR) {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!("[env] Ignoring {}: {}", OUTPUT_VAR, e);
            OutputFormat::default()
        }),
        Err(_) => OutputFormat::default(),
    }
}

/// Log filter directive used when `RUST_LOG` is unset
pub fn log_filter() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        assert!(!DEFAULT_LOG_DIR.is_empty());
        assert!(DEFAULT_LOG_FILTER.contains("wolflog_lib"));
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
