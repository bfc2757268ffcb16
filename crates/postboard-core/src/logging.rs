//! Tracing subscriber setup.
//!
//! Logs go to `$POSTBOARD_HOME/logs/postboard.log` through a non-blocking
//! writer so the terminal stays owned by the TUI / CLI output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, paths};

/// Environment variable that overrides `[log] filter`.
pub const LOG_ENV: &str = "POSTBOARD_LOG";

const LOG_FILE: &str = "postboard.log";

/// Installs the global subscriber writing to the default log directory.
///
/// Keep the returned guard alive for the lifetime of the process; dropping
/// it flushes and stops the background writer.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Installs the global subscriber writing into `dir`.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_in(dir: &Path, config: &LogConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(build_filter(std::env::var(LOG_ENV).ok().as_deref(), config))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        // Already installed (tests, embedding); keep the existing one.
        tracing::debug!(error = %e, "tracing init skipped");
    }

    Ok(guard)
}

/// Env directive wins over config; an unparsable directive falls back to `info`.
fn build_filter(env_directive: Option<&str>, config: &LogConfig) -> EnvFilter {
    env_directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(config.filter.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("debug"), &LogConfig::default());
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_config_directive_used_without_env() {
        let config = LogConfig {
            filter: "postboard_core=trace".to_string(),
        };
        assert_eq!(build_filter(None, &config).to_string(), "postboard_core=trace");
        assert_eq!(build_filter(Some("  "), &config).to_string(), "postboard_core=trace");
    }

    #[test]
    fn test_init_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        let _guard = init_in(&logs, &LogConfig::default()).unwrap();
        assert!(logs.is_dir());
    }
}
