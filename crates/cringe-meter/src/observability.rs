//! Logging and tracing initialization.
//!
//! Console logging goes to stderr so `--json` output on stdout stays
//! machine-readable. When a log directory is configured, a daily-rolling
//! file layer is added on top.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Resolved observability settings.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Directory for rolling log files. No file logging if unset.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from the environment with a config-file fallback.
    ///
    /// `CRINGE_METER_LOG_DIR` wins over the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_dir = std::env::var_os("CRINGE_METER_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_dir }
    }
}

/// Build the log filter.
///
/// `RUST_LOG` wins outright; otherwise `--quiet` forces errors only,
/// `-v`/`-vv` raise to debug/trace, and the config level is the fallback.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the non-blocking writer guard when file logging is active; the
/// caller must hold it for the process lifetime or buffered lines are lost.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "cringe-meter.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        Ok(None)
    }
}
