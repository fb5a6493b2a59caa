//! Logging setup built on the tracing ecosystem.
//!
//! # Environment Variables
//!
//! - `NOTETAKER_LOG`: Filter directive (like `RUST_LOG`), e.g., `notetaker_ui=debug`
//! - `NOTETAKER_LOG_FORMAT`: Output format for stderr: `pretty`, `json`, `compact`
//! - `NOTETAKER_LOG_DIR`: Directory for log files (default `~/.notetaker/logs`)
//!
//! # Configuration
//!
//! Logging is configured via the `[logging]` section in `notetaker.toml`:
//!
//! ```toml
//! [logging]
//! level = "warn"
//! format = "pretty"
//! mask_patient_text = true
//!
//! [logging.file]
//! enabled = false
//! prefix = "physician_notetaker"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use notetaker_core::config::LoggingConfig;
//! use notetaker_core::logging::{self, Sink};
//!
//! let _guard = logging::init_logging(&LoggingConfig::default(), Sink::Stderr)?;
//! # Ok::<(), notetaker_core::Error>(())
//! ```

use crate::Error;
use crate::config::{LogFormat, LoggingConfig};
use std::env;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log events may be written besides the optional file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    /// Log to stderr (plain CLI commands)
    Stderr,
    /// The terminal is owned by the TUI; only the file layer may write
    FileOnly,
}

/// Keeps the non-blocking file writer alive; drop it on shutdown to flush.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    let filter = env::var("NOTETAKER_LOG")
        .ok()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.level.clone());

    EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Environment override first, then TTY detection, then the configured format.
fn detect_format(config: &LoggingConfig) -> LogFormat {
    if let Ok(fmt_str) = env::var("NOTETAKER_LOG_FORMAT")
        && let Ok(fmt) = LogFormat::from_str(&fmt_str)
    {
        return fmt;
    }

    if config.format == LogFormat::Pretty && !atty::is(atty::Stream::Stderr) {
        return LogFormat::Compact;
    }

    config.format
}

/// Resolve the log directory.
pub fn log_dir() -> Result<PathBuf, Error> {
    if let Ok(custom_dir) = env::var("NOTETAKER_LOG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map_err(|_| crate::error::ConfigError::NoHomeDir)?;

    Ok(PathBuf::from(home).join(".notetaker").join("logs"))
}

fn stderr_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Pretty => fmt::layer().pretty().with_writer(io::stderr).with_ansi(true).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(io::stderr).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(io::stderr).boxed(),
    }
}

/// Initialize the global tracing subscriber.
///
/// Sets up the env filter, an optional stderr layer and, when
/// `[logging.file]` is enabled, a daily-rolling JSON file layer.
pub fn init_logging(config: &LoggingConfig, sink: Sink) -> Result<LoggingGuard, Error> {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    let mut guard = None;

    if sink == Sink::Stderr {
        layers.push(stderr_layer(detect_format(config)));
    }

    if config.file.enabled {
        let dir = log_dir()?;
        std::fs::create_dir_all(&dir).map_err(|e| Error::Logging(format!("failed to create log directory: {}", e)))?;

        let file_appender = tracing_appender::rolling::daily(dir, format!("{}.log", config.file.prefix));
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        layers.push(fmt::layer().json().with_writer(non_blocking).boxed());
        guard = Some(file_guard);
    }

    Registry::default()
        .with(layers)
        .with(build_env_filter(config))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!(level = %config.level, file = config.file.enabled, ?sink, "logging initialized");
    Ok(LoggingGuard { _file: guard })
}

/// Message text as it may appear in a log event.
pub fn redact_message(text: &str, mask: bool) -> String {
    if mask { format!("[{} chars]", text.chars().count()) } else { text.to_string() }
}
