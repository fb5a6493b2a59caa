use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Environment variable that overrides `backend.base_url`
pub const BACKEND_URL_ENV: &str = "NOTETAKER_BACKEND_URL";

/// Output format for stderr logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string()).into()),
        }
    }
}

/// Where the conversation backend lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Scheme, host and port of the backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the chat endpoint
    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    /// Optional transport timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_chat_path() -> String {
    "/chat".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), chat_path: default_chat_path(), timeout_secs: None }
    }
}

impl BackendConfig {
    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.chat_path)
    }
}

/// File logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Log file name prefix; files roll daily
    #[serde(default = "default_file_prefix")]
    pub prefix: String,
}

fn default_file_prefix() -> String {
    "physician_notetaker".to_string()
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, prefix: default_file_prefix() }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Replace patient and physician message text with its length in logs
    #[serde(default = "default_mask")]
    pub mask_patient_text: bool,

    #[serde(default)]
    pub file: FileLoggingConfig,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_mask() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            mask_patient_text: default_mask(),
            file: FileLoggingConfig::default(),
        }
    }
}

/// Root configuration structure for notetaker.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Apply `NOTETAKER_BACKEND_URL` if it is set
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV)
            && !url.trim().is_empty()
        {
            self.backend.base_url = url.trim().to_string();
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let url = &self.backend.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.clone()).into());
        }

        if !self.backend.chat_path.starts_with('/') {
            return Err(ConfigError::InvalidChatPath(self.backend.chat_path.clone()).into());
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# Physician Notetaker client configuration

[backend]
# Where the notetaker backend is listening
base_url = "http://127.0.0.1:5000"
# Chat endpoint path (must start with '/')
chat_path = "/chat"
# Transport timeout in seconds (optional, no timeout when unset)
# timeout_secs = 30

[logging]
# Default level: "error", "warn", "info", "debug" or "trace"
level = "warn"
# Output format: "pretty", "json" or "compact"
format = "pretty"
# Keep message text out of the logs
mask_patient_text = true

[logging.file]
# Daily rolling log files under ~/.notetaker/logs
enabled = false
prefix = "physician_notetaker"
"#
    }
}
