use thiserror::Error;

/// Result type alias for notetaker-core
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the notetaker client
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error for file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend exchange errors (transport or undecodable body)
    #[error("backend error: {0}")]
    Backend(String),

    /// Parse/serialization errors
    #[error("parse error: {0}")]
    Parse(String),

    /// Logging setup errors
    #[error("logging error: {0}")]
    Logging(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

/// Configuration-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// Backend URL is not http(s)
    #[error("invalid backend url: {0}")]
    InvalidBaseUrl(String),

    /// Chat path must be absolute
    #[error("chat path must start with '/': {0}")]
    InvalidChatPath(String),

    /// Unknown log format
    #[error("invalid log format: {0}")]
    InvalidLogFormat(String),

    /// Home directory could not be resolved
    #[error("could not determine home directory")]
    NoHomeDir,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}
