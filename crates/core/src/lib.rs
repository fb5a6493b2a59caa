pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod message;
pub mod payload;

pub use config::{BackendConfig, Config, FileLoggingConfig, LogFormat, LoggingConfig};
pub use error::{ConfigError, Error, Result};
pub use format::{SentimentStyle, format_section, format_summary};
pub use message::{ChatMessage, Role};
pub use payload::{ConversationReply, Field, SectionRecord, SoapRecord, SummaryRecord};
