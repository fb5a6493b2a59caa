use crate::Backend;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use notetaker_core::{ConversationReply, Error, Result};

/// Scripted answer for one exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MockResponse {
    /// A decoded JSON reply body
    Reply {
        body: serde_json::Value,
        #[serde(default)]
        delay_ms: u64,
    },
    /// A raw body, decoded the same way an HTTP body is
    Raw {
        body: String,
        #[serde(default)]
        delay_ms: u64,
    },
    /// The exchange fails before any body arrives
    Transport {
        message: String,
        #[serde(default)]
        delay_ms: u64,
    },
}

impl MockResponse {
    pub fn reply(body: serde_json::Value) -> Self {
        Self::Reply { body, delay_ms: 0 }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into(), delay_ms: 0 }
    }

    /// Same response, answered after `delay_ms`
    pub fn delayed(self, delay: u64) -> Self {
        match self {
            Self::Reply { body, .. } => Self::Reply { body, delay_ms: delay },
            Self::Raw { body, .. } => Self::Raw { body, delay_ms: delay },
            Self::Transport { message, .. } => Self::Transport { message, delay_ms: delay },
        }
    }

    fn delay_ms(&self) -> u64 {
        match self {
            Self::Reply { delay_ms, .. } | Self::Raw { delay_ms, .. } | Self::Transport { delay_ms, .. } => *delay_ms,
        }
    }
}

/// Mock script loaded from TOML
#[derive(Debug, Deserialize)]
struct MockScript {
    responses: Vec<MockResponse>,
}

/// Backend that answers from a script, in order, without network access
pub struct MockBackend {
    responses: Vec<MockResponse>,
    current: AtomicUsize,
    requests: std::sync::Mutex<Vec<ChatRequest>>,
}

impl MockBackend {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self { responses, current: AtomicUsize::new(0), requests: std::sync::Mutex::new(Vec::new()) }
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let script: MockScript =
            toml::from_str(toml_str).map_err(|e| Error::Parse(format!("failed to parse mock responses: {}", e)))?;
        Ok(Self::new(script.responses))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let index = self.current.fetch_add(1, Ordering::SeqCst);
        self.responses.get(index).cloned()
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ConversationReply> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let Some(response) = self.next_response() else {
            return Err(Error::Backend(format!(
                "no more mock responses configured (available: {})",
                self.responses.len()
            )));
        };

        let delay = response.delay_ms();
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        match response {
            MockResponse::Reply { body, .. } => ConversationReply::from_value(&body),
            MockResponse::Raw { body, .. } => ConversationReply::from_json_str(&body),
            MockResponse::Transport { message, .. } => Err(Error::Backend(message)),
        }
    }

    async fn health(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(0)
    }
}
