use reqwest::Client as HttpClient;
use std::time::{Duration, Instant};

use crate::types::*;
use notetaker_core::{BackendConfig, ConversationReply, Error, Result};

/// The conversation backend seen from the client
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Run one exchange.
    ///
    /// `Ok` carries whatever the backend answered, including backend-reported
    /// errors in [`ConversationReply::error`]. `Err` means transport or decode
    /// failure.
    async fn chat(&self, request: &ChatRequest) -> Result<ConversationReply>;

    /// Probe the backend without sending a message
    async fn health(&self) -> HealthCheckResult;
}

/// HTTP backend posting JSON to the chat endpoint
pub struct HttpBackend {
    client: HttpClient,
    base_url: String,
    chat_url: String,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Backend(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url: config.base_url.clone(), chat_url: config.chat_url() })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ConversationReply> {
        tracing::debug!(url = %self.chat_url, "posting chat message");

        let response = self
            .client
            .post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Backend(format!("request to {} failed: {}", self.chat_url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Backend(format!("failed to read response body: {}", e)))?;

        // Errors come back as `{"error": ...}` with a 4xx/5xx status, so the
        // body is decoded regardless of status.
        if !status.is_success() {
            tracing::warn!(status = %status, "backend returned non-success status");
        }

        ConversationReply::from_json_str(&body)
    }

    async fn health(&self) -> HealthCheckResult {
        let start = Instant::now();

        match self.client.get(&self.base_url).send().await {
            Ok(resp) if resp.status().is_success() => HealthCheckResult::healthy(start.elapsed().as_millis() as u64),
            Ok(resp) => HealthCheckResult::unhealthy(format!("Health check failed: HTTP {}", resp.status())),
            Err(e) => HealthCheckResult::unhealthy(format!("Health check failed: {}", e)),
        }
    }
}
