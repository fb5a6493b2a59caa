pub mod adapter;
pub mod mock;
pub mod types;

use std::sync::Arc;

pub use adapter::{Backend, HttpBackend};
pub use mock::{MockBackend, MockResponse};
pub use types::{ChatRequest, HealthCheckResult};

pub use notetaker_core::{Error, Result};

/// Pick the backend for a run: a mock script when one is given, HTTP otherwise.
pub struct BackendFactory;

impl BackendFactory {
    pub fn create(config: &notetaker_core::BackendConfig, mock_script: Option<&std::path::Path>) -> Result<Arc<dyn Backend>> {
        match mock_script {
            Some(path) => {
                tracing::info!(path = %path.display(), "using mock backend");
                Ok(Arc::new(MockBackend::from_file(path)?))
            }
            None => Ok(Arc::new(HttpBackend::new(config)?)),
        }
    }
}
