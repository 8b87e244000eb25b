//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use crate::services::secrets::ApiCredentials;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock text provider returning a canned response.
///
/// Counts calls so tests can assert how often the completion API would have
/// been reached.
pub struct MockTextProvider {
    enabled: bool,
    response: String,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            enabled: true,
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that fails every call, for error-path tests.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            response: String::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _credentials: &ApiCredentials,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        Ok(self.response.clone())
    }
}
