//! Text-generation provider abstraction.
//!
//! A trait-based seam over the completion API so the real client can be
//! swapped for a mock in tests.

pub mod mock;
pub mod openai;

use crate::services::secrets::ApiCredentials;
use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::GenerationError(anyhow::Error::new(err))
    }
}

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
}

/// Trait for text completion providers.
///
/// Credentials are an explicit parameter of every call: no provider-global
/// state holds an API key, so a reused process cannot carry one invocation's
/// credentials into the next.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn generate(
        &self,
        prompt: &str,
        credentials: &ApiCredentials,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;
}
