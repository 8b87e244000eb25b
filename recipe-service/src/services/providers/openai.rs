//! OpenAI chat-completions provider.

use super::{GenerationParams, ProviderError, TextProvider};
use crate::config::OpenAiConfig;
use crate::services::secrets::ApiCredentials;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Header carrying the requester's OpenAI organization id.
const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// OpenAI text provider.
pub struct OpenAiTextProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiTextProvider {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn api_url(&self) -> String {
        format!("{}/chat/completions", self.config.api_base)
    }
}

#[async_trait]
impl TextProvider for OpenAiTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        credentials: &ApiCredentials,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            n: 1,
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to OpenAI API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(credentials.api_key.expose_secret())
            .header(ORGANIZATION_HEADER, credentials.organization.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "OpenAI API error {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ApiError("response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

// ============================================================================
// OpenAI API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    n: u8,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
