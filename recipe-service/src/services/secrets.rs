//! Secret store client.
//!
//! Resolves named credential bundles at request time. Nothing is cached: a
//! bundle lives only in memory for the invocation that fetched it.

use crate::config::SecretStoreConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for secret resolution.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret {0} not found")]
    NotFound(String),

    #[error("secret store request failed: {0}")]
    Store(String),

    #[error("secret {0} is malformed: {1}")]
    Malformed(String, String),
}

impl From<SecretError> for AppError {
    fn from(err: SecretError) -> Self {
        AppError::SecretRetrievalError(anyhow::Error::new(err))
    }
}

/// Credentials for the completion API, fetched per request.
#[derive(Clone)]
pub struct ApiCredentials {
    pub organization: String,
    pub api_key: Secret<String>,
}

/// Secret payload as stored: a JSON object of credential fields.
#[derive(Debug, Deserialize)]
struct SecretPayload {
    openai_org: String,
    openai_key: String,
}

/// Trait for secret resolution backends.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the named credential bundle.
    async fn fetch(&self, name: &str) -> Result<ApiCredentials, SecretError>;
}

/// HTTP secret-store client: bearer-token lookup of a named secret.
pub struct HttpSecretStore {
    client: Client,
    base_url: String,
    token: Secret<String>,
}

impl HttpSecretStore {
    pub fn new(config: &SecretStoreConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    fn secret_url(&self, name: &str) -> String {
        format!("{}/v1/secrets/{}", self.base_url, name)
    }
}

#[async_trait]
impl SecretStore for HttpSecretStore {
    async fn fetch(&self, name: &str) -> Result<ApiCredentials, SecretError> {
        let response = self
            .client
            .get(self.secret_url(name))
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| SecretError::Store(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(SecretError::NotFound(name.to_string()));
        }

        if !response.status().is_success() {
            return Err(SecretError::Store(format!(
                "secret store returned {}",
                response.status()
            )));
        }

        let payload: SecretPayload = response
            .json()
            .await
            .map_err(|e| SecretError::Malformed(name.to_string(), e.to_string()))?;

        Ok(ApiCredentials {
            organization: payload.openai_org,
            api_key: Secret::new(payload.openai_key),
        })
    }
}

/// Mock secret store for tests.
pub struct MockSecretStore {
    enabled: bool,
}

impl MockSecretStore {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A store that fails every fetch, for error-path tests.
    pub fn failing() -> Self {
        Self { enabled: false }
    }
}

impl Default for MockSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for MockSecretStore {
    async fn fetch(&self, name: &str) -> Result<ApiCredentials, SecretError> {
        if !self.enabled {
            return Err(SecretError::Store(
                "mock secret store not enabled".to_string(),
            ));
        }

        Ok(ApiCredentials {
            organization: "org-test".to_string(),
            api_key: Secret::new(format!("sk-test-{}", name)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_url_joins_base_and_name() {
        let store = HttpSecretStore::new(&SecretStoreConfig {
            base_url: "http://localhost:8200".to_string(),
            token: Secret::new("test-token".to_string()),
        });

        assert_eq!(
            store.secret_url("prod_secret"),
            "http://localhost:8200/v1/secrets/prod_secret"
        );
    }

    #[tokio::test]
    async fn mock_store_returns_credentials_for_name() {
        let store = MockSecretStore::new();
        let credentials = store.fetch("dev_secret").await.unwrap();
        assert_eq!(credentials.organization, "org-test");
        assert_eq!(credentials.api_key.expose_secret(), "sk-test-dev_secret");
    }

    #[tokio::test]
    async fn failing_mock_store_errors() {
        let store = MockSecretStore::failing();
        assert!(store.fetch("dev_secret").await.is_err());
    }
}
