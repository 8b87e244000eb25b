use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Application error, one variant per failure kind so each kind can pick its
/// own status code and response opacity.
///
/// 4xx variants carry client-correctable messages and are returned verbatim.
/// 5xx variants are logged server-side and surfaced as an opaque body; the
/// underlying detail never reaches the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Secret retrieval error: {0}")]
    SecretRetrievalError(anyhow::Error),

    #[error("Generation error: {0}")]
    GenerationError(anyhow::Error),

    #[error("Storage error: {0}")]
    StorageError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::StorageError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error_message, details) = match self {
            AppError::ValidationError(err) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                Some(err.to_string()),
            ),
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            AppError::SecretRetrievalError(err) => {
                tracing::error!(error = %err, "Secret retrieval failed");
                opaque_internal_error()
            }
            AppError::GenerationError(err) => {
                tracing::error!(error = %err, "Recipe generation failed");
                opaque_internal_error()
            }
            AppError::StorageError(err) => {
                tracing::error!(error = %err, "Storage operation failed");
                opaque_internal_error()
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                opaque_internal_error()
            }
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Internal error");
                opaque_internal_error()
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}

fn opaque_internal_error() -> (StatusCode, String, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        None,
    )
}
