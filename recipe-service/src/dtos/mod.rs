//! Request and response types for the HTTP surface.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /`.
///
/// Fields default to empty when absent so a missing field surfaces as a
/// validation failure (400) rather than a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "ingredients_list is required"))]
    pub ingredients_list: Vec<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "language is required"))]
    pub language: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "units is required"))]
    pub units: String,
}

/// Query parameters of `GET /`.
#[derive(Debug, Deserialize)]
pub struct RecipeListParams {
    pub user_id: Option<String>,
}

/// Plain message body used for success and method-level responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
