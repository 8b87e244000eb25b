//! Prompt construction and recipe generation.

use crate::services::parser::{INGREDIENTS_MARKER, INSTRUCTIONS_MARKER, TITLE_MARKER};
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use crate::services::secrets::ApiCredentials;
use std::sync::Arc;

/// Builds the completion prompt for a recipe request.
///
/// The marker tokens are a fixed contract with the parser: the model is asked
/// to frame title, ingredients, and instructions with them.
pub fn build_prompt(ingredients: &[String], language: &str, units: &str) -> String {
    let ingredients_list = ingredients.join(", ");
    format!(
        "Given the following ingredients: {ingredients_list} - give me a recipe. \
        Note that the entire recipe including the title, ingredients, and instructions \
        must be written in {language} language. The recipe should use {units} units, \
        and assume I have all spices. Please format the response with '{TITLE_MARKER}' \
        followed by the title, '{INGREDIENTS_MARKER}' followed by the list of \
        ingredients, '{INSTRUCTIONS_MARKER}' followed by the instructions."
    )
}

/// One generation call: build the prompt, call the provider once, return the
/// raw response text unmodified.
#[derive(Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn TextProvider>,
    temperature: f32,
}

impl RecipeGenerator {
    pub fn new(provider: Arc<dyn TextProvider>, temperature: f32) -> Self {
        Self {
            provider,
            temperature,
        }
    }

    pub async fn generate(
        &self,
        ingredients: &[String],
        language: &str,
        units: &str,
        credentials: &ApiCredentials,
    ) -> Result<String, ProviderError> {
        let prompt = build_prompt(ingredients, language, units);
        let params = GenerationParams {
            temperature: Some(self.temperature),
            max_tokens: None,
        };

        tracing::debug!(
            ingredient_count = ingredients.len(),
            language = %language,
            units = %units,
            "Requesting recipe generation"
        );

        self.provider.generate(&prompt, credentials, &params).await
    }
}
