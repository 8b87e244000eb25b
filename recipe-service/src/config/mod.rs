use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Default sampling temperature for recipe generation. Low enough to keep the
/// model on the marker-token format, high enough for recipe variety.
const DEFAULT_TEMPERATURE: f32 = 0.6;

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub openai: OpenAiConfig,
    pub secret_store: SecretStoreConfig,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    /// Completion model (e.g., gpt-3.5-turbo)
    pub model: String,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct SecretStoreConfig {
    pub base_url: String,
    pub token: Secret<String>,
}

impl RecipeConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();
        let default_database = format!("recipes_{}", common.environment);

        Ok(RecipeConfig {
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", None, is_prod)?,
                database: get_env("MONGODB_DATABASE", Some(&default_database), is_prod)?,
            },
            openai: OpenAiConfig {
                api_base: get_env("OPENAI_API_BASE", Some("https://api.openai.com/v1"), is_prod)?,
                model: get_env("OPENAI_MODEL", Some("gpt-3.5-turbo"), is_prod)?,
                temperature: get_env(
                    "OPENAI_TEMPERATURE",
                    Some(&DEFAULT_TEMPERATURE.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_TEMPERATURE),
            },
            secret_store: SecretStoreConfig {
                base_url: get_env("SECRET_STORE_URL", Some("http://localhost:8200"), is_prod)?,
                token: Secret::new(get_env("SECRET_STORE_TOKEN", Some("dev-token"), is_prod)?),
            },
            common,
        })
    }

    /// Name of the credential secret for the current deployment stage.
    pub fn secret_name(&self) -> String {
        format!("{}_secret", self.common.environment)
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
