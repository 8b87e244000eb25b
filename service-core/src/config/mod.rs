use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment stage. Selects the database namespace and the secret name,
    /// and makes unset required variables a startup error when set to `prod`.
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    "dev".to_string()
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut loaded: Config = config.try_deserialize()?;

        // ENVIRONMENT is read directly rather than through the APP__ prefix so
        // the same variable drives deployment tooling and the service.
        if let Ok(environment) = std::env::var("ENVIRONMENT") {
            loaded.environment = environment;
        }

        Ok(loaded)
    }

    pub fn is_prod(&self) -> bool {
        self.environment == "prod"
    }
}
