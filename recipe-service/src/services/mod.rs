pub mod database;
pub mod generator;
pub mod parser;
pub mod providers;
pub mod secrets;

pub use database::RecipeDb;
pub use generator::{build_prompt, RecipeGenerator};
pub use parser::{parse_recipe, ParsedRecipe};
pub use secrets::{ApiCredentials, HttpSecretStore, MockSecretStore, SecretStore};
