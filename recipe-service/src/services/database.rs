//! Database operations for the recipe service.

use crate::models::RecipeRecord;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions, ReplaceOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct RecipeDb {
    client: MongoClient,
    db: Database,
}

impl RecipeDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::StorageError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        let recipes = self.recipes();

        // (user_id, date) is the record's composite key; the unique index
        // makes the overwrite-on-same-day contract explicit.
        let user_date_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "date": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_date_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        recipes
            .create_index(user_date_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create user_date index: {}", e);
                AppError::StorageError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::StorageError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub fn recipes(&self) -> Collection<RecipeRecord> {
        self.db.collection("recipes")
    }

    /// Write a recipe, replacing any existing record for the same user and
    /// day. Last writer wins; there is no version check.
    pub async fn upsert_recipe(&self, record: &RecipeRecord) -> Result<(), AppError> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.recipes()
            .replace_one(
                doc! { "user_id": &record.user_id, "date": &record.date },
                record,
                options,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to store recipe: {}", e);
                AppError::StorageError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(())
    }

    /// All recipes for one user, newest day first.
    pub async fn recipes_for_user(&self, user_id: &str) -> Result<Vec<RecipeRecord>, AppError> {
        let find_options = FindOptions::builder().sort(doc! { "date": -1 }).build();

        let cursor = self
            .recipes()
            .find(doc! { "user_id": user_id }, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query recipes: {}", e);
                AppError::StorageError(anyhow::anyhow!(e.to_string()))
            })?;

        let records: Vec<RecipeRecord> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect recipe records: {}", e);
            AppError::StorageError(anyhow::anyhow!(e.to_string()))
        })?;

        Ok(records)
    }
}
