//! Application startup and lifecycle management.

use crate::config::RecipeConfig;
use crate::services::providers::openai::OpenAiTextProvider;
use crate::services::providers::TextProvider;
use crate::services::{HttpSecretStore, RecipeDb, RecipeGenerator};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: RecipeConfig) -> Result<Self, AppError> {
        // Connect to database
        let db = RecipeDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        // Initialize the completion provider
        let provider: Arc<dyn TextProvider> =
            Arc::new(OpenAiTextProvider::new(config.openai.clone()));
        let generator = RecipeGenerator::new(provider, config.openai.temperature);
        tracing::info!(
            model = %config.openai.model,
            "Initialized OpenAI text provider"
        );

        // Initialize the secret store client
        let secrets = Arc::new(HttpSecretStore::new(&config.secret_store));
        tracing::info!(
            endpoint = %config.secret_store.base_url,
            "Initialized secret store client"
        );

        let state = AppState {
            config: config.clone(),
            db,
            generator,
            secrets,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Recipe service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &RecipeDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state)
            .await
            .map_err(|e| std::io::Error::other(format!("Failed to build router: {}", e)))?;

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
