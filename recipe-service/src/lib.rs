pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::RecipeConfig;
use crate::services::{RecipeDb, RecipeGenerator, SecretStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RecipeConfig,
    pub db: RecipeDb,
    pub generator: RecipeGenerator,
    pub secrets: Arc<dyn SecretStore>,
}

pub async fn build_router(state: AppState) -> Result<Router, AppError> {
    let app = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Single method-routed endpoint; anything but OPTIONS/GET/POST is a
        // 400 invalid-method response rather than a bare 405.
        .route(
            "/",
            get(handlers::recipes::list_recipes)
                .post(handlers::recipes::generate_recipe)
                .options(handlers::recipes::preflight)
                .fallback(handlers::recipes::method_not_supported),
        )
        .with_state(state)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        // Add CORS layer: the surface is called from browsers anywhere
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::OPTIONS, Method::POST, Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        );

    Ok(app)
}
