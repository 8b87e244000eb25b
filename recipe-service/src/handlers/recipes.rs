use crate::dtos::{GenerateRecipeRequest, MessageResponse, RecipeListParams};
use crate::models::RecipeRecord;
use crate::services::parser::parse_recipe;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use service_core::error::AppError;
use validator::Validate;

/// GET `/` — all stored recipes for the `user_id` query parameter, newest
/// day first. A user with no records gets an empty array.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = params
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest(anyhow::anyhow!("user_id query parameter is required"))
        })?;

    let records = state.db.recipes_for_user(&user_id).await?;

    Ok(Json(records))
}

/// POST `/` — generate a recipe from the given ingredients and store it.
///
/// Steps run strictly in sequence: resolve credentials, call the completion
/// API once, split the response on the marker tokens, upsert the record for
/// `(user_id, today)`.
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipeRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    let secret_name = state.config.secret_name();
    let credentials = state.secrets.fetch(&secret_name).await?;

    let generated = state
        .generator
        .generate(
            &request.ingredients_list,
            &request.language,
            &request.units,
            &credentials,
        )
        .await?;

    let parsed = parse_recipe(&generated);

    let date = Utc::now().format("%Y-%m-%d").to_string();
    let record = RecipeRecord::new(
        request.user_id.clone(),
        date,
        parsed.title,
        parsed.ingredients,
        parsed.instructions,
    );

    state.db.upsert_recipe(&record).await?;

    tracing::info!(
        user_id = %record.user_id,
        date = %record.date,
        title = %record.title,
        "Recipe generated and stored"
    );

    Ok(Json(MessageResponse {
        message: "Recipe generated and stored successfully".to_string(),
    }))
}

/// Bare OPTIONS `/`. Preflights are answered by the CORS layer before they
/// reach the router; this keeps a plain OPTIONS at 200 with an empty body too.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than OPTIONS/GET/POST.
pub async fn method_not_supported() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(MessageResponse {
            message: "Invalid request method".to_string(),
        }),
    )
}
