//! # REST API for Bulk Import
//!
//! Accepts already-parsed recipe rows plus the ingredient alias table and
//! feeds them through the normal recipe creation path one row at a time.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::rest::{error_response, AppState};
use crate::rest::mappers::RecipeMapper;
use shared::ImportRecipesRequest;

/// Import a batch of recipe rows. The response reports a per-row outcome;
/// an invalid alias table rejects the whole request up front.
pub async fn import_recipes(
    State(state): State<AppState>,
    Json(request): Json<ImportRecipesRequest>,
) -> impl IntoResponse {
    info!("POST /api/import/recipes - {} rows", request.rows.len());

    match state
        .import_service
        .import_recipes(RecipeMapper::import_to_command(request))
    {
        Ok(result) => (
            StatusCode::OK,
            Json(RecipeMapper::import_result_to_response(result)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to import recipes: {}", e);
            error_response(&e).into_response()
        }
    }
}
