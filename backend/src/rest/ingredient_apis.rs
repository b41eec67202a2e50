//! # REST API for the Ingredient Catalog
//!
//! Endpoints for creating, retrieving, updating, and deleting catalog
//! ingredients.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::domain::errors::DomainError;
use crate::rest::{error_response, AppState};
use crate::rest::mappers::IngredientMapper;
use shared::{CreateIngredientRequest, IngredientListResponse, UpdateIngredientRequest};

/// Create a new catalog ingredient
pub async fn create_ingredient(
    State(state): State<AppState>,
    Json(request): Json<CreateIngredientRequest>,
) -> impl IntoResponse {
    info!("POST /api/ingredients - request: {:?}", request);

    match state
        .ingredient_service
        .create_ingredient(IngredientMapper::create_to_command(request))
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(IngredientMapper::to_dto(result.ingredient)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create ingredient: {}", e);
            error_response(&e).into_response()
        }
    }
}

/// Get an ingredient by id
pub async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/ingredients/{}", id);

    match state.ingredient_service.get_ingredient(&id) {
        Ok(Some(ingredient)) => {
            (StatusCode::OK, Json(IngredientMapper::to_dto(ingredient))).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Ingredient not found").into_response(),
        Err(e) => {
            error!("Failed to get ingredient: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving ingredient").into_response()
        }
    }
}

/// List all catalog ingredients
pub async fn list_ingredients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/ingredients");

    match state.ingredient_service.list_ingredients() {
        Ok(result) => (
            StatusCode::OK,
            Json(IngredientListResponse {
                ingredients: result
                    .ingredients
                    .into_iter()
                    .map(IngredientMapper::to_dto)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list ingredients: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing ingredients").into_response()
        }
    }
}

/// Update an ingredient
pub async fn update_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateIngredientRequest>,
) -> impl IntoResponse {
    info!("PUT /api/ingredients/{} - request: {:?}", id, request);

    match state
        .ingredient_service
        .update_ingredient(&id, IngredientMapper::update_to_command(request))
    {
        Ok(result) => (
            StatusCode::OK,
            Json(IngredientMapper::to_dto(result.ingredient)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update ingredient: {}", e);
            // Here the missing ingredient is the request path, not a recipe
            // reference, so it maps to 404 rather than 400.
            if let Some(DomainError::IngredientNotFound { .. }) = e.downcast_ref::<DomainError>() {
                return (StatusCode::NOT_FOUND, e.to_string()).into_response();
            }
            error_response(&e).into_response()
        }
    }
}

/// Delete an ingredient
pub async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/ingredients/{}", id);

    match state.ingredient_service.delete_ingredient(&id) {
        Ok(true) => (StatusCode::NO_CONTENT, "").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Ingredient not found").into_response(),
        Err(e) => {
            error!("Failed to delete ingredient: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting ingredient").into_response()
        }
    }
}
