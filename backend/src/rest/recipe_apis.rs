//! # REST API for Recipes
//!
//! Endpoints for recipe CRUD and the dry-run cost calculation. Create and
//! update responses always carry freshly computed cost figures; derived
//! fields in a request body simply do not exist in the DTO shapes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::rest::{error_response, AppState};
use crate::rest::mappers::RecipeMapper;
use shared::{
    CalculateCostsRequest, CreateRecipeRequest, RecipeListResponse, UpdateRecipeRequest,
};

/// Create a new recipe; the full cost breakdown is computed before storing
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/recipes - pie={}, variant={}",
        request.pie_name, request.variant
    );

    match state
        .recipe_service
        .create_recipe(RecipeMapper::create_to_command(request))
    {
        Ok(result) => {
            (StatusCode::CREATED, Json(RecipeMapper::to_dto(result.recipe))).into_response()
        }
        Err(e) => {
            error!("Failed to create recipe: {}", e);
            error_response(&e).into_response()
        }
    }
}

/// Get a recipe by id
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/recipes/{}", id);

    match state.recipe_service.get_recipe(&id) {
        Ok(Some(recipe)) => (StatusCode::OK, Json(RecipeMapper::to_dto(recipe))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Recipe not found").into_response(),
        Err(e) => {
            error!("Failed to get recipe: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving recipe").into_response()
        }
    }
}

/// List all recipes
pub async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/recipes");

    match state.recipe_service.list_recipes() {
        Ok(result) => (
            StatusCode::OK,
            Json(RecipeListResponse {
                recipes: result.recipes.into_iter().map(RecipeMapper::to_dto).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list recipes: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing recipes").into_response()
        }
    }
}

/// Update a recipe; all derived figures are recomputed from the merged inputs
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    info!("PUT /api/recipes/{}", id);

    match state
        .recipe_service
        .update_recipe(&id, RecipeMapper::update_to_command(request))
    {
        Ok(result) => (StatusCode::OK, Json(RecipeMapper::to_dto(result.recipe))).into_response(),
        Err(e) => {
            error!("Failed to update recipe: {}", e);
            error_response(&e).into_response()
        }
    }
}

/// Delete a recipe
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/recipes/{}", id);

    match state.recipe_service.delete_recipe(&id) {
        Ok(true) => (StatusCode::NO_CONTENT, "").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Recipe not found").into_response(),
        Err(e) => {
            error!("Failed to delete recipe: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting recipe").into_response()
        }
    }
}

/// Dry-run cost calculation: same engine as create/update, nothing persisted
pub async fn calculate_costs(
    State(state): State<AppState>,
    Json(request): Json<CalculateCostsRequest>,
) -> impl IntoResponse {
    info!("POST /api/recipes/calculate");

    match state
        .recipe_service
        .calculate_costs(RecipeMapper::calculate_to_command(request))
    {
        Ok(result) => (
            StatusCode::OK,
            Json(RecipeMapper::breakdown_to_response(result.breakdown)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to calculate costs: {}", e);
            error_response(&e).into_response()
        }
    }
}
