//! # REST API Interface Layer
//!
//! HTTP endpoints for the pie costing application. This layer handles:
//! - Request/response serialization via the `shared` DTO crate
//! - Translation of domain errors to HTTP status codes
//! - CORS configuration for browser clients
//! - Request logging
//!
//! It is a pure translation layer: no business logic, no storage access.
//! Validation and data-integrity failures from the domain map to 400-class
//! responses naming the offending field or reference; unknown entity ids on
//! direct lookups map to 404; anything else is a 500.

pub mod import_apis;
pub mod ingredient_apis;
pub mod labor_apis;
pub mod mappers;
pub mod recipe_apis;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::errors::DomainError;
use crate::domain::{ImportService, IngredientService, LaborService, RecipeService};
use crate::storage::csv::CsvConnection;

/// Main application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub ingredient_service: IngredientService,
    pub labor_service: LaborService,
    pub recipe_service: RecipeService,
    pub import_service: ImportService,
}

/// Initialize the backend services over a storage connection.
pub fn initialize_backend(connection: CsvConnection) -> Result<AppState> {
    info!("Setting up domain services");

    let connection = Arc::new(connection);
    let ingredient_service = IngredientService::new(connection.clone());
    let labor_service = LaborService::new(connection.clone());
    let recipe_service = RecipeService::new(connection, ingredient_service.clone());
    let import_service = ImportService::new(ingredient_service.clone(), recipe_service.clone());

    Ok(AppState {
        ingredient_service,
        labor_service,
        recipe_service,
        import_service,
    })
}

/// Build the application router with CORS configured for a local frontend.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/ingredients",
            post(ingredient_apis::create_ingredient).get(ingredient_apis::list_ingredients),
        )
        .route(
            "/ingredients/:id",
            get(ingredient_apis::get_ingredient)
                .put(ingredient_apis::update_ingredient)
                .delete(ingredient_apis::delete_ingredient),
        )
        .route(
            "/recipes",
            post(recipe_apis::create_recipe).get(recipe_apis::list_recipes),
        )
        .route("/recipes/calculate", post(recipe_apis::calculate_costs))
        .route(
            "/recipes/:id",
            get(recipe_apis::get_recipe)
                .put(recipe_apis::update_recipe)
                .delete(recipe_apis::delete_recipe),
        )
        .route(
            "/labor-records",
            post(labor_apis::create_labor_record).get(labor_apis::list_labor_records),
        )
        .route(
            "/labor-records/:id",
            get(labor_apis::get_labor_record)
                .put(labor_apis::update_labor_record)
                .delete(labor_apis::delete_labor_record),
        )
        .route("/import/recipes", post(import_apis::import_recipes));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

/// Map a service error to an HTTP response.
///
/// Unresolvable ingredient references map to 400 rather than 404: they stem
/// from the caller's input data, not from the request path.
pub(crate) fn error_response(e: &anyhow::Error) -> (StatusCode, String) {
    match e.downcast_ref::<DomainError>() {
        Some(domain_err) => {
            let status = match domain_err {
                DomainError::RecipeNotFound { .. } | DomainError::LaborRecordNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                DomainError::Validation { .. }
                | DomainError::IngredientNotFound { .. }
                | DomainError::InvalidIngredientCost { .. }
                | DomainError::DuplicateIdentity { .. } => StatusCode::BAD_REQUEST,
            };
            (status, domain_err.to_string())
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    }
}
