//! # REST API for Labor Records
//!
//! Endpoints for the standalone per-product labor rate records.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::{error, info};

use crate::rest::{error_response, AppState};
use crate::rest::mappers::LaborMapper;
use shared::{CreateLaborRecordRequest, LaborRecordListResponse, UpdateLaborRecordRequest};

/// Create a new labor record
pub async fn create_labor_record(
    State(state): State<AppState>,
    Json(request): Json<CreateLaborRecordRequest>,
) -> impl IntoResponse {
    info!("POST /api/labor-records - request: {:?}", request);

    match state
        .labor_service
        .create_labor_record(LaborMapper::create_to_command(request))
    {
        Ok(result) => (
            StatusCode::CREATED,
            Json(LaborMapper::to_dto(result.labor_record)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to create labor record: {}", e);
            error_response(&e).into_response()
        }
    }
}

/// Get a labor record by id
pub async fn get_labor_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/labor-records/{}", id);

    match state.labor_service.get_labor_record(&id) {
        Ok(Some(record)) => (StatusCode::OK, Json(LaborMapper::to_dto(record))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Labor record not found").into_response(),
        Err(e) => {
            error!("Failed to get labor record: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving labor record").into_response()
        }
    }
}

/// List all labor records
pub async fn list_labor_records(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/labor-records");

    match state.labor_service.list_labor_records() {
        Ok(result) => (
            StatusCode::OK,
            Json(LaborRecordListResponse {
                labor_records: result
                    .labor_records
                    .into_iter()
                    .map(LaborMapper::to_dto)
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to list labor records: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing labor records").into_response()
        }
    }
}

/// Update a labor record; the per-pie cost is recomputed server-side
pub async fn update_labor_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateLaborRecordRequest>,
) -> impl IntoResponse {
    info!("PUT /api/labor-records/{} - request: {:?}", id, request);

    match state
        .labor_service
        .update_labor_record(&id, LaborMapper::update_to_command(request))
    {
        Ok(result) => (
            StatusCode::OK,
            Json(LaborMapper::to_dto(result.labor_record)),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to update labor record: {}", e);
            error_response(&e).into_response()
        }
    }
}

/// Delete a labor record
pub async fn delete_labor_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/labor-records/{}", id);

    match state.labor_service.delete_labor_record(&id) {
        Ok(true) => (StatusCode::NO_CONTENT, "").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "Labor record not found").into_response(),
        Err(e) => {
            error!("Failed to delete labor record: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error deleting labor record").into_response()
        }
    }
}
