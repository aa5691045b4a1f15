//! Request handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AppState;
use super::error::ApiError;
use crate::models::{Airport, PredictionRequest, ResponseEnvelope};

/// Liveness document
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// `POST /api/predict-delay`
///
/// Validation and scoring failures are reported in the envelope with a 200.
/// Only an unreadable body is rejected outright.
pub async fn predict_delay(
    State(state): State<AppState>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let Json(request) = body?;
    Ok(Json(state.service.predict(&request).await))
}

/// `GET /api/airports`
pub async fn list_airports(State(state): State<AppState>) -> Json<Vec<Airport>> {
    Json(state.service.list_airports())
}

/// `GET /api/airports/:id`
pub async fn get_airport(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Airport>, ApiError> {
    let Path(id) = path?;
    state
        .service
        .get_airport(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Airport {} not found", id)))
}

/// `DELETE /api/predict-delay/cache`
///
/// Evicts the cached prediction for the given request so the next call
/// goes to the scorer. Evicting an uncached request is not an error.
pub async fn evict_prediction(
    State(state): State<AppState>,
    body: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = body?;
    state.service.evict_prediction(&request);
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy",
        timestamp: Utc::now(),
    })
}
