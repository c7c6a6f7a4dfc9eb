//! Top-level route handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub platform_fee_per_day: String,
}

/// Liveness probe
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        platform_fee_per_day: state.pricing.platform_fee_per_day.to_string(),
    })
}

/// Catch-all for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound
}
