//! Health check endpoint.
//!
//! Also reports the line defaults the service was configured with, so a host
//! can tell which tax rate new lines will get.

use axum::{Json, Router, extract::State, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Tax rate given to new lines.
    pub default_gst_percentage: Decimal,
    /// Unit label given to new product lines.
    pub default_unit_type: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        default_gst_percentage: state.line_defaults.gst_percentage,
        default_unit_type: state.line_defaults.unit_type.clone(),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
