//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes that run the engine on request-supplied lines
//! - The submission payload sent on to the persistence backend
//!
//! Nothing is stored between requests; each request is its own session.

pub mod payload;
pub mod routes;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use taxline_core::line_item::LineDefaults;
use taxline_shared::{AppError, config::EngineConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Defaults for newly created lines.
    pub line_defaults: Arc<LineDefaults>,
}

impl AppState {
    /// Builds the state from engine configuration.
    #[must_use]
    pub fn new(engine: &EngineConfig) -> Self {
        Self {
            line_defaults: Arc::new(LineDefaults::from(engine)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Renders an application error as a JSON response.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code().to_lowercase(),
            "message": err.to_string()
        })),
    )
        .into_response()
}
