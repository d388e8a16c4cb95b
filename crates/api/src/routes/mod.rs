//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod documents;
pub mod health;
pub mod lines;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(lines::routes())
        .merge(documents::routes())
}
