//! Single-line reconciliation route.

use axum::{Json, Router, routing::post};
use serde::Deserialize;
use taxline_core::line_item::{EditedField, LineItem, reconcile};
use tracing::debug;

use crate::AppState;

/// Creates the line routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/lines/reconcile", post(reconcile_line))
}

/// Request body for reconciling one line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileLineRequest {
    /// The line, already holding the user's new value.
    pub line: LineItem,
    /// Field the user edited; omitted means the quantity/price path.
    #[serde(default)]
    pub edited_field: EditedField,
    /// Whether the issuing company is tax-registered.
    pub tax_enabled: bool,
}

/// POST /lines/reconcile
async fn reconcile_line(Json(request): Json<ReconcileLineRequest>) -> Json<LineItem> {
    debug!(
        edited_field = ?request.edited_field,
        tax_enabled = request.tax_enabled,
        "Reconciling line"
    );
    Json(reconcile(
        &request.line,
        request.edited_field,
        request.tax_enabled,
    ))
}
