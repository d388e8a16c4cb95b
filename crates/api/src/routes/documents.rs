//! Document routes: whole-document recompute, totals and submission payload.
//!
//! Every request carries its own lines, so each call runs an isolated
//! session that is dropped once the response is built.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use taxline_core::document::{Document, DocumentError, DocumentTotals, aggregate};
use taxline_core::line_item::{EditedField, LineItem};
use taxline_shared::{AppError, AppResult};
use tracing::{debug, warn};

use crate::{AppState, error_response, payload::SubmissionPayload};

/// Creates the document routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documents/new", post(new_document))
        .route("/documents/recompute", post(recompute_document))
        .route("/documents/totals", post(document_totals))
        .route("/documents/payload", post(document_payload))
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request body for starting a document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentRequest {
    /// Whether the issuing company is tax-registered.
    pub tax_enabled: bool,
}

/// Request body carrying a full set of lines.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    /// Lines in document order.
    #[serde(default)]
    pub lines: Vec<LineItem>,
    /// Whether the issuing company is tax-registered.
    pub tax_enabled: bool,
}

/// One user edit to replay against a document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineEdit {
    /// Position of the edited line.
    pub index: usize,
    /// Field the user changed.
    #[serde(default)]
    pub field: EditedField,
    /// Raw text typed into the field. Absent when the line already holds it.
    #[serde(default)]
    pub value: Option<String>,
}

/// Request body for recomputing a document after edits.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecomputeRequest {
    /// Lines as last saved or displayed.
    #[serde(default)]
    pub lines: Vec<LineItem>,
    /// Whether the issuing company is tax-registered.
    pub tax_enabled: bool,
    /// Edits to replay, in order.
    #[serde(default)]
    pub edits: Vec<LineEdit>,
}

/// Lines together with their totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    /// Reconciled lines.
    pub lines: Vec<LineItem>,
    /// Document totals.
    pub totals: DocumentTotals,
}

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        let totals = document.totals();
        Self {
            lines: document.into_lines(),
            totals,
        }
    }
}

fn document_error(err: &DocumentError) -> AppError {
    match err {
        DocumentError::LineOutOfRange { .. } => AppError::LineNotFound(err.to_string()),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /documents/new
async fn new_document(
    State(state): State<AppState>,
    Json(request): Json<NewDocumentRequest>,
) -> Json<DocumentResponse> {
    let defaults = (*state.line_defaults).clone();
    let document = Document::with_defaults(request.tax_enabled, defaults);
    Json(DocumentResponse::from(document))
}

/// Replays `edits` in order, stopping at the first one that cannot apply.
fn replay_edits(document: &mut Document, edits: &[LineEdit]) -> AppResult<()> {
    for edit in edits {
        let applied = match (&edit.value, edit.field) {
            (Some(_), EditedField::None) => {
                return Err(AppError::Validation(format!(
                    "edit of line {} carries a value but no field",
                    edit.index
                )));
            }
            (Some(text), field) => document.apply_edit(edit.index, field, text),
            (None, field) => document.mark_edited(edit.index, field),
        };
        applied.map_err(|err| {
            debug!(index = edit.index, code = err.error_code(), "Edit not applied");
            document_error(&err)
        })?;
    }
    Ok(())
}

/// POST /documents/recompute
async fn recompute_document(
    State(state): State<AppState>,
    Json(request): Json<RecomputeRequest>,
) -> Response {
    let defaults = (*state.line_defaults).clone();
    let mut document = Document::load(request.lines, request.tax_enabled, defaults);

    if let Err(err) = replay_edits(&mut document, &request.edits) {
        warn!(error = %err, "Rejected document edits");
        return error_response(&err);
    }

    debug!(
        lines = document.len(),
        edits = request.edits.len(),
        "Document recomputed"
    );
    Json(DocumentResponse::from(document)).into_response()
}

/// POST /documents/totals
async fn document_totals(Json(request): Json<DocumentRequest>) -> Json<DocumentTotals> {
    Json(aggregate(&request.lines, request.tax_enabled))
}

/// POST /documents/payload
async fn document_payload(Json(request): Json<DocumentRequest>) -> Json<SubmissionPayload> {
    Json(SubmissionPayload::from_lines(
        &request.lines,
        request.tax_enabled,
    ))
}
