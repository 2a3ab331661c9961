//! Handlers for the label catalog.
//!
//! The label set uses whole-collection-replace semantics: PUT deletes
//! everything and inserts the submitted names. Concurrent replacements are
//! last-writer-wins.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use vsat_db::repositories::LabelRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for `GET /api/labels`.
#[derive(Serialize)]
pub struct LabelsResponse {
    pub labels: Vec<String>,
}

/// Response payload for `PUT /api/labels`, echoing the submitted names.
#[derive(Serialize)]
pub struct ReplaceLabelsResponse {
    pub status: &'static str,
    pub labels: Vec<String>,
}

/// GET /api/labels
///
/// List all label names, most recently added first.
pub async fn list_labels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let labels = LabelRepo::list(&state.pool).await?;
    Ok(Json(LabelsResponse { labels }))
}

/// PUT /api/labels
///
/// Replace the entire label set. The body must be `{"labels": [...]}`;
/// anything else is a 400. Non-string items are stringified, names are
/// trimmed, and names empty after trimming are dropped.
pub async fn replace_labels(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let items = body
        .get("labels")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("labels must be a list".to_string()))?;

    let names: Vec<String> = items.iter().map(value_to_name).collect();

    let inserted = LabelRepo::replace_all(&state.pool, &names).await?;
    tracing::info!(submitted = names.len(), inserted, "Label set replaced");

    Ok(Json(ReplaceLabelsResponse {
        status: "ok",
        labels: names,
    }))
}

/// Coerce a JSON value to a label name the way the endpoint always has:
/// strings pass through, anything else is stringified.
fn value_to_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
