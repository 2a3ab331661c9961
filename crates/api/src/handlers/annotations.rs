//! Handlers for the annotation catalog.
//!
//! Like labels, annotations use whole-collection-replace semantics. Each
//! batch item is constructed independently: an item that fails to
//! deserialize (or collides on id at insert time) is skipped without
//! aborting the batch.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use vsat_db::models::annotation::{AnnotationInput, AnnotationRecord, NewAnnotation};
use vsat_db::repositories::AnnotationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for `GET /api/annotations`.
#[derive(Serialize)]
pub struct AnnotationsResponse {
    pub annotations: Vec<AnnotationRecord>,
}

/// Response payload for `PUT /api/annotations`. `count` is the number of
/// submitted items, not the number that survived per-item construction.
#[derive(Serialize)]
pub struct ReplaceAnnotationsResponse {
    pub status: &'static str,
    pub count: usize,
}

/// GET /api/annotations
///
/// List all annotations ordered by start time descending.
pub async fn list_annotations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let annotations = AnnotationRepo::list(&state.pool).await?;
    Ok(Json(AnnotationsResponse { annotations }))
}

/// PUT /api/annotations
///
/// Replace the entire annotation set. The body must be
/// `{"annotations": [...]}`; anything else is a 400. Malformed items are
/// skipped, not fatal to the batch.
pub async fn replace_annotations(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let items = body
        .get("annotations")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::BadRequest("annotations must be a list".to_string()))?;

    let submitted = items.len();

    // Per-item construction: collect the well-formed items, drop the rest.
    let mut resolved: Vec<NewAnnotation> = Vec::with_capacity(submitted);
    let mut malformed = 0usize;
    for item in items {
        match serde_json::from_value::<AnnotationInput>(item.clone()) {
            Ok(input) => resolved.push(input.resolve()),
            Err(err) => {
                malformed += 1;
                tracing::warn!(error = %err, "Skipping malformed annotation item");
            }
        }
    }

    let outcome = AnnotationRepo::replace_all(&state.pool, resolved).await?;
    tracing::info!(
        submitted,
        malformed,
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "Annotation set replaced"
    );

    Ok(Json(ReplaceAnnotationsResponse {
        status: "ok",
        count: submitted,
    }))
}
