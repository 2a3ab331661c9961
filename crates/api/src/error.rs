use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use vsat_core::error::ClipError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ClipError`] for pipeline failures and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error bodies:
/// `{"error": ...}` for client errors, `{"error": ..., "detail": ...}` for
/// pipeline failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A clip pipeline error from `vsat_core`.
    #[error(transparent)]
    Clip(#[from] ClipError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Clip(clip) => match clip {
                ClipError::InvalidRequest(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": msg }))
                }
                ClipError::FetchFailed { detail } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to download video", "detail": detail }),
                ),
                ClipError::ExtractionFailed { detail } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "ffmpeg failed to cut clip", "detail": detail }),
                ),
                ClipError::ProcessingFailed(detail) => {
                    tracing::error!(error = %detail, "Clip pipeline fault");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "Failed to download or process video", "detail": detail }),
                    )
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
        };

        (status, axum::Json(body)).into_response()
    }
}
