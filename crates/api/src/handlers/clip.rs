//! Handler for the clip download endpoint.
//!
//! Drives the core pipeline (workspace, yt-dlp fetch, two-phase ffmpeg cut)
//! and streams the result back as a binary attachment. The clip bytes are
//! read fully before the workspace is released, so delivery can never race
//! cleanup.

use axum::body::{Body, Bytes};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use vsat_core::clip::{ClipRequest, CLIP_CONTENT_TYPE, CLIP_FILENAME};
use vsat_core::error::ClipError;
use vsat_core::pipeline;

use crate::error::{AppError, AppResult};

/// POST /api/download-clip
///
/// Body: `{"video_url": string, "start_time": number, "end_time": number}`.
/// Returns the trimmed clip as a `video/mp4` attachment named `clip.mp4`.
pub async fn download_clip(bytes: Bytes) -> AppResult<impl IntoResponse> {
    // The body is parsed by hand rather than with the Json extractor so an
    // absent or empty body produces this endpoint's own 400 shape.
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    if !body.is_object() || body.as_object().is_some_and(|o| o.is_empty()) {
        return Err(AppError::BadRequest("Missing JSON body".to_string()));
    }

    let request = parse_request(&body)?;

    let output = pipeline::run(&request).await?;

    // Buffer the clip before releasing the workspace; the file lives inside it.
    let bytes = match tokio::fs::read(output.path()).await {
        Ok(bytes) => bytes,
        Err(err) => {
            output.finish().await;
            return Err(AppError::Clip(ClipError::ProcessingFailed(err.to_string())));
        }
    };
    output.finish().await;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, CLIP_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{CLIP_FILENAME}\""),
        )
        .body(Body::from(bytes))
        .map_err(|e| AppError::Clip(ClipError::ProcessingFailed(e.to_string())))?;

    Ok(response)
}

/// Validate the request shape: required fields present, times numeric.
///
/// Range validation (`start_time >= 0`, `end_time > start_time`) belongs to
/// the core pipeline and is not duplicated here.
fn parse_request(body: &Value) -> Result<ClipRequest, AppError> {
    let video_url = body
        .get("video_url")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let start_time = body.get("start_time").filter(|v| !v.is_null());
    let end_time = body.get("end_time").filter(|v| !v.is_null());

    if video_url.is_empty() || start_time.is_none() || end_time.is_none() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    let (Some(start_time), Some(end_time)) = (
        start_time.and_then(as_seconds),
        end_time.and_then(as_seconds),
    ) else {
        return Err(AppError::BadRequest("Invalid time format".to_string()));
    };

    Ok(ClipRequest {
        video_url: video_url.to_string(),
        start_time,
        end_time,
    })
}

/// Accept a time as a JSON number or a numeric string.
fn as_seconds(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_numeric_strings() {
        let body = json!({"video_url": "u", "start_time": "1.5", "end_time": "3"});
        let request = parse_request(&body).unwrap();
        assert_eq!(request.start_time, 1.5);
        assert_eq!(request.end_time, 3.0);
    }

    #[test]
    fn parse_rejects_missing_fields() {
        assert!(parse_request(&json!({})).is_err());
        assert!(parse_request(&json!({"video_url": "u"})).is_err());
        assert!(parse_request(&json!({"video_url": "", "start_time": 0, "end_time": 1})).is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_times() {
        let body = json!({"video_url": "u", "start_time": "soon", "end_time": 3});
        assert!(parse_request(&body).is_err());
    }
}
