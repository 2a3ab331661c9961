//! Annotation models and DTOs.
//!
//! Annotations are stored with their label list JSON-encoded in a TEXT
//! column. Stored JSON that fails to parse degrades to an empty list when
//! read back; a corrupt row never fails a listing request.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `annotations` table.
#[derive(Debug, Clone, FromRow)]
pub struct Annotation {
    pub id: String,
    pub video_id: Option<String>,
    pub video_url: String,
    pub start_time: f64,
    pub end_time: f64,
    /// JSON-encoded array of label strings.
    pub labels: Option<String>,
    pub notes: Option<String>,
    pub clip_filename: Option<String>,
}

/// API shape of an annotation, with the label list decoded.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationRecord {
    pub id: String,
    pub video_id: Option<String>,
    pub video_url: String,
    pub start_time: f64,
    pub end_time: f64,
    pub labels: Vec<String>,
    pub notes: Option<String>,
    pub clip_filename: Option<String>,
}

impl From<Annotation> for AnnotationRecord {
    fn from(row: Annotation) -> Self {
        let labels = decode_labels(row.labels.as_deref());
        Self {
            id: row.id,
            video_id: row.video_id,
            video_url: row.video_url,
            start_time: row.start_time,
            end_time: row.end_time,
            labels,
            notes: row.notes,
            clip_filename: row.clip_filename,
        }
    }
}

/// Decode a stored label list, falling back to empty on malformed JSON.
fn decode_labels(stored: Option<&str>) -> Vec<String> {
    stored
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

/// One item of a `PUT /api/annotations` batch.
///
/// Accepts the field aliases the original clients used (`uuid`, `videoUrl`,
/// `start`, `end`). Missing fields default rather than fail; a missing `id`
/// is derived deterministically from the video URL and time range so
/// re-submitting the same logical annotation collides predictably instead of
/// duplicating silently.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationInput {
    #[serde(alias = "uuid")]
    pub id: Option<String>,
    pub video_id: Option<String>,
    #[serde(alias = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(alias = "start")]
    pub start_time: Option<f64>,
    #[serde(alias = "end")]
    pub end_time: Option<f64>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub notes: Option<String>,
    pub clip_filename: Option<String>,
}

/// A fully resolved annotation ready for insertion.
#[derive(Debug, Clone)]
pub struct NewAnnotation {
    pub id: String,
    pub video_id: Option<String>,
    pub video_url: String,
    pub start_time: f64,
    pub end_time: f64,
    /// JSON-encoded array of label strings.
    pub labels: String,
    pub notes: Option<String>,
    pub clip_filename: Option<String>,
}

impl AnnotationInput {
    /// Resolve defaults and the derived id into an insertable annotation.
    pub fn resolve(self) -> NewAnnotation {
        let video_url = self.video_url.unwrap_or_default();
        let start_time = self.start_time.unwrap_or(0.0);
        let end_time = self.end_time.unwrap_or(0.0);
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => derived_id(&video_url, start_time, end_time),
        };
        NewAnnotation {
            id,
            video_id: self.video_id,
            video_url,
            start_time,
            end_time,
            labels: serde_json::to_string(&self.labels).unwrap_or_else(|_| "[]".to_string()),
            notes: self.notes,
            clip_filename: self.clip_filename,
        }
    }
}

/// Deterministic annotation id for items submitted without one.
pub fn derived_id(video_url: &str, start_time: f64, end_time: f64) -> String {
    format!("{video_url}_{start_time}_{end_time}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_id_is_deterministic() {
        let a = derived_id("https://example.com/v", 1.5, 3.0);
        let b = derived_id("https://example.com/v", 1.5, 3.0);
        assert_eq!(a, b);
    }

    #[test]
    fn derived_id_distinguishes_ranges() {
        let a = derived_id("https://example.com/v", 1.5, 3.0);
        let b = derived_id("https://example.com/v", 1.5, 4.0);
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_uses_explicit_id_when_present() {
        let input: AnnotationInput = serde_json::from_str(
            r#"{"id": "abc", "video_url": "u", "start_time": 1.0, "end_time": 2.0}"#,
        )
        .unwrap();
        assert_eq!(input.resolve().id, "abc");
    }

    #[test]
    fn resolve_accepts_uuid_alias() {
        let input: AnnotationInput =
            serde_json::from_str(r#"{"uuid": "abc", "videoUrl": "u", "start": 1.0, "end": 2.0}"#)
                .unwrap();
        let resolved = input.resolve();
        assert_eq!(resolved.id, "abc");
        assert_eq!(resolved.video_url, "u");
        assert_eq!(resolved.start_time, 1.0);
        assert_eq!(resolved.end_time, 2.0);
    }

    #[test]
    fn resolve_derives_id_when_absent() {
        let input: AnnotationInput =
            serde_json::from_str(r#"{"video_url": "u", "start_time": 1.0, "end_time": 2.0}"#)
                .unwrap();
        assert_eq!(input.resolve().id, derived_id("u", 1.0, 2.0));
    }

    #[test]
    fn resolve_defaults_missing_fields() {
        let input: AnnotationInput = serde_json::from_str(r#"{}"#).unwrap();
        let resolved = input.resolve();
        assert_eq!(resolved.video_url, "");
        assert_eq!(resolved.start_time, 0.0);
        assert_eq!(resolved.end_time, 0.0);
        assert_eq!(resolved.labels, "[]");
    }

    #[test]
    fn malformed_stored_labels_degrade_to_empty() {
        assert!(decode_labels(Some("{not json")).is_empty());
        assert!(decode_labels(Some("42")).is_empty());
        assert!(decode_labels(None).is_empty());
    }

    #[test]
    fn well_formed_stored_labels_round_trip() {
        let labels = decode_labels(Some(r#"["goal","replay"]"#));
        assert_eq!(labels, vec!["goal".to_string(), "replay".to_string()]);
    }
}
