//! Clip request model, validation, and pipeline file-naming constants.

use serde::Deserialize;

use crate::error::ClipError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Base name the fetcher uses for the downloaded source file. The extension
/// is chosen by yt-dlp based on source availability, so only the prefix is
/// known in advance.
pub const SOURCE_BASENAME: &str = "full";

/// File name of the trimmed output inside the workspace.
pub const CLIP_FILENAME: &str = "clip.mp4";

/// Media type of the delivered clip.
pub const CLIP_CONTENT_TYPE: &str = "video/mp4";

/// Prefix for per-request workspace directory names.
pub const WORKSPACE_PREFIX: &str = "vsat_";

// ---------------------------------------------------------------------------
// Request model
// ---------------------------------------------------------------------------

/// A validated request to cut `[start_time, end_time)` out of a remote video.
///
/// Constructed once per inbound request and discarded after the response is
/// sent; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct ClipRequest {
    pub video_url: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl ClipRequest {
    /// Validate the request shape and numeric fields.
    ///
    /// Checks:
    /// - `video_url` non-empty after trimming
    /// - both times finite
    /// - `start_time >= 0`
    /// - `end_time > start_time`
    ///
    /// Runs before any workspace is created or external process spawned.
    pub fn validate(&self) -> Result<(), ClipError> {
        if self.video_url.trim().is_empty() {
            return Err(ClipError::InvalidRequest(
                "video_url must not be empty".to_string(),
            ));
        }
        if !self.start_time.is_finite() || !self.end_time.is_finite() {
            return Err(ClipError::InvalidRequest(
                "Invalid time format".to_string(),
            ));
        }
        if self.start_time < 0.0 || self.end_time <= self.start_time {
            return Err(ClipError::InvalidRequest("Invalid time range".to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, start: f64, end: f64) -> ClipRequest {
        ClipRequest {
            video_url: url.to_string(),
            start_time: start,
            end_time: end,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request("https://example.com/v", 0.0, 10.0).validate().is_ok());
    }

    #[test]
    fn from_the_beginning_clip_is_valid() {
        assert!(request("https://example.com/v", 0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn rejects_empty_url() {
        assert!(request("", 0.0, 10.0).validate().is_err());
        assert!(request("   ", 0.0, 10.0).validate().is_err());
    }

    #[test]
    fn rejects_negative_start() {
        assert!(request("https://example.com/v", -1.0, 10.0).validate().is_err());
    }

    #[test]
    fn rejects_end_equal_to_start() {
        assert!(request("https://example.com/v", 5.0, 5.0).validate().is_err());
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(request("https://example.com/v", 10.0, 5.0).validate().is_err());
    }

    #[test]
    fn rejects_non_finite_times() {
        assert!(request("https://example.com/v", f64::NAN, 10.0)
            .validate()
            .is_err());
        assert!(request("https://example.com/v", 0.0, f64::INFINITY)
            .validate()
            .is_err());
    }
}
