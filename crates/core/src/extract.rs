//! Two-phase clip extraction: ffmpeg stream copy with a re-encode fallback.
//!
//! The fast path asks ffmpeg for a direct stream copy of the interval, which
//! avoids transcoding but can fail (or silently produce an empty file) on
//! some codec/container boundaries. Exit status alone is not trusted: the
//! output must also exist and be non-empty. When the gate trips, the interval
//! is re-cut with a full re-encode, overwriting any partial output.

use std::path::Path;
use std::process::Output;

use crate::error::ClipError;

/// Codec arguments for the fast stream-copy attempt.
const STREAM_COPY_ARGS: &[&str] = &["-c", "copy"];

/// Codec arguments for the re-encode fallback.
const REENCODE_ARGS: &[&str] = &["-c:v", "libx264", "-c:a", "aac"];

/// Produce `output` containing exactly `[start, end)` of `source`.
///
/// Interval positivity is enforced by the orchestrator before this runs;
/// `start == 0.0` is a valid from-the-beginning cut.
pub async fn extract_clip(
    source: &Path,
    output: &Path,
    start: f64,
    end: f64,
) -> Result<(), ClipError> {
    let copy = run_cut(source, output, start, end, STREAM_COPY_ARGS).await?;
    if copy.status.success() && output_is_usable(output).await {
        return Ok(());
    }

    tracing::info!(
        source = %source.display(),
        exit_code = ?copy.status.code(),
        "Stream copy produced no usable output, re-encoding"
    );

    let reencode = run_cut(source, output, start, end, REENCODE_ARGS).await?;
    // Re-encoding is the trusted slow path: existence is enough.
    if reencode.status.success() && tokio::fs::try_exists(output).await.unwrap_or(false) {
        return Ok(());
    }

    Err(ClipError::ExtractionFailed {
        detail: format!(
            "stream copy (exit {:?}): {}; re-encode (exit {:?}): {}",
            copy.status.code(),
            String::from_utf8_lossy(&copy.stderr).trim(),
            reencode.status.code(),
            String::from_utf8_lossy(&reencode.stderr).trim()
        ),
    })
}

/// Invoke ffmpeg to cut `[start, end)` with the given codec arguments.
async fn run_cut(
    source: &Path,
    output: &Path,
    start: f64,
    end: f64,
    codec_args: &[&str],
) -> Result<Output, ClipError> {
    tokio::process::Command::new("ffmpeg")
        .args(["-y", "-hide_banner", "-loglevel", "error", "-i"])
        .arg(source)
        .args(["-ss", &start.to_string(), "-to", &end.to_string()])
        .args(codec_args)
        .arg(output)
        .output()
        .await
        .map_err(|e| ClipError::ProcessingFailed(format!("failed to run ffmpeg: {e}")))
}

/// Fast-path output gate: the file must exist and have non-zero size.
async fn output_is_usable(path: &Path) -> bool {
    match tokio::fs::metadata(path).await {
        Ok(meta) => meta.len() > 0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_output_is_not_usable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!output_is_usable(&dir.path().join("clip.mp4")).await);
    }

    #[tokio::test]
    async fn zero_byte_output_is_not_usable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"").unwrap();
        assert!(!output_is_usable(&path).await);
    }

    #[tokio::test]
    async fn non_empty_output_is_usable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"mp4 bytes").unwrap();
        assert!(output_is_usable(&path).await);
    }
}
