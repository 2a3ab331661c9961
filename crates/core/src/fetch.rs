//! Remote fetch step: download the source video into a workspace via yt-dlp.
//!
//! yt-dlp picks the container format based on what the source offers, so the
//! fetcher writes to a `full.%(ext)s` template and then resolves the concrete
//! file itself. Callers always receive the resolved path; the prefix scan is
//! an implementation detail of this module, not a contract between
//! components.

use std::path::{Path, PathBuf};

use crate::clip::SOURCE_BASENAME;
use crate::error::ClipError;

/// Format selector: best mp4 video + m4a audio, falling back to plain mp4.
const FORMAT_SELECTOR: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/mp4";

/// Download `url` into `dir` and return the path of the downloaded file.
///
/// Fails with [`ClipError::FetchFailed`] when yt-dlp is missing, exits
/// non-zero, or leaves no `full.*` file behind.
pub async fn fetch_source(url: &str, dir: &Path) -> Result<PathBuf, ClipError> {
    let template = dir.join(format!("{SOURCE_BASENAME}.%(ext)s"));

    let output = tokio::process::Command::new("yt-dlp")
        .args(["--quiet", "--no-warnings", "-f", FORMAT_SELECTOR, "-o"])
        .arg(&template)
        .arg(url)
        .output()
        .await
        .map_err(|e| ClipError::FetchFailed {
            detail: format!("failed to run yt-dlp: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(%url, exit_code = ?output.status.code(), "yt-dlp failed");
        return Err(ClipError::FetchFailed {
            detail: format!(
                "yt-dlp exited with code {:?}: {}",
                output.status.code(),
                stderr.trim()
            ),
        });
    }

    resolve_source(dir).await?.ok_or_else(|| ClipError::FetchFailed {
        detail: "yt-dlp reported success but no downloaded file was found".to_string(),
    })
}

/// Find the first `full.*` file in `dir`, if any.
async fn resolve_source(dir: &Path) -> Result<Option<PathBuf>, ClipError> {
    let prefix = format!("{SOURCE_BASENAME}.");
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(&prefix) {
            return Ok(Some(entry.path()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_finds_prefixed_file_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("full.webm"), b"x").unwrap();
        let found = resolve_source(dir.path()).await.unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "full.webm");
    }

    #[tokio::test]
    async fn resolve_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mp4"), b"x").unwrap();
        std::fs::write(dir.path().join("fullness.txt"), b"x").unwrap();
        assert!(resolve_source(dir.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn resolve_on_empty_directory_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_source(dir.path()).await.unwrap().is_none());
    }
}
