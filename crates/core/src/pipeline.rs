//! Clip pipeline orchestrator.
//!
//! Sequences workspace acquisition, remote fetch, and extraction, and
//! guarantees the workspace is released on every exit path. Validation
//! happens first so rejected requests never allocate a workspace or spawn a
//! process.

use std::path::PathBuf;

use crate::clip::{ClipRequest, CLIP_FILENAME};
use crate::error::ClipError;
use crate::extract::extract_clip;
use crate::fetch::fetch_source;
use crate::workspace::Workspace;

/// A successfully produced clip, still staged inside its workspace.
///
/// The caller must read or copy the file at [`ClipOutput::path`] and then
/// call [`ClipOutput::finish`]; the file does not outlive the workspace.
#[derive(Debug)]
pub struct ClipOutput {
    workspace: Workspace,
    path: PathBuf,
}

impl ClipOutput {
    /// Path of the trimmed clip inside the workspace.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Release the workspace once delivery has completed (or been abandoned).
    pub async fn finish(self) {
        self.workspace.release().await;
    }
}

/// Run the full pipeline for one request.
///
/// On failure the workspace (if one was created) is already released; on
/// success ownership transfers to the returned [`ClipOutput`].
pub async fn run(request: &ClipRequest) -> Result<ClipOutput, ClipError> {
    request.validate()?;

    let workspace = Workspace::create().await?;
    match run_in_workspace(request, &workspace).await {
        Ok(path) => Ok(ClipOutput { workspace, path }),
        Err(err) => {
            workspace.release().await;
            Err(err)
        }
    }
}

/// Fetch and extract inside an already-acquired workspace.
async fn run_in_workspace(
    request: &ClipRequest,
    workspace: &Workspace,
) -> Result<PathBuf, ClipError> {
    let source = fetch_source(&request.video_url, workspace.dir()).await?;
    tracing::debug!(source = %source.display(), "Source video downloaded");

    let output = workspace.dir().join(CLIP_FILENAME);
    extract_clip(&source, &output, request.start_time, request.end_time).await?;
    tracing::info!(
        video_url = %request.video_url,
        start_time = request.start_time,
        end_time = request.end_time,
        "Clip extracted"
    );

    Ok(output)
}

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

    // A rejected request must fail with InvalidRequest, not FetchFailed:
    // validation runs before the fetcher is ever invoked.

    #[tokio::test]
    async fn invalid_range_is_rejected_before_fetch() {
        let err = run(&request("https://example.com/v", 5.0, 5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ClipError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn negative_start_is_rejected_before_fetch() {
        let err = run(&request("https://example.com/v", -1.0, 5.0))
            .await
            .unwrap_err();
        assert!(matches!(err, ClipError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn empty_url_is_rejected_before_fetch() {
        let err = run(&request("", 0.0, 5.0)).await.unwrap_err();
        assert!(matches!(err, ClipError::InvalidRequest(_)));
    }
}
