//! Per-request temporary workspace lifecycle.
//!
//! Each clip request stages its downloaded source and trimmed output in an
//! isolated directory under the system temp dir. Directory uniqueness is the
//! sole concurrency-safety mechanism between in-flight requests, so names
//! carry a random UUID suffix and a workspace is never shared.

use std::path::{Path, PathBuf};

use crate::clip::WORKSPACE_PREFIX;

/// An ephemeral scratch directory exclusively owned by one in-flight request.
///
/// Cleanup is explicit: the pipeline calls [`Workspace::release`] on every
/// exit path. There is no `Drop`-based deletion; relying on destructor timing
/// would hide cleanup failures instead of logging them.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
}

impl Workspace {
    /// Create a fresh, uniquely named workspace directory.
    pub async fn create() -> std::io::Result<Self> {
        let dir = std::env::temp_dir().join(format!("{WORKSPACE_PREFIX}{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await?;
        tracing::debug!(dir = %dir.display(), "Workspace created");
        Ok(Self { dir })
    }

    /// Path of the workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Recursively delete the workspace directory and everything in it.
    ///
    /// Deletion failures are logged and swallowed: cleanup must never mask
    /// the primary result of the request that owned the workspace.
    pub async fn release(self) {
        if let Err(err) = tokio::fs::remove_dir_all(&self.dir).await {
            tracing::warn!(
                dir = %self.dir.display(),
                error = %err,
                "Failed to remove workspace directory"
            );
        } else {
            tracing::debug!(dir = %self.dir.display(), "Workspace removed");
        }
    }
}
