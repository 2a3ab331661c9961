/// Error type for the clip extraction pipeline.
///
/// Variants map one-to-one onto the pipeline's failure stages so the API
/// layer can translate each into the right HTTP status and body.
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    /// The request failed validation before any external work started.
    #[error("Invalid clip request: {0}")]
    InvalidRequest(String),

    /// The remote source could not be downloaded.
    #[error("Failed to download video: {detail}")]
    FetchFailed { detail: String },

    /// Both the stream-copy and re-encode cutting attempts failed.
    #[error("ffmpeg failed to cut clip: {detail}")]
    ExtractionFailed { detail: String },

    /// An unexpected fault anywhere in the pipeline (I/O, spawn failure).
    #[error("Failed to download or process video: {0}")]
    ProcessingFailed(String),
}

impl From<std::io::Error> for ClipError {
    fn from(err: std::io::Error) -> Self {
        ClipError::ProcessingFailed(err.to_string())
    }
}
