//! VSAT domain logic.
//!
//! Everything the clip pipeline needs that is independent of HTTP and the
//! database: request validation, per-request temporary workspaces, the
//! yt-dlp fetch step, the two-phase ffmpeg extractor, and the orchestrator
//! that sequences them with guaranteed workspace cleanup.

pub mod clip;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod workspace;
