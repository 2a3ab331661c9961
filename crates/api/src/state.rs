use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, constructed once at startup and injected
    /// here rather than living in module-level state.
    pub pool: vsat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
