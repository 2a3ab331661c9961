use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness probe response payload.
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
}

/// GET /ping -- confirms the service is reachable and speaking JSON.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { status: "ok" })
}

/// Mount the liveness route (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping))
}
