pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /labels           list (GET), replace entire set (PUT)
/// /annotations      list (GET), replace entire set (PUT)
/// /download-clip    cut and download a clip (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/labels",
            get(handlers::labels::list_labels).put(handlers::labels::replace_labels),
        )
        .route(
            "/annotations",
            get(handlers::annotations::list_annotations)
                .put(handlers::annotations::replace_annotations),
        )
        .route("/download-clip", post(handlers::clip::download_clip))
}
