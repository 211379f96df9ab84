use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Image served as the site icon, relative to the static directory.
pub const FAVICON_FILE: &str = "img.png";

/// GET /favicon.ico -- serves `img.png` labelled as `image/x-icon`.
pub async fn favicon(State(state): State<AppState>) -> Response {
    let path = state.config.static_dir.join(FAVICON_FILE);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(CONTENT_TYPE, "image/x-icon")], bytes).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Favicon not available");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
