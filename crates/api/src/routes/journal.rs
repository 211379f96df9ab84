use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::{journal, photos};
use crate::state::AppState;

/// Write routes, mounted at the root.
///
/// ```text
/// POST /journal/upload          -> create_entry
/// POST /journal/upload/photos   -> upload_photos (multipart, `images[]`)
/// ```
///
/// The photo route accepts bodies up to `max_upload_bytes`.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/journal/upload", post(journal::create_entry))
        .route(
            "/journal/upload/photos",
            post(photos::upload_photos).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}
