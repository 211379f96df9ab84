use std::path::Path;

use axum::routing::get;
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::pages;
use crate::state::AppState;

/// Browser pages and the HTML file each one serves.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/concerts", "concerts.html"),
    ("/movies", "movies.html"),
    ("/books", "books.html"),
    ("/food", "food.html"),
    ("/tv", "tv.html"),
    ("/people", "people.html"),
    ("/journal", "journal.html"),
    ("/entries", "journal_list.html"),
    ("/style.css", "style.css"),
];

/// Static routes, resolved under `static_dir`. Uploaded photo copies are
/// served from `upload_dir` under `/uploads`.
pub fn router(static_dir: &Path, upload_dir: &Path) -> Router<AppState> {
    let router = PAGES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(static_dir.join(file)))
        });

    router
        .route("/favicon.ico", get(pages::favicon))
        .nest_service("/uploads", ServeDir::new(upload_dir))
}
