pub mod catalog;
pub mod health;
pub mod journal;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /concerts                 all concerts
/// /movies                   all watched movies
/// /movies/{tier}            movies in one tier (case-insensitive)
/// /books                    all books
/// /food                     all food places, by name
/// /food/{location}          food places in one location (case-insensitive)
/// /tv                       all tv shows
/// /people                   all people, by last then first name
/// /journal                  journal entries, newest first
/// /photos/{id}              raw photo bytes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .route("/journal", get(handlers::journal::list_entries))
        .route("/photos/{id}", get(handlers::photos::get_photo))
}
