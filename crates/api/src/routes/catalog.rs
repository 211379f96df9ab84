use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog read routes, mounted under `/api`.
///
/// ```text
/// GET /concerts             -> list_concerts
/// GET /movies               -> list_movies
/// GET /movies/{tier}        -> list_movies_by_tier
/// GET /books                -> list_books
/// GET /food                 -> list_food_places
/// GET /food/{location}      -> list_food_places_by_location
/// GET /tv                   -> list_tv_shows
/// GET /people               -> list_people
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/concerts", get(catalog::list_concerts))
        .route("/movies", get(catalog::list_movies))
        .route("/movies/{tier}", get(catalog::list_movies_by_tier))
        .route("/books", get(catalog::list_books))
        .route("/food", get(catalog::list_food_places))
        .route("/food/{location}", get(catalog::list_food_places_by_location))
        .route("/tv", get(catalog::list_tv_shows))
        .route("/people", get(catalog::list_people))
}
