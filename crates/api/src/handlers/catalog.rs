//! Read-only endpoints for the catalog categories.
//!
//! Each handler is one repository call whose result is sent as gzip JSON.
//! Filter path parameters are normalized here, before the repository sees
//! them, so lookups are case-insensitive.

use axum::extract::{Path, State};
use lifejournal_core::params::{normalize_location, normalize_tier};
use lifejournal_db::models::{Book, Concert, FoodPlace, Movie, Person, TvShow};

use crate::error::AppResult;
use crate::response::GzipJson;
use crate::state::AppState;

/// GET /api/concerts
pub async fn list_concerts(State(state): State<AppState>) -> AppResult<GzipJson<Vec<Concert>>> {
    let concerts = state.repo.get_all_concerts().await?;
    Ok(GzipJson(concerts))
}

/// GET /api/movies
pub async fn list_movies(State(state): State<AppState>) -> AppResult<GzipJson<Vec<Movie>>> {
    let movies = state.repo.get_all_movies().await?;
    Ok(GzipJson(movies))
}

/// GET /api/movies/{tier}
///
/// The tier is upper-cased before filtering.
pub async fn list_movies_by_tier(
    State(state): State<AppState>,
    Path(tier): Path<String>,
) -> AppResult<GzipJson<Vec<Movie>>> {
    let movies = state.repo.get_movies_by_tier(&normalize_tier(&tier)).await?;
    Ok(GzipJson(movies))
}

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> AppResult<GzipJson<Vec<Book>>> {
    let books = state.repo.get_all_books().await?;
    Ok(GzipJson(books))
}

/// GET /api/food
pub async fn list_food_places(
    State(state): State<AppState>,
) -> AppResult<GzipJson<Vec<FoodPlace>>> {
    let places = state.repo.get_all_food_places().await?;
    Ok(GzipJson(places))
}

/// GET /api/food/{location}
///
/// The location is lower-cased before filtering.
pub async fn list_food_places_by_location(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> AppResult<GzipJson<Vec<FoodPlace>>> {
    let places = state
        .repo
        .get_food_places_by_location(&normalize_location(&location))
        .await?;
    Ok(GzipJson(places))
}

/// GET /api/tv
pub async fn list_tv_shows(State(state): State<AppState>) -> AppResult<GzipJson<Vec<TvShow>>> {
    let shows = state.repo.get_all_tv_shows().await?;
    Ok(GzipJson(shows))
}

/// GET /api/people
pub async fn list_people(State(state): State<AppState>) -> AppResult<GzipJson<Vec<Person>>> {
    let people = state.repo.get_all_people().await?;
    Ok(GzipJson(people))
}
