//! Client-server PostgreSQL adapter.
//!
//! Connects with a URL and assumes the schema from `migrations/` is already
//! applied. Queries use `$n` placeholders and coalesce NULL columns in SQL.

use async_trait::async_trait;
use lifejournal_core::types::DbId;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::backend::Backend;
use crate::error::{storage, StoreError};
use crate::models::{
    Book, Concert, FoodPlace, JournalEntry, Movie, NewJournalEntry, Person, Photo, TvShow,
};
use crate::repository::Repository;
use crate::rows::decode_rows;

/// Maximum pooled connections.
const MAX_CONNECTIONS: u32 = 20;

const CONCERT_QUERY: &str = "\
    SELECT COALESCE(date::text, '') AS date, COALESCE(artists, '') AS artists, \
           COALESCE(notes, '') AS notes, COALESCE(people_went_with, '') AS people \
    FROM concerts";

const MOVIE_QUERY: &str = "\
    SELECT COALESCE(title, '') AS title, COALESCE(tier, '') AS tier \
    FROM watched_movies";

const BOOK_QUERY: &str = "\
    SELECT COALESCE(title, '') AS title, COALESCE(rating, 0) AS rating, \
           COALESCE(pages, 0) AS pages, COALESCE(author, '') AS author, \
           COALESCE(series, '') AS series, COALESCE(finished, false) AS finished \
    FROM books";

const FOOD_PLACE_QUERY: &str = "\
    SELECT COALESCE(name, '') AS name, COALESCE(location, '') AS location, \
           COALESCE(notes, '') AS notes, COALESCE(type, '') AS kind, \
           COALESCE(category, '') AS category \
    FROM food_places";

const TV_SHOW_QUERY: &str = "\
    SELECT COALESCE(title, '') AS title, COALESCE(notes, '') AS notes, \
           COALESCE(seasons_watched, '') AS seasons_watched \
    FROM tv_shows";

const PERSON_QUERY: &str = "\
    SELECT id, COALESCE(first, '') AS first, COALESCE(middle, '') AS middle, \
           COALESCE(last, '') AS last, COALESCE(address, '') AS address, \
           COALESCE(birth_day, 0) AS birth_day, COALESCE(birth_month, 0) AS birth_month, \
           COALESCE(birth_year, 0) AS birth_year, COALESCE(gift_ideas, '') AS gift_ideas, \
           COALESCE(email, '') AS email, COALESCE(category, '') AS category, \
           COALESCE(notes, '') AS notes \
    FROM people \
    ORDER BY COALESCE(last, ''), COALESCE(first, '')";

const JOURNAL_QUERY: &str = "\
    SELECT id, COALESCE(to_char(created, 'YYYY-MM-DD HH24:MI:SS'), '') AS created, \
           COALESCE(title, '') AS title, COALESCE(entry, '') AS entry, \
           COALESCE(tags, '') AS tags, COALESCE(photos, '') AS photos \
    FROM journal_entries \
    ORDER BY journal_entries.created DESC, id DESC";

const PHOTO_QUERY: &str = "\
    SELECT id, file_name, bytes, \
           COALESCE(to_char(created, 'YYYY-MM-DD HH24:MI:SS'), '') AS created \
    FROM files \
    WHERE id = $1";

/// [`Repository`] backed by a PostgreSQL server.
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    /// Create a connection pool for `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(storage("connect to postgres"))?;
        tracing::info!("PostgreSQL connection pool created");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tests that provision their own database).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Repository for PgRepository {
    fn backend(&self) -> Backend {
        Backend::Postgres
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(storage("run health check"))?;
        Ok(())
    }

    async fn get_all_concerts(&self) -> Result<Vec<Concert>, StoreError> {
        let rows = sqlx::query(CONCERT_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query concerts"))?;
        Ok(decode_rows(rows, "concert"))
    }

    async fn get_all_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query(MOVIE_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query movies"))?;
        Ok(decode_rows(rows, "movie"))
    }

    async fn get_movies_by_tier(&self, tier: &str) -> Result<Vec<Movie>, StoreError> {
        let query = format!("{MOVIE_QUERY} WHERE tier = $1");
        let rows = sqlx::query(&query)
            .bind(tier)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query movies by tier"))?;
        Ok(decode_rows(rows, "movie"))
    }

    async fn get_all_books(&self) -> Result<Vec<Book>, StoreError> {
        let rows = sqlx::query(BOOK_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query books"))?;
        Ok(decode_rows(rows, "book"))
    }

    async fn get_all_food_places(&self) -> Result<Vec<FoodPlace>, StoreError> {
        let query = format!("{FOOD_PLACE_QUERY} ORDER BY name");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query food places"))?;
        Ok(decode_rows(rows, "food place"))
    }

    async fn get_food_places_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<FoodPlace>, StoreError> {
        let query = format!("{FOOD_PLACE_QUERY} WHERE location = $1 ORDER BY name");
        let rows = sqlx::query(&query)
            .bind(location)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query food places by location"))?;
        Ok(decode_rows(rows, "food place"))
    }

    async fn get_all_tv_shows(&self) -> Result<Vec<TvShow>, StoreError> {
        let rows = sqlx::query(TV_SHOW_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query tv shows"))?;
        Ok(decode_rows(rows, "tv show"))
    }

    async fn get_all_people(&self) -> Result<Vec<Person>, StoreError> {
        let rows = sqlx::query(PERSON_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query people"))?;
        Ok(decode_rows(rows, "person"))
    }

    async fn get_all_journal_entries(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let rows = sqlx::query(JOURNAL_QUERY)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("query journal entries"))?;
        Ok(decode_rows(rows, "journal entry"))
    }

    async fn create_journal_entry(&self, input: &NewJournalEntry) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO journal_entries (title, entry, tags, photos) VALUES ($1, $2, $3, $4)",
        )
        .bind(&input.title)
        .bind(&input.entry)
        .bind(&input.tags)
        .bind(&input.photos)
        .execute(&self.pool)
        .await
        .map_err(storage("insert journal entry"))?;
        Ok(())
    }

    async fn create_photo(&self, file_name: &str, bytes: &[u8]) -> Result<DbId, StoreError> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO files (file_name, bytes) VALUES ($1, $2) RETURNING id",
        )
        .bind(file_name)
        .bind(bytes)
        .fetch_one(&self.pool)
        .await
        .map_err(storage("insert photo"))
    }

    async fn get_photo_by_id(&self, id: DbId) -> Result<Photo, StoreError> {
        sqlx::query_as::<_, Photo>(PHOTO_QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage("query photo"))?
            .ok_or(StoreError::NotFound {
                entity: "Photo",
                id,
            })
    }
}
