//! Embedded SQLite adapter.
//!
//! Opens (or creates) a database file and bootstraps the schema before first
//! use. Queries use `?` placeholders and coalesce NULL columns in SQL.

use std::str::FromStr;

use async_trait::async_trait;
use lifejournal_core::types::DbId;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::Backend;
use crate::error::{storage, StoreError};
use crate::models::{
    Book, Concert, FoodPlace, JournalEntry, Movie, NewJournalEntry, Person, Photo, TvShow,
};
use crate::repository::Repository;
use crate::rows::decode_rows;

/// Idempotent `CREATE TABLE IF NOT EXISTS` statements for every table.
pub const SCHEMA: &str = include_str!("../schema/sqlite.sql");

/// Maximum pooled connections for a file-backed store.
const MAX_CONNECTIONS: u32 = 5;

const CONCERT_QUERY: &str = "\
    SELECT COALESCE(CAST(date AS TEXT), '') AS date, COALESCE(artists, '') AS artists, \
           COALESCE(notes, '') AS notes, COALESCE(people_went_with, '') AS people \
    FROM concerts";

const MOVIE_QUERY: &str = "\
    SELECT COALESCE(title, '') AS title, COALESCE(tier, '') AS tier \
    FROM watched_movies";

const BOOK_QUERY: &str = "\
    SELECT COALESCE(title, '') AS title, COALESCE(rating, 0.0) AS rating, \
           COALESCE(pages, 0) AS pages, COALESCE(author, '') AS author, \
           COALESCE(series, '') AS series, COALESCE(finished, 0) AS finished \
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
    SELECT COALESCE(id, 0) AS id, COALESCE(first, '') AS first, \
           COALESCE(middle, '') AS middle, COALESCE(last, '') AS last, \
           COALESCE(address, '') AS address, COALESCE(birth_day, 0) AS birth_day, \
           COALESCE(birth_month, 0) AS birth_month, COALESCE(birth_year, 0) AS birth_year, \
           COALESCE(gift_ideas, '') AS gift_ideas, COALESCE(email, '') AS email, \
           COALESCE(category, '') AS category, COALESCE(notes, '') AS notes \
    FROM people \
    ORDER BY COALESCE(last, ''), COALESCE(first, '')";

const JOURNAL_QUERY: &str = "\
    SELECT id, COALESCE(CAST(created AS TEXT), CURRENT_TIMESTAMP) AS created, \
           COALESCE(title, '') AS title, COALESCE(entry, '') AS entry, \
           COALESCE(tags, '') AS tags, COALESCE(photos, '') AS photos \
    FROM journal_entries \
    ORDER BY journal_entries.created DESC, id DESC";

const PHOTO_QUERY: &str = "\
    SELECT id, COALESCE(file_name, '') AS file_name, bytes, \
           COALESCE(CAST(created AS TEXT), CURRENT_TIMESTAMP) AS created \
    FROM files \
    WHERE id = ?";

/// [`Repository`] backed by an embedded SQLite database.
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Open the database file at `path`, creating it if missing, and make
    /// sure every table exists.
    pub async fn connect(path: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(storage("open sqlite database"))?;

        tracing::info!(path, "SQLite database opened");

        let repo = Self { pool };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Open a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// SQLite in-memory connection is a separate database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(storage("parse sqlite options"))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(storage("open sqlite database"))?;

        let repo = Self { pool };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Create every table that does not exist yet. Safe to run repeatedly.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(storage("create schema"))?;
        tracing::debug!("SQLite schema ensured");
        Ok(())
    }

    /// The underlying pool, for seeding and maintenance outside the repository.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    fn backend(&self) -> Backend {
        Backend::Sqlite
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
        let query = format!("{MOVIE_QUERY} WHERE tier = ?");
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
        let query = format!("{FOOD_PLACE_QUERY} WHERE location = ? ORDER BY name");
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
        sqlx::query("INSERT INTO journal_entries (title, entry, tags, photos) VALUES (?, ?, ?, ?)")
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
        let result = sqlx::query("INSERT INTO files (file_name, bytes) VALUES (?, ?)")
            .bind(file_name)
            .bind(bytes)
            .execute(&self.pool)
            .await
            .map_err(storage("insert photo"))?;
        Ok(result.last_insert_rowid())
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
