//! The storage contract the HTTP layer depends on.

use async_trait::async_trait;
use lifejournal_core::types::DbId;

use crate::backend::Backend;
use crate::error::StoreError;
use crate::models::{
    Book, Concert, FoodPlace, JournalEntry, Movie, NewJournalEntry, Person, Photo, TvShow,
};

/// Read and write access to the life journal, independent of the SQL backend.
///
/// Each method runs exactly one parameterized statement. Multi-row fetches
/// drop rows that fail to decode instead of failing (see `decode_rows`), and
/// text columns are never NULL in the returned records.
///
/// Filter arguments are compared exactly; callers normalize them first
/// (see [`lifejournal_core::params`]).
#[async_trait]
pub trait Repository: Send + Sync {
    /// Which backend serves this repository.
    fn backend(&self) -> Backend;

    /// Run a trivial query to confirm the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    async fn get_all_concerts(&self) -> Result<Vec<Concert>, StoreError>;

    async fn get_all_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Movies whose tier equals `tier`. Returns an empty list when none match.
    async fn get_movies_by_tier(&self, tier: &str) -> Result<Vec<Movie>, StoreError>;

    async fn get_all_books(&self) -> Result<Vec<Book>, StoreError>;

    /// All food places, ordered by name ascending.
    async fn get_all_food_places(&self) -> Result<Vec<FoodPlace>, StoreError>;

    /// Food places at `location`, ordered by name ascending.
    async fn get_food_places_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<FoodPlace>, StoreError>;

    async fn get_all_tv_shows(&self) -> Result<Vec<TvShow>, StoreError>;

    /// All people, ordered by last name then first name.
    async fn get_all_people(&self) -> Result<Vec<Person>, StoreError>;

    /// All journal entries, newest first.
    async fn get_all_journal_entries(&self) -> Result<Vec<JournalEntry>, StoreError>;

    /// Insert a journal entry. The id and creation time are assigned by the store.
    async fn create_journal_entry(&self, input: &NewJournalEntry) -> Result<(), StoreError>;

    /// Insert a photo and return its store-assigned id.
    async fn create_photo(&self, file_name: &str, bytes: &[u8]) -> Result<DbId, StoreError>;

    /// Fetch one photo, failing with [`StoreError::NotFound`] when absent.
    async fn get_photo_by_id(&self, id: DbId) -> Result<Photo, StoreError>;
}
