use lifejournal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `journal_entries` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct JournalEntry {
    pub id: DbId,
    /// Assigned by the store on insert.
    pub created: Timestamp,
    pub title: String,
    pub entry: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Comma-separated photo ids from `/journal/upload/photos`.
    pub photos: String,
}

/// Request body for creating a journal entry.
///
/// Missing fields deserialize as empty strings. Capitalized keys are
/// accepted for older clients.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewJournalEntry {
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Entry")]
    pub entry: String,
    #[serde(alias = "Tags")]
    pub tags: String,
    #[serde(alias = "Photos")]
    pub photos: String,
}
