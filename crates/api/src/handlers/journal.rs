//! Journal entry endpoints: listing and creation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use lifejournal_core::journal::validate_journal_entry;
use lifejournal_db::models::{JournalEntry, NewJournalEntry};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::GzipJson;
use crate::state::AppState;

/// Confirmation returned after a journal entry is stored.
#[derive(Debug, Serialize)]
pub struct CreateEntryResponse {
    pub message: &'static str,
    /// The entry as received.
    pub entries: NewJournalEntry,
}

/// GET /api/journal
///
/// All entries, newest first.
pub async fn list_entries(
    State(state): State<AppState>,
) -> AppResult<GzipJson<Vec<JournalEntry>>> {
    let entries = state.repo.get_all_journal_entries().await?;
    Ok(GzipJson(entries))
}

/// POST /journal/upload
///
/// Body: `{ "title", "entry", "tags", "photos" }`. Only `entry` is required.
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewJournalEntry>, JsonRejection>,
) -> AppResult<Json<CreateEntryResponse>> {
    let Json(input) =
        payload.map_err(|e| AppError::BadRequest(format!("Error parsing body: {e}")))?;

    validate_journal_entry(&input.title, &input.entry)?;

    state.repo.create_journal_entry(&input).await?;

    tracing::info!(
        title = %input.title,
        entry_len = input.entry.len(),
        "Journal entry created",
    );

    Ok(Json(CreateEntryResponse {
        message: "Success",
        entries: input,
    }))
}
