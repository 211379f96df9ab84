//! Photo upload and retrieval.
//!
//! Uploaded files are kept twice: a copy in the upload directory (served
//! statically under `/uploads`) and the raw bytes in the `files` table,
//! which is what `GET /api/photos/{id}` serves.

use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use lifejournal_core::media::{content_type_for_file_name, sanitize_file_name};
use lifejournal_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Multipart field carrying the uploaded images.
pub const UPLOAD_FIELD: &str = "images[]";

/// POST /journal/upload/photos
///
/// Stores every `images[]` part in request order and returns the new ids.
/// Parts with another field name are ignored. The whole form is read and
/// checked before anything is written, so a rejected request stores nothing.
pub async fn upload_photos(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<Vec<DbId>>> {
    let mut multipart =
        multipart.map_err(|e| AppError::BadRequest(format!("Error parsing form: {e}")))?;

    let mut uploads: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let raw_name = field.file_name().unwrap_or_default().to_string();
        let file_name = sanitize_file_name(&raw_name)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid file name '{raw_name}'")))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        uploads.push((file_name, data));
    }

    if uploads.is_empty() {
        return Err(AppError::BadRequest("No files uploaded".into()));
    }

    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let mut ids = Vec::with_capacity(uploads.len());
    for (file_name, data) in uploads {
        tokio::fs::write(upload_dir.join(&file_name), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to save '{file_name}': {e}")))?;

        let photo_id = state.repo.create_photo(&file_name, &data).await?;
        tracing::info!(photo_id, file_name = %file_name, size = data.len(), "Photo stored");
        ids.push(photo_id);
    }

    tracing::info!(count = ids.len(), "Photo upload complete");
    Ok(Json(ids))
}

/// GET /api/photos/{id}
///
/// Raw stored bytes with a Content-Type guessed from the file name.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid photo id '{raw_id}'")))?;

    let photo = state.repo.get_photo_by_id(id).await?;
    let content_type = content_type_for_file_name(&photo.file_name);

    Ok(([(CONTENT_TYPE, content_type)], photo.bytes))
}
