use serde::Serialize;
use sqlx::FromRow;

/// A row from the `watched_movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Movie {
    pub title: String,
    /// Upper-case ranking bucket, e.g. `"S"` or `"COMEDY"`.
    pub tier: String,
}
