use serde::Serialize;
use sqlx::FromRow;

/// A row from the `concerts` table. Identified by its date.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Concert {
    pub date: String,
    pub artists: String,
    pub notes: String,
    /// Who came along (`people_went_with`).
    pub people: String,
}
