use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tv_shows` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TvShow {
    pub title: String,
    pub notes: String,
    pub seasons_watched: String,
}
