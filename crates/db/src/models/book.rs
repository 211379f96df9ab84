use serde::Serialize;
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub rating: f64,
    pub pages: i32,
    pub author: String,
    pub series: String,
    pub finished: bool,
}
