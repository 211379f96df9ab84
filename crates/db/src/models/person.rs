use lifejournal_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `people` table.
///
/// Birth date parts are stored separately because any of them may be
/// unknown; unknown parts read as `0`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(rename = "ID")]
    pub id: DbId,
    pub first: String,
    pub middle: String,
    pub last: String,
    pub address: String,
    pub birth_day: i32,
    pub birth_month: i32,
    pub birth_year: i32,
    pub gift_ideas: String,
    pub email: String,
    pub category: String,
    pub notes: String,
}
