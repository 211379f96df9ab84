use serde::Serialize;
use sqlx::FromRow;

/// A row from the `food_places` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FoodPlace {
    pub name: String,
    /// Lower-case city or neighbourhood.
    pub location: String,
    pub notes: String,
    /// Cuisine or kind of place (`type` column).
    #[serde(rename = "Type")]
    pub kind: String,
    pub category: String,
}
