use lifejournal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `files` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Raw upload content; served as-is, never serialized into JSON.
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub created: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_not_serialized() {
        let photo = Photo {
            id: 7,
            file_name: "a.png".into(),
            bytes: vec![1, 2, 3],
            created: "2024-05-01 08:30:00".into(),
        };
        let json = serde_json::to_value(&photo).unwrap();
        assert_eq!(json["fileName"], "a.png");
        assert!(json.get("bytes").is_none());
    }
}
