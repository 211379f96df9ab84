/// Store-assigned row identifiers (SQLite rowids, PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Creation timestamp exactly as the store renders it, normally
/// `YYYY-MM-DD HH:MM:SS` in UTC. Kept as text so hand-edited values such as a
/// bare date still load.
pub type Timestamp = String;
