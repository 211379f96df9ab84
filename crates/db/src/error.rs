use lifejournal_core::types::DbId;

/// Failure of a repository operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A single-row lookup matched nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// The backend rejected or failed to run the statement.
    #[error("Failed to {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Build a `map_err` adapter that tags a sqlx error with the failing operation.
pub(crate) fn storage(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |source| StoreError::Storage { operation, source }
}
