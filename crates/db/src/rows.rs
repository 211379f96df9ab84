use sqlx::{FromRow, Row};

/// Decode fetched rows into records, skipping rows that fail to decode.
///
/// A malformed row never fails the whole fetch: it is logged and dropped,
/// and the remaining rows are returned.
pub(crate) fn decode_rows<R, T>(rows: Vec<R>, entity: &'static str) -> Vec<T>
where
    R: Row,
    T: for<'r> FromRow<'r, R>,
{
    let total = rows.len();
    let records: Vec<T> = rows
        .iter()
        .filter_map(|row| match T::from_row(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(entity, error = %e, "Skipping row that failed to decode");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::warn!(
            entity,
            total,
            skipped = total - records.len(),
            "Returning partial result set",
        );
    }

    records
}
