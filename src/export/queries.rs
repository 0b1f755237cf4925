//! Store queries used by the export.

use sqlx::SqlitePool;

use crate::config::{IOSETS_TABLE, MEMORY_SIZE_COLUMN, STATE_COLUMN, VALUE_COLUMN};
use crate::storage::StoreValue;

/// Fetches every distinct `(memory_size, state)` pair, in store order.
pub(crate) async fn fetch_distinct_pairs(
    pool: &SqlitePool,
) -> Result<Vec<(StoreValue, StoreValue)>, sqlx::Error> {
    let sql = format!("SELECT DISTINCT {MEMORY_SIZE_COLUMN}, {STATE_COLUMN} FROM {IOSETS_TABLE}");
    let rows = sqlx::query(&sql).fetch_all(pool).await?;

    rows.iter()
        .map(|row| Ok((StoreValue::from_row(row, 0)?, StoreValue::from_row(row, 1)?)))
        .collect()
}

/// Fetches the values of every row whose pair equals `(memory_size, state)`.
///
/// Uses `IS` rather than `=` so that a pair containing NULL still matches
/// its own rows; for non-NULL operands the two are identical.
pub(crate) async fn fetch_group_values(
    pool: &SqlitePool,
    memory_size: &StoreValue,
    state: &StoreValue,
) -> Result<Vec<StoreValue>, sqlx::Error> {
    let sql = format!(
        "SELECT {VALUE_COLUMN} FROM {IOSETS_TABLE}
         WHERE {MEMORY_SIZE_COLUMN} IS ? AND {STATE_COLUMN} IS ?"
    );
    let query = state.bind_to(memory_size.bind_to(sqlx::query(&sql)));
    let rows = query.fetch_all(pool).await?;

    rows.iter().map(|row| StoreValue::from_row(row, 0)).collect()
}
