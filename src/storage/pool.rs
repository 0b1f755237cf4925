//! Database connection pool management.
//!
//! The exporter only reads the store, so the pool is opened read-only with a
//! single connection and the database file is never created.

use std::path::Path;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::STORE_MAX_CONNECTIONS;
use crate::error_handling::DatabaseError;

/// Opens the store at `db_path` for reading.
///
/// Fails with `DatabaseError::NotFound` when the file does not exist, instead
/// of silently creating an empty database the way SQLite would by default.
/// The caller owns the returned pool and must `close()` it when done.
pub async fn open_store(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    if !db_path.is_file() {
        error!("Database file does not exist: {}", db_path.display());
        return Err(DatabaseError::NotFound(db_path.to_path_buf()));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(STORE_MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {e}");
            DatabaseError::SqlError(e)
        })?;

    info!("Opened store {}", db_path.display());
    Ok(pool)
}
