// Shared test helpers for store setup and temp directories.
//
// Included by several test files via `#[path = "helpers.rs"]`.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temp directory whose path contains no `.`.
///
/// The formatter names its log after everything before the first dot of the
/// dump path, so tests that go through that rule need dot-free directories
/// (the default `.tmpXXXX` prefix would not do).
#[allow(dead_code)] // Used by other test files
pub fn dotless_temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("iosettest")
        .tempdir()
        .expect("Failed to create temp directory")
}

/// Creates a store at `db_path` with an empty `iosets` table and returns a
/// writable pool for inserting fixtures.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_store(db_path: &Path) -> SqlitePool {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await
    .expect("Failed to create test database");

    sqlx::query(
        "CREATE TABLE iosets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            memory_size INTEGER NOT NULL,
            state TEXT NOT NULL,
            value TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create iosets table");

    pool
}

/// Inserts one `(memory_size, state, value)` row.
#[allow(dead_code)] // Used by other test files
pub async fn insert_ioset(pool: &SqlitePool, memory_size: i64, state: &str, value: &str) {
    sqlx::query("INSERT INTO iosets (memory_size, state, value) VALUES (?, ?, ?)")
        .bind(memory_size)
        .bind(state)
        .bind(value)
        .execute(pool)
        .await
        .expect("Failed to insert ioset row");
}

/// Reads every record of a headerless CSV file, one field vector per record.
#[allow(dead_code)] // Used by other test files
pub fn read_csv_records(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("Failed to open CSV output");
    reader
        .records()
        .map(|r| {
            r.expect("Failed to read CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
