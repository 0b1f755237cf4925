//! Dynamically-typed store cells.
//!
//! SQLite columns carry no enforced type, so pair attributes are read with
//! their storage class intact and bound back unchanged for the per-pair query.

use std::fmt;

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, TypeInfo, ValueRef};

/// One cell read from the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl StoreValue {
    /// Reads column `index` of `row` using the storage class of the value.
    pub fn from_row(row: &SqliteRow, index: usize) -> Result<Self, sqlx::Error> {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(StoreValue::Null);
        }
        let storage_class = raw.type_info().name().to_string();

        let value = match storage_class.as_str() {
            "INTEGER" => StoreValue::Integer(row.try_get(index)?),
            "REAL" => StoreValue::Real(row.try_get(index)?),
            "BLOB" => StoreValue::Blob(row.try_get(index)?),
            _ => StoreValue::Text(row.try_get(index)?),
        };
        Ok(value)
    }

    /// Binds this value as the next positional parameter of `query`.
    pub fn bind_to<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            StoreValue::Null => query.bind(None::<i64>),
            StoreValue::Integer(v) => query.bind(*v),
            StoreValue::Real(v) => query.bind(*v),
            StoreValue::Text(v) => query.bind(v.clone()),
            StoreValue::Blob(v) => query.bind(v.clone()),
        }
    }
}

impl fmt::Display for StoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreValue::Null => f.write_str("NULL"),
            StoreValue::Integer(v) => write!(f, "{v}"),
            // Debug keeps the fractional part of whole numbers (4.0, not 4)
            StoreValue::Real(v) => write!(f, "{v:?}"),
            StoreValue::Text(v) => f.write_str(v),
            StoreValue::Blob(v) => f.write_str(&String::from_utf8_lossy(v)),
        }
    }
}
