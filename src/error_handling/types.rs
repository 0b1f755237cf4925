//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for store operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The store file does not exist; the exporter never creates one.
    #[error("Database file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Coarse category of a [`DumpError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpErrorKind {
    /// Reading the dump or writing the log failed.
    Io,
    /// The dump content does not have the expected shape.
    Parse,
}

impl DumpErrorKind {
    /// Short label used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            DumpErrorKind::Io => "I/O error",
            DumpErrorKind::Parse => "Parse error",
        }
    }
}

impl std::fmt::Display for DumpErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for dump formatting.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The dump file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Dump that was being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Log that was being written
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// The dump path is not valid UTF-8, so no log path can be derived from it.
    #[error("dump path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// Malformed JSON, or an entry with a missing or mistyped field.
    #[error("invalid dump: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry key with a segment that is not an integer.
    #[error("invalid key {key:?}: segment {segment:?} is not an integer")]
    InvalidKey {
        /// The whole key
        key: String,
        /// The first segment that failed to parse
        segment: String,
    },
}

impl DumpError {
    /// Returns whether this failure came from I/O or from the dump content.
    pub fn kind(&self) -> DumpErrorKind {
        match self {
            DumpError::Read { .. } | DumpError::Write { .. } | DumpError::NonUtf8Path(_) => {
                DumpErrorKind::Io
            }
            DumpError::Json(_) | DumpError::InvalidKey { .. } => DumpErrorKind::Parse,
        }
    }
}
