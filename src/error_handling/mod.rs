//! Error type definitions.
//!
//! This module provides:
//! - Initialization errors (logger setup)
//! - Store errors raised while opening or querying the SQLite database
//! - Dump errors raised by the formatter, tagged as I/O or parse failures
//!
//! The formatter reports every `DumpError` the same way; the tag exists so
//! callers and tests can tell the two causes apart.

mod types;

// Re-export public API
pub use types::{DatabaseError, DumpError, DumpErrorKind, InitializationError};
