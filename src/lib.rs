//! ioset_tools library: export and formatting of shift-register IO-set data
//!
//! Two independent pipelines back the crate's binaries:
//!
//! - [`export::export_groups`] reads the `iosets` table of a SQLite store and
//!   writes one CSV record per distinct `(memory_size, state)` pair listing
//!   the pair's IO values (`exporter` binary).
//! - [`dump::format_dump`] reads a JSON dump of `{key, members}` entries,
//!   sorts it by the key's integer components taken right to left and writes
//!   a plain-text log (`formatter` binary).
//!
//! # Example
//!
//! ```no_run
//! use ioset_tools::{format_dump, FormatOptions};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = format_dump(&FormatOptions {
//!     dump_path: PathBuf::from("memory.json"),
//! })?;
//! println!("{} entries written to {}", report.entries, report.log_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The export requires a Tokio runtime (the store client is async). Dump
//! formatting is synchronous.

#![warn(missing_docs)]

pub mod config;
pub mod dump;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{ExporterArgs, FormatterArgs, LogFormat, LogLevel};
pub use dump::{format_dump, FormatOptions, FormatReport};
pub use error_handling::{DatabaseError, DumpError, DumpErrorKind};
pub use export::{export_groups, ExportOptions, ExportReport};
