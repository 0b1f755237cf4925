//! Formatting of JSON IO-set dumps into sorted, human-readable logs.
//!
//! A dump is a JSON list of `{"key": "3_7", "members": [...]}` objects. Entries
//! are ordered by their key's integer components read right to left, then
//! written one per line to a `.log` file named after the dump.

mod entry;
mod format;
mod output;
mod sort_key;

pub use entry::{parse_entries, Entry};
pub use format::{format_dump, sort_entries, FormatOptions, FormatReport};
pub use output::{derive_log_path, render_line, write_log};
pub use sort_key::{KeyInt, SortKey};
