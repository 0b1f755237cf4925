//! Export of IO-set groups from the SQLite store.
//!
//! Every distinct `(memory_size, state)` pair in the store becomes one CSV
//! record listing the pair and all values recorded for it.

mod csv;
mod queries;
mod types;

pub use self::csv::export_groups;
pub use types::{ExportOptions, ExportReport, Group};
