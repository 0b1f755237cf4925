//! Export types and options.

use std::path::PathBuf;

use crate::config::IO_SEPARATOR;
use crate::storage::StoreValue;

/// Options for exporting groups.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Store path
    pub db_path: PathBuf,
    /// CSV file to create
    pub output: PathBuf,
}

/// Summary of a finished export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of records written, one per distinct pair
    pub groups: usize,
    /// Number of IO values across all records
    pub values: usize,
    /// CSV file that was written
    pub output: PathBuf,
}

/// The values sharing one distinct `(memory_size, state)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Size attribute of the pair
    pub memory_size: StoreValue,
    /// State attribute of the pair
    pub state: StoreValue,
    /// Values of every row with this pair, in store order
    pub ios: Vec<StoreValue>,
}

impl Group {
    /// Renders the single CSV field written for this group.
    pub fn describe(&self) -> String {
        let ios = self
            .ios
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(IO_SEPARATOR);
        format!(
            "Memory Size: {}, State: {}, IOs: {}",
            self.memory_size, self.state, ios
        )
    }
}
