//! Configuration constants.
//!
//! Names of the store objects the exporter reads and the fixed parts of the
//! files both tools write.

/// Table holding one row per recorded IO value.
pub const IOSETS_TABLE: &str = "iosets";
/// Size-like attribute of a row (first half of a group's pair).
pub const MEMORY_SIZE_COLUMN: &str = "memory_size";
/// Categorical attribute of a row (second half of a group's pair).
pub const STATE_COLUMN: &str = "state";
/// Value attribute collected into a group's IO list.
pub const VALUE_COLUMN: &str = "value";

/// Separator placed between the IO values of one group.
pub const IO_SEPARATOR: &str = ", ";

/// Extension appended to the truncated dump path to name the log file.
pub const LOG_EXTENSION: &str = "log";

/// Separator between the integer components of a dump entry key.
pub const KEY_SEPARATOR: char = '_';

/// The exporter only reads, so a single connection is enough.
pub const STORE_MAX_CONNECTIONS: u32 = 1;

/// Exit status used by the exporter when its positional arguments are wrong.
pub const EXPORTER_USAGE_EXIT_CODE: i32 = -1;
/// Exit status used by the formatter for usage and processing failures.
pub const FORMATTER_FAILURE_EXIT_CODE: i32 = 1;
