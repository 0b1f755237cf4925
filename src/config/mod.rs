//! Command-line options and constants.
//!
//! This module provides:
//! - Store layout and output format constants
//! - CLI option types shared by the `exporter` and `formatter` binaries

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ExporterArgs, FormatterArgs, LogFormat, LogLevel};
