//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing.
//! The binaries parse into these structs and hand the library plain option
//! structs, so nothing below the binaries reads the process argument list.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::dump::FormatOptions;
use crate::export::ExportOptions;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `exporter` binary.
///
/// # Examples
///
/// ```bash
/// exporter iosets.db groups.csv
/// exporter iosets.db groups.csv --log-level debug
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "exporter",
    version,
    about = "Writes one CSV line per distinct (memory size, state) pair with its IO values."
)]
pub struct ExporterArgs {
    /// SQLite database containing the `iosets` table
    #[arg(value_parser)]
    pub database: PathBuf,

    /// CSV file to create (overwritten if it exists)
    #[arg(value_parser)]
    pub output: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl ExporterArgs {
    /// Builds the library options for this invocation.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            db_path: self.database.clone(),
            output: self.output.clone(),
        }
    }
}

/// Command-line options for the `formatter` binary.
///
/// # Examples
///
/// ```bash
/// # Writes dump.log next to dump.json
/// formatter dump.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "formatter",
    version,
    about = "Sorts a JSON IO-set dump by reversed numeric key and writes a readable log."
)]
pub struct FormatterArgs {
    /// JSON dump file (list of {"key", "members"} objects)
    #[arg(value_parser)]
    pub dump: PathBuf,

    /// Further positionals are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl FormatterArgs {
    /// Builds the library options for this invocation.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            dump_path: self.dump.clone(),
        }
    }
}
