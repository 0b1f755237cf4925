//! Dump formatting pipeline: read, validate, sort, write.

use std::path::PathBuf;

use log::{debug, info};

use crate::error_handling::DumpError;

use super::entry::{parse_entries, Entry};
use super::output::{derive_log_path, write_log};

/// Options for formatting a dump.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// JSON dump to read
    pub dump_path: PathBuf,
}

/// Summary of a finished formatting run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatReport {
    /// Number of lines written
    pub entries: usize,
    /// Log file that was written
    pub log_path: PathBuf,
}

/// Sorts entries ascending by their reversed-tuple key.
///
/// The sort is stable: entries with equal keys keep their dump order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}

/// Formats the dump at `opts.dump_path` into its companion log file.
///
/// The whole dump is read and validated before the log file is touched, so
/// a malformed dump never truncates an existing log.
///
/// # Errors
///
/// Returns a `DumpError` for a non-UTF-8 path, an unreadable dump, malformed
/// content or an unwritable log; see [`DumpError::kind`] for the category.
pub fn format_dump(opts: &FormatOptions) -> Result<FormatReport, DumpError> {
    let log_path = derive_log_path(&opts.dump_path)?;

    let text = std::fs::read_to_string(&opts.dump_path).map_err(|source| DumpError::Read {
        path: opts.dump_path.clone(),
        source,
    })?;

    let mut entries = parse_entries(&text)?;
    debug!(
        "Parsed {} entries from {}",
        entries.len(),
        opts.dump_path.display()
    );

    sort_entries(&mut entries);
    write_log(&log_path, &entries)?;

    info!(
        "Wrote {} entr{} to {}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        log_path.display()
    );

    Ok(FormatReport {
        entries: entries.len(),
        log_path,
    })
}
