//! CSV export functionality.
//!
//! One record per distinct pair, each record holding a single field with the
//! pair and its IO values. Records are written as soon as their group is
//! fetched, so a failure part-way leaves the earlier records in the file.

use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use log::{debug, info};
use sqlx::SqlitePool;
use std::fs::File;
use std::path::Path;

use crate::storage::open_store;

use super::queries::{fetch_distinct_pairs, fetch_group_values};
use super::types::{ExportOptions, ExportReport, Group};

/// Exports every group in the store to a CSV file.
///
/// The store is opened read-only and closed again before this function
/// returns, on success and on failure alike.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or queried, or if the
/// output file cannot be created or written.
pub async fn export_groups(opts: &ExportOptions) -> Result<ExportReport> {
    let pool = open_store(&opts.db_path)
        .await
        .with_context(|| format!("Failed to open database: {}", opts.db_path.display()))?;

    let result = write_groups(&pool, &opts.output).await;
    pool.close().await;
    debug!("Closed store {}", opts.db_path.display());

    let report = result?;
    info!(
        "Exported {} group{} ({} IO values) to {}",
        report.groups,
        if report.groups == 1 { "" } else { "s" },
        report.values,
        report.output.display()
    );
    Ok(report)
}

async fn write_groups(pool: &SqlitePool, output: &Path) -> Result<ExportReport> {
    let pairs = fetch_distinct_pairs(pool)
        .await
        .context("Failed to query distinct (memory_size, state) pairs")?;
    debug!("Found {} distinct pairs", pairs.len());

    let mut writer = create_writer(output)?;
    let mut report = ExportReport {
        groups: 0,
        values: 0,
        output: output.to_path_buf(),
    };

    for (memory_size, state) in pairs {
        let ios = fetch_group_values(pool, &memory_size, &state)
            .await
            .with_context(|| {
                format!("Failed to query values for memory size {memory_size}, state {state}")
            })?;
        let group = Group {
            memory_size,
            state,
            ios,
        };

        writer
            .write_record([group.describe()])
            .with_context(|| format!("Failed to write record to {}", output.display()))?;

        report.groups += 1;
        report.values += group.ios.len();
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", output.display()))?;

    Ok(report)
}

/// Creates (or truncates) the output file with CRLF record terminators.
fn create_writer(output: &Path) -> Result<Writer<File>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_path(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))
}
