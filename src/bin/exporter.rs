//! `exporter` binary: store → CSV summary of IO-set groups.
//!
//! Thin wrapper around the `ioset_tools` library that handles argument
//! parsing, logger initialization and exit codes. A wrong number of
//! positional arguments prints the usage line to stdout and exits with -1.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process;

use ioset_tools::config::EXPORTER_USAGE_EXIT_CODE;
use ioset_tools::initialization::init_logger_with;
use ioset_tools::{export_groups, ExporterArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let args = match ExporterArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", ExporterArgs::command().render_usage());
            process::exit(EXPORTER_USAGE_EXIT_CODE);
        }
    };

    init_logger_with(args.log_level.clone().into(), args.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = export_groups(&args.export_options()).await {
        eprintln!("exporter error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
