//! `formatter` binary: JSON dump → sorted `.log` file.
//!
//! Every failure, whether usage, I/O or malformed input, is reported on
//! stderr and exits with status 1.

use clap::error::ErrorKind;
use clap::Parser;
use std::process;

use ioset_tools::config::FORMATTER_FAILURE_EXIT_CODE;
use ioset_tools::initialization::init_logger_with;
use ioset_tools::{format_dump, FormatterArgs};

fn main() {
    let args = match FormatterArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap renders the error with the usage line on stderr
            let _ = e.print();
            process::exit(FORMATTER_FAILURE_EXIT_CODE);
        }
    };

    if let Err(e) = init_logger_with(args.log_level.clone().into(), args.log_format.clone()) {
        eprintln!("formatter error: {e}");
        process::exit(FORMATTER_FAILURE_EXIT_CODE);
    }

    if let Err(e) = format_dump(&args.format_options()) {
        eprintln!("Failed to process dump file: {e}");
        process::exit(FORMATTER_FAILURE_EXIT_CODE);
    }
}
