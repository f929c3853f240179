//! loadfile - Convert legal-discovery .DAT loadfiles to CSV or JSON
//!
//! A .DAT loadfile is a flat-file export used to transfer document metadata
//! between e-discovery systems: records separated by line breaks, fields by
//! ASCII 0x14, values optionally wrapped in ASCII 0xFE ("þ"). This tool
//! detects the source encoding, parses the table, and writes either an
//! RFC 4180 CSV or a pretty-printed JSON array into the destination
//! directory. The conversion is all-or-nothing per invocation.
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration/argument error |
//! | 3 | File I/O or data error |

mod cli;
mod convert;
mod dat;
mod error;
mod output;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cli::Args;
use convert::convert_file;
use error::LoadfileError;

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration/argument errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O and data errors
const EXIT_DATA_ERROR: u8 = 3;

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never mix with reported paths;
    // enable with e.g. RUST_LOG=loadfile=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", LoadfileError::InvalidArgument(e));
        eprintln!("  Hint: Use --help for usage information");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    match convert_file(
        &args.source,
        &args.dest,
        args.format(),
        args.encoding_override(),
    ) {
        Ok(summary) => {
            tracing::debug!(%summary, "conversion finished");
            println!("Success: output saved to {}", summary.dest.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

/// Maps an error to its process exit code.
fn error_to_exit_code(error: &LoadfileError) -> u8 {
    match error {
        LoadfileError::InvalidArgument(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_DATA_ERROR,
    }
}
