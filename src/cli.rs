//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros.
//! This module defines the `Args` struct containing all CLI arguments
//! with validation logic.

use clap::Parser;
use encoding_rs::Encoding;
use std::path::PathBuf;

use crate::convert::OutputFormat;

/// Command-line arguments for the loadfile converter.
///
/// This struct defines all CLI arguments using clap derive macros.
/// Use the `validate()` method after parsing to ensure the argument
/// combination is valid.
///
/// # Example
///
/// ```rust,ignore
/// use clap::Parser;
/// use loadfile::cli::Args;
///
/// let args = Args::parse();
/// args.validate()?;
/// ```
#[derive(Parser, Debug)]
#[command(name = "loadfile")]
#[command(about = "Convert a .DAT formatted loadfile to CSV or JSON")]
#[command(version)]
pub struct Args {
    /// The loadfile to convert
    pub source: PathBuf,

    /// Directory where the converted file will be created
    pub dest: PathBuf,

    /// Convert to JSON, rather than CSV (the default)
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Override the detected text encoding (a WHATWG label, e.g.
    /// "utf-8" or "windows-1252")
    #[arg(long)]
    pub encoding: Option<String>,
}

impl Args {
    /// Validate the argument combination.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the arguments are valid
    /// - `Err(String)` with a descriptive message if validation fails
    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_os_str().is_empty() {
            return Err("source path must not be empty".to_string());
        }
        if self.dest.as_os_str().is_empty() {
            return Err("destination directory must not be empty".to_string());
        }
        if let Some(label) = &self.encoding {
            if Encoding::for_label(label.as_bytes()).is_none() {
                return Err(format!("unknown encoding label '{label}'"));
            }
        }
        Ok(())
    }

    /// The destination format selected by the flags.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Csv
        }
    }

    /// The encoding override, resolved to a concrete encoding.
    ///
    /// Returns `None` when no override was given; the label is known to be
    /// valid after `validate()` has passed.
    #[must_use]
    pub fn encoding_override(&self) -> Option<&'static Encoding> {
        self.encoding
            .as_ref()
            .and_then(|label| Encoding::for_label(label.as_bytes()))
    }
}
