//! Conversion orchestration.
//!
//! Drives the pipeline end to end for one source file: verify the source,
//! detect the encoding, decode into lines, parse rows, build records, and
//! run the selected emitter. The transform is all-or-nothing: any fatal
//! error aborts the conversion before a destination file holds output.

use encoding_rs::Encoding;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::dat::{build_records, parse_rows, read_lines};
use crate::error::LoadfileError;
use crate::output::{write_csv, write_json};

/// Destination format for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// RFC 4180-style CSV with a header row.
    Csv,
    /// Pretty-printed JSON array of key-sorted objects.
    Json,
}

impl OutputFormat {
    /// File extension appended to the source file name.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Summary of one completed conversion.
///
/// Produced by [`convert_file`] on success; the `Display` impl formats a
/// short report for the console.
#[derive(Debug)]
pub struct ConversionSummary {
    /// Path of the file that was written.
    pub dest: PathBuf,
    /// Number of records converted (data rows, header excluded).
    pub records: usize,
    /// Number of columns in the table.
    pub columns: usize,
    /// Name of the encoding the source was decoded with.
    pub encoding: &'static str,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records x {} columns ({}) -> {}",
            self.records,
            self.columns,
            self.encoding,
            self.dest.display()
        )
    }
}

/// Converts one loadfile to CSV or JSON in the given destination directory.
///
/// The destination file name is the source file name with the format's
/// extension appended, e.g. `EXPORT.DAT` becomes `EXPORT.DAT.csv`. The
/// source must be an existing regular file; a directory or missing path is
/// reported as [`LoadfileError::NotAFile`] without touching the
/// destination. When `encoding_override` is `None`, the encoding is
/// detected from the raw bytes.
///
/// On success the destination file has been created (or overwritten) and a
/// [`ConversionSummary`] describes what was written.
pub fn convert_file(
    source: &Path,
    dest_dir: &Path,
    format: OutputFormat,
    encoding_override: Option<&'static Encoding>,
) -> Result<ConversionSummary, LoadfileError> {
    if !source.is_file() {
        return Err(LoadfileError::NotAFile(source.to_path_buf()));
    }
    // is_file() guarantees a final path component exists
    let file_name = source
        .file_name()
        .ok_or_else(|| LoadfileError::NotAFile(source.to_path_buf()))?;
    let mut dest_name = file_name.to_os_string();
    dest_name.push(".");
    dest_name.push(format.extension());
    let dest = dest_dir.join(dest_name);

    tracing::info!(
        source = %source.display(),
        dest = %dest.display(),
        format = ?format,
        "starting conversion"
    );

    let decoded = read_lines(source, encoding_override)?;
    let rows = parse_rows(&decoded.lines)?;
    let columns = rows[0].len();
    let records = build_records(rows);

    match format {
        OutputFormat::Csv => write_csv(&records, &dest)?,
        OutputFormat::Json => write_json(&records, &dest)?,
    }

    Ok(ConversionSummary {
        dest,
        records: records.len(),
        columns,
        encoding: decoded.encoding.name(),
    })
}
