//! CSV emitter.

use csv::Writer;
use std::path::Path;

use crate::dat::Record;
use crate::error::LoadfileError;

/// Writes records to a CSV file at `path`, creating or truncating it.
///
/// The header row is taken from the first record's key order; every record
/// then contributes one line with its values in that same order. Quoting
/// follows RFC 4180 via the `csv` crate: fields containing the delimiter,
/// the quote character, or line breaks are quoted and escaped automatically.
///
/// # Errors
///
/// Returns [`LoadfileError::NoRecords`] for an empty record list (there is
/// no first record to infer a header from), or an I/O / CSV error if the
/// destination file cannot be written.
pub fn write_csv(records: &[Record], path: &Path) -> Result<(), LoadfileError> {
    let first = records.first().ok_or(LoadfileError::NoRecords)?;

    let mut writer = Writer::from_path(path)?;
    writer.write_record(first.keys())?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}
