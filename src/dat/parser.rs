//! Row parser for the .DAT loadfile format.
//!
//! A loadfile is a fixed-width table: records are separated by line breaks,
//! fields by a non-printable delimiter byte, and field values are optionally
//! wrapped in a marker character that cannot occur in normal metadata text.
//! The format has no quoting or escaping of its own, so splitting on the
//! delimiter is exact.

use crate::error::LoadfileError;

/// Field delimiter between cell values within a line (ASCII 0x14, DC4).
///
/// Not configurable: the loadfile format fixes this byte, and it is chosen
/// precisely because it never occurs in document metadata text.
pub const FIELD_DELIMITER: char = '\u{0014}';

/// Optional wrapper around each cell value (ASCII 0xFE, "þ").
pub const TEXT_WRAPPER: char = '\u{00FE}';

/// Maximum raw length of a line that is treated as a blank-line artifact.
///
/// A line this short (an empty trailing line, or a lone terminator) cannot
/// hold a record and is dropped before header detection. A CRLF pair counts
/// as a single terminator character for this comparison.
pub const BLANK_LINE_MAX_LEN: usize = 1;

/// Splits decoded lines into equal-length rows of cleaned cell values.
///
/// For each surviving line, the line is split on [`FIELD_DELIMITER`] and
/// every resulting cell is trimmed of [`TEXT_WRAPPER`] characters and
/// line-ending noise. Blank-line artifacts are dropped before the header
/// row is established, so they count neither as header nor as data.
///
/// The first returned row is the header/field-name row; every following
/// row is one record's cell values.
///
/// # Errors
///
/// - [`LoadfileError::MalformedTable`] when no rows survive the blank-line
///   filter, or when the header row has a single column (the input was not
///   field-delimited at all).
/// - [`LoadfileError::ColumnCountMismatch`] when any row's column count
///   differs from the header's. The format assumes a uniform table, so a
///   ragged row aborts the conversion rather than continuing with corrupt
///   data.
pub fn parse_rows(lines: &[String]) -> Result<Vec<Vec<String>>, LoadfileError> {
    let rows: Vec<Vec<String>> = lines
        .iter()
        .filter(|line| !is_blank_line(line))
        .map(|line| split_row(line))
        .collect();

    let Some(header) = rows.first() else {
        return Err(LoadfileError::MalformedTable(
            "no rows found in input".to_string(),
        ));
    };

    let columns = header.len();
    if columns <= 1 {
        return Err(LoadfileError::MalformedTable(format!(
            "header row has {columns} column, expected at least 2; \
             is this really a delimited loadfile?"
        )));
    }

    for (index, row) in rows.iter().enumerate().skip(1) {
        if row.len() != columns {
            return Err(LoadfileError::ColumnCountMismatch {
                row: index + 1,
                expected: columns,
                actual: row.len(),
            });
        }
    }

    Ok(rows)
}

/// Splits one line on the field delimiter and cleans each cell.
fn split_row(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER)
        .map(|cell| clean_cell(cell).to_string())
        .collect()
}

/// Strips wrapper characters and line-ending noise from a cell value.
///
/// Trimming is idempotent: a cell with no wrapper or terminator characters
/// comes back unchanged.
fn clean_cell(cell: &str) -> &str {
    cell.trim_matches(|c: char| c == TEXT_WRAPPER || c == '\n' || c == '\r')
}

/// Whether a raw line is a blank-line artifact.
///
/// The comparison is on the original line, before any wrapper-stripping.
/// A trailing CRLF pair is counted as one character so that the threshold
/// behaves the same for CRLF and LF terminated files.
fn is_blank_line(line: &str) -> bool {
    let effective_len = if line.ends_with("\r\n") {
        line.len() - 1
    } else {
        line.len()
    };
    effective_len <= BLANK_LINE_MAX_LEN
}
