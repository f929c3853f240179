//! Record construction from parsed rows.

use indexmap::IndexMap;

/// One converted record: a mapping from field name to cell value.
///
/// Insertion order matches the header row, so iterating a record yields
/// fields in the same order for every record of a conversion.
pub type Record = IndexMap<String, String>;

/// Zips the header row with each data row into named records.
///
/// The first row of `rows` is consumed as the field-name row; every
/// following row becomes one record whose keys are the header values in
/// header order. Callers must pass rows validated to a uniform column
/// count (see [`parse_rows`](super::parse_rows)).
///
/// Returns one record per data row; an input of just a header row yields
/// an empty list.
#[must_use]
pub fn build_records(rows: Vec<Vec<String>>) -> Vec<Record> {
    let mut iter = rows.into_iter();
    let Some(header) = iter.next() else {
        return Vec::new();
    };

    let data_rows = iter.len();
    let records: Vec<Record> = iter
        .map(|row| header.iter().cloned().zip(row).collect())
        .collect();

    debug_assert_eq!(records.len(), data_rows);
    records
}
