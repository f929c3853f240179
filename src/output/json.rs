//! JSON emitter.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dat::Record;
use crate::error::LoadfileError;

/// Writes records to a JSON file at `path`, creating or truncating it.
///
/// The output is a JSON array of objects with 4-space indentation. Keys are
/// sorted lexicographically within each object, which is done by routing
/// each record through a `BTreeMap` before serialization. An empty record
/// list serializes to `[]`.
pub fn write_json(records: &[Record], path: &Path) -> Result<(), LoadfileError> {
    let sorted: Vec<BTreeMap<&str, &str>> = records
        .iter()
        .map(|record| {
            record
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect()
        })
        .collect();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    sorted.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
