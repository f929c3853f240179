//! Line reader for .DAT loadfiles.
//!
//! Reads the whole source file into memory, decodes it with a detected or
//! caller-supplied encoding, and splits the text into lines. Loadfiles are
//! small metadata exports, so a single in-memory read keeps the pipeline a
//! strictly forward, single-pass transform.

use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

use super::encoding::{decode_with_escapes, detect_encoding};
use crate::error::LoadfileError;

/// The decoded contents of a loadfile, split into lines.
///
/// Lines keep their original terminators; normalization is left to the row
/// parser, which strips line-ending noise as part of cell cleanup.
#[derive(Debug)]
pub struct DecodedLines {
    /// The decoded text lines, each retaining its terminator (if any).
    pub lines: Vec<String>,
    /// The encoding the file was decoded with.
    pub encoding: &'static Encoding,
}

/// Reads a loadfile and decodes it into an ordered sequence of text lines.
///
/// When `encoding_override` is `None` the encoding is sniffed from the raw
/// bytes. Byte sequences the encoding cannot map are replaced with visible
/// `\xNN` escapes rather than aborting, so decoding never silently drops
/// data. A failure to read the file at all is fatal for the conversion.
pub fn read_lines(
    path: &Path,
    encoding_override: Option<&'static Encoding>,
) -> Result<DecodedLines, LoadfileError> {
    let raw = fs::read(path)?;

    let encoding = match encoding_override {
        Some(encoding) => encoding,
        None => detect_encoding(&raw),
    };
    tracing::debug!(
        path = %path.display(),
        encoding = encoding.name(),
        bytes = raw.len(),
        "decoding loadfile"
    );

    let text = decode_with_escapes(&raw, encoding);
    let lines = split_lines(&text);

    Ok(DecodedLines { lines, encoding })
}

/// Splits decoded text into lines, each keeping its trailing terminator.
///
/// A final line without a terminator is kept as-is; an empty input yields
/// no lines at all.
fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
