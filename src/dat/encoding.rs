//! Text encoding detection and lossless-by-escape decoding.
//!
//! Loadfiles come out of e-discovery platforms in whatever encoding the
//! exporting system happened to use, most often Windows-1252 or UTF-8 with
//! or without a BOM. This module sniffs the encoding from the raw bytes and
//! decodes the file so that no byte is ever silently dropped: any sequence
//! the encoding cannot map is replaced with a visible `\xNN` escape.

use chardetng::EncodingDetector;
use encoding_rs::{DecoderResult, Encoding};
use std::fmt::Write as _;

/// Detects the most likely text encoding of a raw byte buffer.
///
/// Detection is a pure function over the bytes and never fails: when the
/// evidence is inconclusive the detector falls back to its default guess,
/// and correctness is governed by the decode step downstream.
///
/// # Example
///
/// ```
/// use loadfile::dat::detect_encoding;
///
/// assert_eq!(detect_encoding(b"plain ascii text").name(), "windows-1252");
/// assert_eq!(detect_encoding("日本語テスト".as_bytes()).name(), "UTF-8");
/// ```
#[must_use]
pub fn detect_encoding(raw: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    detector.guess(None, true)
}

/// Decodes a byte buffer with the given encoding, escaping unmappable bytes.
///
/// Every byte sequence the encoding cannot represent is rendered as one
/// lowercase `\xNN` escape per offending byte, so malformed input stays
/// visible in the output instead of being dropped or collapsed into a
/// replacement character. A leading BOM is honored and removed.
///
/// # Example
///
/// ```
/// use loadfile::dat::decode_with_escapes;
///
/// // 0xFF is not a valid UTF-8 byte
/// let decoded = decode_with_escapes(b"ok\xFFok", encoding_rs::UTF_8);
/// assert_eq!(decoded, "ok\\xffok");
/// ```
#[must_use]
pub fn decode_with_escapes(raw: &[u8], encoding: &'static Encoding) -> String {
    let mut decoder = encoding.new_decoder();
    let mut out = String::new();
    let worst_case = decoder
        .max_utf8_buffer_length_without_replacement(raw.len())
        .unwrap_or(raw.len());
    out.reserve(worst_case);

    let mut consumed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&raw[consumed..], &mut out, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => {
                // Worst-case reservation was not enough (can only happen if
                // the allocation above saturated); grow and continue.
                out.reserve(4096);
            }
            DecoderResult::Malformed(bad, pending) => {
                // The malformed sequence is `bad` bytes long and ends
                // `pending` bytes before the last byte consumed; the
                // pending bytes are already held in the decoder state as
                // the start of the next character.
                let end = consumed - pending as usize;
                let start = end - bad as usize;
                for &byte in &raw[start..end] {
                    // Infallible: writing to a String cannot error
                    let _ = write!(out, "\\x{byte:02x}");
                }
            }
        }
    }
    out
}
