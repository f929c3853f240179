//! .DAT loadfile handling
//!
//! Encoding detection, line decoding, row parsing, and record construction
//! for the delimited loadfile format.

pub mod encoding;
pub mod parser;
pub mod reader;
pub mod record;

// Re-export the public pipeline surface
pub use encoding::{decode_with_escapes, detect_encoding};
pub use parser::{parse_rows, FIELD_DELIMITER, TEXT_WRAPPER};
pub use reader::{read_lines, DecodedLines};
pub use record::{build_records, Record};
