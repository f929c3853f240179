//! Output emitters
//!
//! Serializes converted records to the supported destination formats.

pub mod csv;
pub mod json;

pub use self::csv::write_csv;
pub use self::json::write_json;
