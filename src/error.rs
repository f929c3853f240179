//! Error module
//!
//! Defines custom error types using `thiserror` for the loadfile converter.
//! This module provides a unified error type that wraps all possible error
//! sources and implements the `From` trait for automatic conversion from
//! underlying error types.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the loadfile converter.
///
/// This enum represents all possible errors that can occur while converting
/// a .DAT loadfile, including file I/O errors, output serialization errors,
/// and structural violations of the loadfile format itself.
///
/// # Error Categories
///
/// - **I/O and serialization errors**: reading the source file and writing
///   the CSV/JSON destination file
/// - **Format errors**: a source table whose rows do not form a uniform,
///   multi-column grid
/// - **Usage errors**: invalid CLI arguments or a source path that is not
///   a regular file
///
/// # Example
///
/// ```rust,ignore
/// use loadfile::error::LoadfileError;
///
/// fn example() -> Result<(), LoadfileError> {
///     // Errors from underlying types are automatically converted
///     let raw = std::fs::read("nonexistent.dat")?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum LoadfileError {
    /// General I/O error.
    ///
    /// This error occurs for file system operations like opening, reading,
    /// or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error.
    ///
    /// This error occurs when writing the converted records to the CSV
    /// destination file fails.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    ///
    /// This error occurs when serializing the converted records to the
    /// JSON destination file fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument error.
    ///
    /// This error occurs when CLI arguments are invalid, such as an
    /// encoding label that no known encoding matches.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source table is structurally unusable.
    ///
    /// Raised when the loadfile has no usable header row, or when the
    /// header row contains a single column (meaning the input was not
    /// actually field-delimited).
    #[error("Malformed loadfile: {0}")]
    MalformedTable(String),

    /// A data row's column count differs from the header's.
    ///
    /// The loadfile format is a fixed-width table; a ragged row means the
    /// data is corrupt and conversion must not continue.
    #[error("Row {row} has {actual} columns, expected {expected}")]
    ColumnCountMismatch {
        /// One-based index of the offending row among surviving rows.
        row: usize,
        /// Column count established by the header row.
        expected: usize,
        /// Column count actually found.
        actual: usize,
    },

    /// The record list is empty, so a CSV header cannot be inferred.
    #[error("No records to write")]
    NoRecords,

    /// The source path does not refer to an existing regular file.
    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),
}
