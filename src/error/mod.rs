//! Error handling for the `anzsic_reader` crate.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for loading and querying records
#[derive(Debug, thiserror::Error)]
pub enum AnzsicReaderError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error opening a specific file, with the path attached
    #[error("IO error for {}: {source}", .path.display())]
    PathIoError {
        /// Path that could not be accessed
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: io::Error,
    },

    /// Error reported by the CSV reader that is not tied to a single row
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// The header row lacks one or more required columns
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A data row could not be mapped onto a record
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        /// 1-based line number in the source file
        line: u64,
        /// Reader diagnostic
        message: String,
    },

    /// A `value` field could not be parsed as a number while sorting by value
    #[error("Invalid numeric value '{value}' in record {position}")]
    InvalidValue {
        /// 0-based position of the record in the sequence being sorted
        position: usize,
        /// The raw text that failed to parse
        value: String,
    },

    /// A sort key name that does not match any record field
    #[error("Unknown sort key: '{0}'")]
    UnknownSortKey(String),
}

/// Result type for `anzsic_reader` operations
pub type Result<T> = std::result::Result<T, AnzsicReaderError>;
