//! Configuration for loading and querying record files.

use std::path::PathBuf;

/// Default location of the input file when none is given
pub const DEFAULT_DATA_PATH: &str = "data/anzsic.csv";

/// What to do with a row or value that cannot be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowErrorPolicy {
    /// Log a warning, report the problem and carry on
    #[default]
    Skip,
    /// Abort the operation with an error
    Fail,
}

/// Configuration for the record reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Path of the CSV file to read
    pub path: PathBuf,
    /// Field delimiter
    pub delimiter: u8,
    /// Trim leading and trailing whitespace from headers and fields
    pub trim_fields: bool,
    /// Policy for malformed rows while loading and non-numeric values while sorting
    pub row_error_policy: RowErrorPolicy,
}

impl ReaderConfig {
    /// Create a configuration reading from `path` with default settings
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Whether problems should abort instead of being skipped
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.row_error_policy == RowErrorPolicy::Fail
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            delimiter: b',',
            trim_fields: false,
            row_error_policy: RowErrorPolicy::Skip,
        }
    }
}
