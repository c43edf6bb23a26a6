//! CSV record loading utilities

use std::io::Read;
use std::time::Instant;

use csv::StringRecord;
use itertools::Itertools;

use crate::config::{ReaderConfig, RowErrorPolicy};
use crate::error::util::open_source_file;
use crate::error::{AnzsicReaderError, Result};
use crate::models::{Record, RecordField};
use crate::utils::logging::{
    log_operation_complete, log_operation_start, log_skipped_rows, log_warning,
};

/// A data row that was dropped while loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number in the source file
    pub line: u64,
    pub message: String,
}

/// Records read from a source, plus any rows that were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    /// Records in file order
    pub records: Vec<Record>,
    pub row_errors: Vec<RowError>,
}

/// Result of trying to load a file that may not exist
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The file existed and was read
    Found(LoadedRecords),
    /// No file at the configured path
    NotFound,
}

impl LoadOutcome {
    /// The loaded records, or `None` if the file was absent
    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Self::Found(loaded) => Some(&loaded.records),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Load the records of the file named by `config.path`
///
/// The file handle is closed before this function returns, on every path.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, if the header row
/// lacks a required column, or if a row is malformed under
/// [`RowErrorPolicy::Fail`]
pub fn load_records(config: &ReaderConfig) -> Result<LoadOutcome> {
    let path = config.path.as_path();
    log_operation_start("Loading records from", path);
    let start = Instant::now();

    let Some(file) = open_source_file(path, "loading records")? else {
        log_warning("Input file not found", Some(path));
        return Ok(LoadOutcome::NotFound);
    };

    let loaded = read_records(file, config)?;
    log_operation_complete("loaded", path, loaded.records.len(), start.elapsed());
    log_skipped_rows(path, &loaded.row_errors);

    Ok(LoadOutcome::Found(loaded))
}

/// Read records from any CSV source
///
/// The first row must be a header naming every column in
/// [`RecordField::ALL`]; extra columns are ignored and column order is free.
///
/// # Errors
/// Returns an error if reading fails, a required column is missing, or a row
/// is malformed under [`RowErrorPolicy::Fail`]
pub fn read_records<R: Read>(reader: R, config: &ReaderConfig) -> Result<LoadedRecords> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .trim(if config.trim_fields {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    ensure_required_columns(&headers)?;

    let mut loaded = LoadedRecords::default();
    for result in csv_reader.deserialize::<Record>() {
        match result {
            Ok(record) => loaded.records.push(record),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                let message = e.to_string();
                match config.row_error_policy {
                    RowErrorPolicy::Fail => {
                        return Err(AnzsicReaderError::MalformedRow { line, message });
                    }
                    RowErrorPolicy::Skip => {
                        log::debug!("Skipping malformed row at line {line}: {message}");
                        loaded.row_errors.push(RowError { line, message });
                    }
                }
            }
        }
    }

    log::debug!(
        "Read {} records, skipped {} rows",
        loaded.records.len(),
        loaded.row_errors.len()
    );
    Ok(loaded)
}

/// Check that every required column is present in the header row
fn ensure_required_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = RecordField::ALL
        .iter()
        .map(|field| field.header_name())
        .filter(|name| !headers.iter().any(|h| h == *name))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        log::error!(
            "Header row [{}] lacks required column(s) {}",
            headers.iter().join(", "),
            missing.iter().join(", ")
        );
        Err(AnzsicReaderError::MissingColumns(missing))
    }
}
