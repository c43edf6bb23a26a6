//! Logging utilities
//!
//! Standardized log lines for loading a record file.

use std::path::Path;
use std::time::Duration;

use crate::loader::RowError;

/// Log that loading of `path` has begun
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a finished load with its record count and duration
pub fn log_operation_complete(operation: &str, path: &Path, records: usize, elapsed: Duration) {
    log::info!(
        "Successfully {operation} {records} records from {} in {elapsed:?}",
        path.display()
    );
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}

/// Log a summary of rows dropped while loading `path`
///
/// Only the first few rows are listed individually.
pub fn log_skipped_rows(path: &Path, row_errors: &[RowError]) {
    const MAX_LISTED: usize = 5;

    if row_errors.is_empty() {
        return;
    }
    log_warning(
        &format!("Skipped {} malformed row(s)", row_errors.len()),
        Some(path),
    );
    for row in row_errors.iter().take(MAX_LISTED) {
        log::warn!("  line {}: {}", row.line, row.message);
    }
    if row_errors.len() > MAX_LISTED {
        log::warn!("  ... and {} more", row_errors.len() - MAX_LISTED);
    }
}
