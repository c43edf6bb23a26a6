//! Utility functions for error handling
//!
//! This module provides helpers that turn filesystem failures into the
//! crate's error type while keeping a missing file distinguishable.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AnzsicReaderError, Result};

/// Open a source file, treating a missing file as absence rather than failure
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for log context)
///
/// # Returns
/// * `Ok(Some(file))` - The opened file
/// * `Ok(None)` - The file does not exist
///
/// # Errors
/// Returns an error if the path exists but cannot be opened as a file
pub fn open_source_file(path: &Path, purpose: &str) -> Result<Option<fs::File>> {
    if path.is_dir() {
        return Err(AnzsicReaderError::PathIoError {
            path: path.to_path_buf(),
            source: io::Error::other(format!("Expected a file for: {purpose}")),
        });
    }

    match fs::File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist (needed for: {purpose})", path.display());
            Ok(None)
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::PermissionDenied {
                log::error!(
                    "Permission denied opening {} - check file permissions",
                    path.display()
                );
            }
            Err(AnzsicReaderError::PathIoError {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}
