//! Domain models for ANZSIC business statistics
//!
//! This module contains the record type read from the source files and the
//! closed set of fields used for filtering, sorting and display.

pub mod record;

// Re-export commonly used types
pub use record::{Record, RecordField};
