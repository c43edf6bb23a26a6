//! Console output utilities
//!
//! This module renders records as fixed-width columnar text.

use std::io::{self, Write};

use crate::models::{Record, RecordField};

/// Separator placed between rendered columns
pub const COLUMN_SEPARATOR: &str = " | ";

/// Render a single record as one line of left-aligned, padded columns
///
/// Widths are minimums; longer text is written in full.
#[must_use]
pub fn format_record(record: &Record) -> String {
    RecordField::ALL
        .iter()
        .map(|&field| format!("{:<width$}", record.get(field), width = field.display_width()))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR)
}

/// Write one line per record to `out`
///
/// Nothing is written for an empty slice.
///
/// # Errors
/// Returns an error if writing to `out` fails
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", format_record(record))?;
    }
    Ok(())
}
