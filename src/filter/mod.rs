//! Filtering capabilities for loaded records
//!
//! Filtering returns the matching subsequence in original order and leaves
//! the input untouched.

use crate::models::{Record, RecordField};

/// Keeps records whose field equals a value exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEqualsFilter {
    field: RecordField,
    value: String,
}

impl FieldEqualsFilter {
    /// Create a new equality filter
    #[must_use]
    pub fn new(field: RecordField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Equality filter on the `year` field
    #[must_use]
    pub fn year(year: impl Into<String>) -> Self {
        Self::new(RecordField::Year, year)
    }

    /// Whether `record` passes the filter
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        record.get(self.field) == self.value
    }
}

/// Return the records for which `predicate` holds, preserving order
#[must_use]
pub fn filter_records<P>(records: &[Record], predicate: P) -> Vec<Record>
where
    P: Fn(&Record) -> bool,
{
    let filtered: Vec<Record> = records.iter().filter(|&r| predicate(r)).cloned().collect();
    log::debug!("Filter kept {} of {} records", filtered.len(), records.len());
    filtered
}

/// Return the records whose `year` equals `year` exactly
#[must_use]
pub fn filter_by_year(records: &[Record], year: &str) -> Vec<Record> {
    let filter = FieldEqualsFilter::year(year);
    filter_records(records, |r| filter.matches(r))
}
