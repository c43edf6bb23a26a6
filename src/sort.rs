//! Ordering records by a chosen field
//!
//! Sort keys form a closed set. Each key maps to a comparison function; all
//! sorts are stable, so records that compare equal keep their relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::config::RowErrorPolicy;
use crate::error::{AnzsicReaderError, Result};
use crate::models::{Record, RecordField};

/// A field that records can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Year,
    IndustryCode,
    IndustryName,
    SizeGroup,
    Variable,
    /// Numeric ordering of the `value` field
    Value,
    Unit,
}

/// Signature shared by every per-key comparison function
pub type RecordComparator = fn(&Record, &Record) -> Ordering;

impl SortKey {
    /// All keys, in column order
    #[must_use]
    pub fn all() -> [Self; 7] {
        [
            Self::Year,
            Self::IndustryCode,
            Self::IndustryName,
            Self::SizeGroup,
            Self::Variable,
            Self::Value,
            Self::Unit,
        ]
    }

    /// The record field this key orders by
    #[must_use]
    pub fn field(self) -> RecordField {
        match self {
            Self::Year => RecordField::Year,
            Self::IndustryCode => RecordField::IndustryCode,
            Self::IndustryName => RecordField::IndustryName,
            Self::SizeGroup => RecordField::SizeGroup,
            Self::Variable => RecordField::Variable,
            Self::Value => RecordField::Value,
            Self::Unit => RecordField::Unit,
        }
    }

    /// Comparison function for this key
    ///
    /// Text keys compare ordinally (byte-wise). `Value` compares numerically;
    /// text that does not parse orders after every number.
    #[must_use]
    pub fn comparator(self) -> RecordComparator {
        match self {
            Self::Year => compare_years,
            Self::IndustryCode => compare_industry_codes,
            Self::IndustryName => compare_industry_names,
            Self::SizeGroup => compare_size_groups,
            Self::Variable => compare_variables,
            Self::Value => compare_numeric_values,
            Self::Unit => compare_units,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().header_name())
    }
}

impl FromStr for SortKey {
    type Err = AnzsicReaderError;

    /// Match a key name case-insensitively, ignoring `_`, `-` and spaces
    ///
    /// Both `industry_code_ANZSIC` and `IndustryCodeANZSIC` select the same key.
    /// `rmesizegroup` is accepted alongside `rmesizegrp`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "year" => Ok(Self::Year),
            "industrycodeanzsic" => Ok(Self::IndustryCode),
            "industrynameanzsic" => Ok(Self::IndustryName),
            "rmesizegrp" | "rmesizegroup" => Ok(Self::SizeGroup),
            "variable" => Ok(Self::Variable),
            "value" => Ok(Self::Value),
            "unit" => Ok(Self::Unit),
            _ => Err(AnzsicReaderError::UnknownSortKey(s.to_string())),
        }
    }
}

fn compare_years(a: &Record, b: &Record) -> Ordering {
    a.year().cmp(b.year())
}

fn compare_industry_codes(a: &Record, b: &Record) -> Ordering {
    a.industry_code().cmp(b.industry_code())
}

fn compare_industry_names(a: &Record, b: &Record) -> Ordering {
    a.industry_name().cmp(b.industry_name())
}

fn compare_size_groups(a: &Record, b: &Record) -> Ordering {
    a.size_group().cmp(b.size_group())
}

fn compare_variables(a: &Record, b: &Record) -> Ordering {
    a.variable().cmp(b.variable())
}

fn compare_units(a: &Record, b: &Record) -> Ordering {
    a.unit().cmp(b.unit())
}

fn compare_numeric_values(a: &Record, b: &Record) -> Ordering {
    match (a.numeric_value(), b.numeric_value()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Outcome of sorting by a user-supplied key name
#[derive(Debug, Clone, PartialEq)]
pub enum SortOutcome {
    /// Records ordered by a recognized key
    Sorted(Vec<Record>),
    /// The key was not recognized; records are returned in their input order
    Unchanged {
        records: Vec<Record>,
        /// Diagnostic describing why no sort happened
        reason: String,
    },
}

impl SortOutcome {
    /// The resulting records, sorted or not
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Sorted(records) | Self::Unchanged { records, .. } => records,
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Sorted(records) | Self::Unchanged { records, .. } => records,
        }
    }
}

/// Return a new sequence ordered ascending by `key`
///
/// The input is left untouched. Under [`RowErrorPolicy::Fail`], sorting by
/// `Value` first checks that every value is numeric; under
/// [`RowErrorPolicy::Skip`] non-numeric values are placed last.
///
/// # Errors
/// Returns [`AnzsicReaderError::InvalidValue`] for the first non-numeric value
/// when sorting by `Value` under [`RowErrorPolicy::Fail`]
pub fn sort_records(
    records: &[Record],
    key: SortKey,
    policy: RowErrorPolicy,
) -> Result<Vec<Record>> {
    if key == SortKey::Value {
        let invalid: Vec<(usize, &Record)> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.numeric_value().is_none())
            .collect();

        if let Some(&(position, record)) = invalid.first() {
            match policy {
                RowErrorPolicy::Fail => {
                    return Err(AnzsicReaderError::InvalidValue {
                        position,
                        value: record.value().to_string(),
                    });
                }
                RowErrorPolicy::Skip => log::warn!(
                    "{} record(s) have non-numeric values and are ordered last: {}",
                    invalid.len(),
                    invalid.iter().map(|(_, r)| format!("'{}'", r.value())).unique().join(", ")
                ),
            }
        }
    }

    let mut sorted = records.to_vec();
    sorted.sort_by(key.comparator());
    log::debug!("Sorted {} records by {key}", sorted.len());
    Ok(sorted)
}

/// Sort by a key given as text, as typed by a user
///
/// An unrecognized name does not fail: the input order is kept and the
/// outcome carries a diagnostic.
///
/// # Errors
/// Propagates errors from [`sort_records`]
pub fn sort_by_name(records: &[Record], name: &str, policy: RowErrorPolicy) -> Result<SortOutcome> {
    match name.parse::<SortKey>() {
        Ok(key) => sort_records(records, key, policy).map(SortOutcome::Sorted),
        Err(e) => {
            log::warn!("{e}");
            Ok(SortOutcome::Unchanged {
                records: records.to_vec(),
                reason: format!("Invalid sort key '{}'. Returning unsorted data.", name.trim()),
            })
        }
    }
}
