//! Statistical record model
//!
//! A `Record` is one row of an ANZSIC business statistics extract. Every field
//! is kept as the raw text read from the source; numeric interpretation only
//! happens when a query asks for it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One labelled statistical observation
///
/// Fields are private so a loaded record cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "year")]
    year: String,
    #[serde(rename = "industry_code_ANZSIC")]
    industry_code: String,
    #[serde(rename = "industry_name_ANZSIC")]
    industry_name: String,
    #[serde(rename = "rme_size_grp")]
    size_group: String,
    #[serde(rename = "variable")]
    variable: String,
    #[serde(rename = "value")]
    value: String,
    #[serde(rename = "unit")]
    unit: String,
}

impl Record {
    /// Create a new record from its seven text fields
    #[must_use]
    pub fn new(
        year: impl Into<String>,
        industry_code: impl Into<String>,
        industry_name: impl Into<String>,
        size_group: impl Into<String>,
        variable: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            industry_code: industry_code.into(),
            industry_name: industry_name.into(),
            size_group: size_group.into(),
            variable: variable.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn industry_code(&self) -> &str {
        &self.industry_code
    }

    #[must_use]
    pub fn industry_name(&self) -> &str {
        &self.industry_name
    }

    #[must_use]
    pub fn size_group(&self) -> &str {
        &self.size_group
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Get the raw text of a field
    #[must_use]
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Year => &self.year,
            RecordField::IndustryCode => &self.industry_code,
            RecordField::IndustryName => &self.industry_name,
            RecordField::SizeGroup => &self.size_group,
            RecordField::Variable => &self.variable,
            RecordField::Value => &self.value,
            RecordField::Unit => &self.unit,
        }
    }

    /// Parse the `value` field as a number
    ///
    /// Surrounding whitespace is ignored. Returns `None` when the text is not a
    /// valid floating point literal.
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok()
    }
}

/// The closed set of fields carried by a [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordField {
    Year,
    IndustryCode,
    IndustryName,
    SizeGroup,
    Variable,
    Value,
    Unit,
}

impl RecordField {
    /// All fields in display order
    pub const ALL: [Self; 7] = [
        Self::Year,
        Self::IndustryCode,
        Self::IndustryName,
        Self::SizeGroup,
        Self::Variable,
        Self::Value,
        Self::Unit,
    ];

    /// Column name used in the CSV header row (case-sensitive)
    #[must_use]
    pub fn header_name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::IndustryCode => "industry_code_ANZSIC",
            Self::IndustryName => "industry_name_ANZSIC",
            Self::SizeGroup => "rme_size_grp",
            Self::Variable => "variable",
            Self::Value => "value",
            Self::Unit => "unit",
        }
    }

    /// Minimum column width used when rendering the field
    #[must_use]
    pub fn display_width(self) -> usize {
        match self {
            Self::Year | Self::Value | Self::Unit => 10,
            Self::IndustryCode | Self::SizeGroup => 15,
            Self::IndustryName => 30,
            Self::Variable => 20,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
