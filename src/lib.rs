//! A Rust library for reading ANZSIC business statistics CSV files,
//! filtering them by year and sorting them by any field.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod session;
pub mod sort;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ReaderConfig, RowErrorPolicy};
pub use error::{AnzsicReaderError, Result};
pub use models::{Record, RecordField};

// Loading
pub use loader::{LoadOutcome, LoadedRecords, RowError, load_records, read_records};

// Querying
pub use filter::{FieldEqualsFilter, filter_by_year, filter_records};
pub use sort::{SortKey, SortOutcome, sort_by_name, sort_records};

// Presentation
pub use session::{Session, SessionEnd};
pub use utils::{format_record, write_records};
