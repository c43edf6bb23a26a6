//! Logging and console output utilities
//!
//! This module provides utilities for logging and for rendering records as text.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use console::{format_record, write_records};
pub use log::{log_operation_complete, log_operation_start, log_skipped_rows, log_warning};
