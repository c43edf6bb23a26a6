//! Utility functions shared by the loader, query and session modules

pub mod logging;

pub use logging::{format_record, write_records};
