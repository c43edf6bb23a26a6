//! Interactive query session
//!
//! A `Session` sequences load, display, filter-by-year and sort over any
//! line-based input and text output, so the same flow drives a terminal or a
//! test buffer.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::config::ReaderConfig;
use crate::error::Result;
use crate::filter::filter_by_year;
use crate::loader::{LoadOutcome, load_records};
use crate::sort::{SortKey, SortOutcome, sort_by_name};
use crate::utils::write_records;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input file was absent; nothing else happened
    NoData,
    /// All stages ran
    Completed,
}

/// Interactive driver over an input source and an output sink
#[derive(Debug)]
pub struct Session<R, W> {
    config: ReaderConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a new session
    pub fn new(config: ReaderConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Consume the session and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the full session once
    ///
    /// # Errors
    /// Returns an error if loading fails for a reason other than a missing
    /// file, if a strict value sort meets a non-numeric value, or if reading
    /// input or writing output fails
    pub fn run(&mut self) -> Result<SessionEnd> {
        let records = match load_records(&self.config)? {
            LoadOutcome::Found(loaded) => loaded.records,
            LoadOutcome::NotFound => {
                writeln!(
                    self.output,
                    "File '{}' not found or empty.",
                    self.config.path.display()
                )?;
                return Ok(SessionEnd::NoData);
            }
        };

        writeln!(self.output, "\nOriginal data:")?;
        write_records(&mut self.output, &records)?;

        if let Some(year) =
            self.prompt("Enter a year to filter the data (leave blank to skip):")?
        {
            let filtered = filter_by_year(&records, &year);
            writeln!(self.output, "\nData filtered for year '{year}':")?;
            write_records(&mut self.output, &filtered)?;
        }

        let key_list = SortKey::all().iter().join(", ");
        if let Some(key) = self.prompt(&format!("Enter the sort key ({key_list}):"))? {
            let outcome = sort_by_name(&records, &key, self.config.row_error_policy)?;
            if let SortOutcome::Unchanged { reason, .. } = &outcome {
                writeln!(self.output, "{reason}")?;
            }
            writeln!(self.output, "\nData sorted by '{key}':")?;
            write_records(&mut self.output, outcome.records())?;
        }

        self.output.flush()?;
        Ok(SessionEnd::Completed)
    }

    /// Show a prompt and read one trimmed answer; blank input or EOF is `None`
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        writeln!(self.output, "\n{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }
}

/// Run a session reading answers from `input` and writing to `output`
///
/// # Errors
/// See [`Session::run`]
pub fn run<R: BufRead, W: Write>(config: &ReaderConfig, input: R, output: W) -> Result<SessionEnd> {
    Session::new(config.clone(), input, output).run()
}
