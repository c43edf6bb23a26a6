use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::{debug, info};

use anzsic_reader::config::DEFAULT_DATA_PATH;
use anzsic_reader::{ReaderConfig, RowErrorPolicy, SessionEnd};

/// Browse ANZSIC business statistics: show, filter by year and sort a CSV extract
#[derive(Parser, Debug)]
#[command(name = "anzsic-reader")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the CSV file
    #[arg(default_value = DEFAULT_DATA_PATH)]
    path: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(long, short, default_value_t = ',')]
    delimiter: char,

    /// Trim whitespace around headers and fields
    #[arg(long)]
    trim: bool,

    /// Abort on malformed rows and non-numeric values instead of skipping them
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ReaderConfig> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }

        Ok(ReaderConfig {
            path: self.path,
            delimiter: self.delimiter as u8,
            trim_fields: self.trim,
            row_error_policy: if self.strict {
                RowErrorPolicy::Fail
            } else {
                RowErrorPolicy::Skip
            },
        })
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Cli::parse().into_config()?;
    debug!("Using configuration: {config:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = anzsic_reader::session::run(&config, stdin.lock(), stdout.lock())
        .with_context(|| format!("Failed to process {}", config.path.display()))?;

    if end == SessionEnd::NoData {
        info!("No data loaded from {}", config.path.display());
    }

    Ok(())
}
