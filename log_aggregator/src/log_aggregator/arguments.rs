//!
//! The log aggregator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The log aggregator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses warnings about skipped log files.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory with raw benchmark logs.
    #[arg(default_value = log_aggregator::DEFAULT_INPUT_DIRECTORY)]
    pub input_directory: PathBuf,

    /// Extension of the log files to aggregate.
    #[arg(long, default_value = log_aggregator::DEFAULT_LOG_EXTENSION)]
    pub extension: String,

    /// Report output format: `text`, `json`, or `csv`.
    #[arg(long = "output-format", default_value_t = log_aggregator::OutputFormat::Text)]
    pub output_format: log_aggregator::OutputFormat,

    /// Report output file. The report is printed to the terminal if omitted.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Validates the command line arguments.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.extension.is_empty() || self.extension.contains(['/', '*', '?']) {
            anyhow::bail!(
                "Invalid log file extension `{}`. Use `--extension` with a plain extension like `txt`.",
                self.extension
            );
        }
        Ok(())
    }
}
