//!
//! The chart renderer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The chart renderer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory with the `<case>.csv` summary tables.
    #[arg(long, default_value = ".")]
    pub input_directory: PathBuf,

    /// Directory the chart directories are created in.
    #[arg(long, default_value = ".")]
    pub output_directory: PathBuf,
}
