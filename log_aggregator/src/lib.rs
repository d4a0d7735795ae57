//!
//! The benchmark log aggregator library.
//!

pub mod aggregate;
pub mod error;
pub mod input;
pub mod output;
pub mod record;

pub use crate::aggregate::skipped::Skipped;
pub use crate::aggregate::summary::Summary;
pub use crate::aggregate::Aggregate;
pub use crate::error::Error;
pub use crate::input::LogFile;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Report;
pub use crate::record::key::Key;
pub use crate::record::rejection::Rejection;
pub use crate::record::Record;

/// The default directory with raw benchmark logs.
pub const DEFAULT_INPUT_DIRECTORY: &str = "./raw_results_argobots";

/// The default log file extension.
pub const DEFAULT_LOG_EXTENSION: &str = "txt";
