//!
//! The chart renderer error.
//!

use std::path::PathBuf;

///
/// The chart renderer error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The summary table cannot be opened.
    #[error("Opening table {path:?}: {error}")]
    FileNotFound {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the table.
        path: PathBuf,
    },
    /// The summary table is malformed.
    #[error("Parsing table {path:?}: {error}")]
    Parsing {
        /// The underlying CSV error.
        error: csv::Error,
        /// The path to the table.
        path: PathBuf,
    },
    /// The table has no single-thread baseline row.
    #[error("Table `{case}` has no baseline row with Xstreams=1 and Threads=1")]
    BaselineNotFound {
        /// The case name.
        case: String,
    },
    /// The table has more than one single-thread baseline row.
    #[error("Table `{case}` has {count} baseline rows with Xstreams=1 and Threads=1")]
    AmbiguousBaseline {
        /// The case name.
        case: String,
        /// The number of baseline rows.
        count: usize,
    },
    /// A timing cannot be used as a divisor.
    #[error("Table `{case}` has invalid time {time_nanos} ns at Xstreams={xstreams}, Threads={threads}")]
    InvalidTiming {
        /// The case name.
        case: String,
        /// The number of execution streams.
        xstreams: u32,
        /// The number of user-level threads.
        threads: u32,
        /// The offending time in nanoseconds.
        time_nanos: f64,
    },
    /// Paired tables do not have the same Threads values for an Xstreams value.
    #[error("Tables `{reference}` and `{candidate}` are misaligned at Xstreams={xstreams}: {details}")]
    RowAlignmentMismatch {
        /// The reference case name.
        reference: String,
        /// The candidate case name.
        candidate: String,
        /// The number of execution streams.
        xstreams: u32,
        /// The mismatch description.
        details: String,
    },
    /// The output directory cannot be created.
    #[error("Creating directory {path:?}: {error}")]
    CreatingDirectory {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the directory.
        path: PathBuf,
    },
    /// The chart cannot be drawn or saved.
    #[error("Drawing chart {path:?}: {message}")]
    Drawing {
        /// The backend error description.
        message: String,
        /// The path to the chart image.
        path: PathBuf,
    },
}
