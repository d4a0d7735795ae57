//!
//! The log aggregator error.
//!

use std::path::PathBuf;

///
/// The log aggregator error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input directory does not exist or cannot be listed.
    #[error("Input directory {path:?} is not found or not readable")]
    DirectoryNotFound {
        /// The path to the input directory.
        path: PathBuf,
    },
    /// The input directory path cannot be turned into a search pattern.
    #[error("Input directory {path:?} pattern: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The path to the input directory.
        path: PathBuf,
    },
    /// Error reading a log file.
    #[error("Reading log file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the log file.
        path: PathBuf,
    },
}
