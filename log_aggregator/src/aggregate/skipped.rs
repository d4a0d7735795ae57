//!
//! A log file left out of the aggregation.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::record::rejection::Rejection;

///
/// A log file left out of the aggregation.
///
#[derive(Debug)]
pub enum Skipped {
    /// The log content yields no record.
    Rejected {
        /// The path to the log file.
        path: PathBuf,
        /// The reason the record was rejected.
        rejection: Rejection,
    },
    /// The log file cannot be read.
    Unreadable(Error),
}

impl std::fmt::Display for Skipped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected { path, rejection } => write!(
                f,
                "{rejection} on {}",
                path.file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy())
            ),
            Self::Unreadable(error) => write!(f, "{error}"),
        }
    }
}
