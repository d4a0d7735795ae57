//!
//! The reason a log file yields no record.
//!

///
/// The reason a log file yields no record.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The log lacks the verification marker.
    Unverified,
    /// The log is verified but carries no usable elapsed time.
    MissingElapsedTime,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unverified => write!(f, "Verification failed"),
            Self::MissingElapsedTime => write!(f, "Elapsed time is missing"),
        }
    }
}
