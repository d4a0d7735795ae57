//!
//! A single serialized group summary.
//!

use crate::aggregate::summary::Summary;
use crate::record::key::Key;

///
/// A single serialized group summary.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Entry<'a> {
    /// The benchmark class.
    #[serde(rename = "Class")]
    pub class: Option<&'a str>,
    /// The number of execution streams.
    #[serde(rename = "Xstreams")]
    pub xstreams: Option<u32>,
    /// The number of user-level threads.
    #[serde(rename = "Threads")]
    pub threads: Option<u32>,
    /// The mean elapsed time in seconds, rounded to two decimal places.
    #[serde(rename = "Time(s)")]
    pub time_seconds: f64,
    /// The mean elapsed time in nanoseconds.
    #[serde(rename = "Time(nanos)")]
    pub time_nanos: u64,
    /// The number of aggregated records.
    #[serde(rename = "Samples")]
    pub samples: usize,
}

impl<'a> From<(&'a Key, Summary)> for Entry<'a> {
    fn from((key, summary): (&'a Key, Summary)) -> Self {
        Self {
            class: key.class.as_deref(),
            xstreams: key.xstreams,
            threads: key.threads,
            time_seconds: summary.rounded_mean(),
            time_nanos: (summary.mean * 1e9).round() as u64,
            samples: summary.samples,
        }
    }
}
