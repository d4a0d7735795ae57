//!
//! A single benchmark configuration row.
//!

///
/// A single benchmark configuration row.
///
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Row {
    /// The number of execution streams.
    #[serde(rename = "Xstreams")]
    pub xstreams: u32,
    /// The number of user-level threads.
    #[serde(rename = "Threads")]
    pub threads: u32,
    /// The mean time in seconds.
    #[serde(rename = "Time(s)")]
    pub time_seconds: f64,
    /// The mean time in nanoseconds.
    #[serde(rename = "Time(nanos)")]
    pub time_nanos: f64,
}

impl Row {
    /// The nanoseconds in one second.
    pub const NANOS_PER_SECOND: f64 = 1e9;

    ///
    /// Whether this is the single-thread baseline configuration.
    ///
    pub fn is_baseline(&self) -> bool {
        self.xstreams == 1 && self.threads == 1
    }

    ///
    /// Returns the nanosecond time converted to seconds.
    ///
    pub fn time_nanos_as_seconds(&self) -> f64 {
        self.time_nanos / Self::NANOS_PER_SECOND
    }

    ///
    /// Whether the nanosecond time can be used as a divisor.
    ///
    pub fn has_valid_timing(&self) -> bool {
        self.time_nanos.is_finite() && self.time_nanos > 0.0
    }
}
