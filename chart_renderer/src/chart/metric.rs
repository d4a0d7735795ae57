//!
//! The charted benchmark metric.
//!

///
/// The charted benchmark metric.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// The mean time from the seconds column.
    MeanTime,
    /// The mean time from the nanoseconds column, converted to seconds.
    MeanTimeNanos,
    /// The speedup against the single-thread baseline.
    Speedup,
}

impl Metric {
    /// All metrics in rendering order.
    pub const ALL: [Self; 3] = [Self::MeanTime, Self::MeanTimeNanos, Self::Speedup];

    ///
    /// Returns the chart file name for an Xstreams partition.
    ///
    pub fn file_name(&self, xstreams: u32) -> String {
        match self {
            Self::MeanTime => format!("mean_execution_time_xstreams_{xstreams}.png"),
            Self::MeanTimeNanos => format!("mean_execution_time_xstreams_{xstreams}_nanos.png"),
            Self::Speedup => format!("speedup_xstreams_{xstreams}.png"),
        }
    }

    ///
    /// Returns the chart title for an Xstreams partition of a case.
    ///
    pub fn title(&self, xstreams: u32, case_name: &str) -> String {
        match self {
            Self::MeanTime | Self::MeanTimeNanos => {
                format!("Mean Execution Time vs Threads (Xstreams={xstreams}) ({case_name})")
            }
            Self::Speedup => format!("Speedup vs Threads (Xstreams={xstreams}) ({case_name})"),
        }
    }

    ///
    /// Returns the y axis label.
    ///
    pub fn y_label(&self) -> &'static str {
        match self {
            Self::MeanTime | Self::MeanTimeNanos => "Mean Time (s)",
            Self::Speedup => "Speedup",
        }
    }
}
