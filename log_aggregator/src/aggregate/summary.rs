//!
//! The summary of a group of benchmark records.
//!

///
/// The summary of a group of benchmark records.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// The arithmetic mean of the elapsed times in seconds.
    pub mean: f64,
    /// The number of records in the group.
    pub samples: usize,
}

impl Summary {
    ///
    /// Summarizes a non-empty list of elapsed times.
    ///
    pub fn new(times: &[f64]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }
        let mean = times.iter().sum::<f64>() / (times.len() as f64);
        Some(Self {
            mean,
            samples: times.len(),
        })
    }

    ///
    /// Returns the mean rounded to two decimal places.
    ///
    /// The rounding goes through the exact decimal expansion, so ties are rounded to even.
    ///
    pub fn rounded_mean(&self) -> f64 {
        format!("{:.2}", self.mean)
            .parse::<f64>()
            .unwrap_or(self.mean)
    }
}
