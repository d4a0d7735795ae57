//!
//! The benchmark record extracted from a single log.
//!

pub mod key;
pub mod rejection;

use regex::Regex;

use self::key::Key;
use self::rejection::Rejection;

lazy_static::lazy_static! {
    /// The number of execution streams.
    static ref XSTREAMS: Regex =
        Regex::new(r"Number of available xstreams:\s+(\d+)").expect("Always valid");
    /// The number of user-level threads.
    static ref THREADS: Regex =
        Regex::new(r"Number of available threads:\s+(\d+)").expect("Always valid");
    /// The runtime initialization time.
    static ref INITIALIZATION_TIME: Regex =
        Regex::new(r"Initialization time =\s+([\d.]+) seconds").expect("Always valid");
    /// The benchmark class.
    static ref CLASS: Regex = Regex::new(r"Class\s+=\s+(\w+)").expect("Always valid");
    /// The elapsed benchmark time.
    static ref ELAPSED: Regex = Regex::new(r"Time in seconds =\s+([\d.]+)").expect("Always valid");
}

///
/// The benchmark record extracted from a single log.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The benchmark class.
    pub class: Option<String>,
    /// The number of execution streams.
    pub xstreams: Option<u32>,
    /// The number of user-level threads.
    pub threads: Option<u32>,
    /// The runtime initialization time in seconds.
    pub initialization_time: Option<f64>,
    /// The elapsed benchmark time in seconds.
    pub elapsed: f64,
}

impl Record {
    /// The marker printed by verified benchmark runs.
    pub const VERIFICATION_MARKER: &'static str = "VERIFICATION SUCCESSFUL";

    ///
    /// Extracts a record from the log content.
    ///
    /// Every field is matched independently. Only the verification marker and the elapsed time
    /// are required.
    ///
    pub fn extract(content: &str) -> Result<Self, Rejection> {
        if !content.contains(Self::VERIFICATION_MARKER) {
            return Err(Rejection::Unverified);
        }

        let elapsed = Self::capture(&ELAPSED, content).ok_or(Rejection::MissingElapsedTime)?;
        Ok(Self {
            class: CLASS
                .captures(content)
                .map(|captures| captures[1].to_owned()),
            xstreams: Self::capture(&XSTREAMS, content),
            threads: Self::capture(&THREADS, content),
            initialization_time: Self::capture(&INITIALIZATION_TIME, content),
            elapsed,
        })
    }

    ///
    /// Returns the grouping key.
    ///
    pub fn key(&self) -> Key {
        Key {
            class: self.class.clone(),
            xstreams: self.xstreams,
            threads: self.threads,
        }
    }

    ///
    /// Parses the first capture group of the first match, if any.
    ///
    fn capture<T>(regex: &Regex, content: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        regex
            .captures(content)
            .and_then(|captures| captures[1].parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use super::Rejection;

    const LOG: &str = r#"
 NAS Parallel Benchmarks (NPB3.4-ARGOBOTS) - EP Benchmark

 Number of random numbers generated:      536870912
 Number of available xstreams:    4
 Number of available threads:    16
 Initialization time =    0.012 seconds

 EP Benchmark Completed.
 Class           =                        A
 Size            =                536870912
 Iterations      =                        0
 Time in seconds =                     1.75
 Verification    =               SUCCESSFUL
 VERIFICATION SUCCESSFUL
"#;

    #[test]
    fn ok() {
        let record = Record::extract(LOG).expect("Failed to extract a record");

        assert_eq!(
            record,
            Record {
                class: Some("A".to_owned()),
                xstreams: Some(4),
                threads: Some(16),
                initialization_time: Some(0.012),
                elapsed: 1.75,
            }
        );
    }

    #[test]
    fn unverified() {
        let log = LOG.replace("VERIFICATION SUCCESSFUL", "VERIFICATION FAILED");

        assert_eq!(Record::extract(log.as_str()), Err(Rejection::Unverified));
    }

    #[test]
    fn unverified_without_any_fields() {
        assert_eq!(Record::extract(""), Err(Rejection::Unverified));
    }

    #[test]
    fn missing_elapsed_time() {
        let log = LOG.replace("Time in seconds", "Time in minutes");

        assert_eq!(
            Record::extract(log.as_str()),
            Err(Rejection::MissingElapsedTime)
        );
    }

    #[test]
    fn missing_optional_fields() {
        let log = "Time in seconds = 3.5\nVERIFICATION SUCCESSFUL\n";

        let record = Record::extract(log).expect("Failed to extract a record");

        assert_eq!(record.class, None);
        assert_eq!(record.xstreams, None);
        assert_eq!(record.threads, None);
        assert_eq!(record.initialization_time, None);
        assert_eq!(record.elapsed, 3.5);
    }

    #[test]
    fn malformed_number_is_absent() {
        let log = "Number of available xstreams: 99999999999\nTime in seconds = 1.2.3\nVERIFICATION SUCCESSFUL";

        assert_eq!(Record::extract(log), Err(Rejection::MissingElapsedTime));
    }
}
