//!
//! The aggregation of benchmark records.
//!

pub mod skipped;
pub mod summary;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Error;
use crate::input::LogFile;
use crate::record::key::Key;
use crate::record::Record;

use self::skipped::Skipped;
use self::summary::Summary;

///
/// The aggregation of benchmark records.
///
/// Elapsed times are kept in insertion order per key.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregate {
    /// The elapsed times grouped by key.
    pub groups: BTreeMap<Key, Vec<f64>>,
}

impl Aggregate {
    ///
    /// Aggregates every log file with the given extension in a directory.
    ///
    /// Files that cannot be read or yield no record are returned alongside the aggregate.
    /// Only an unusable directory is an error.
    ///
    pub fn from_directory(
        directory: &Path,
        extension: &str,
    ) -> Result<(Self, Vec<Skipped>), Error> {
        let mut aggregate = Self::default();
        let mut skipped = Vec::new();
        for path in crate::input::scan(directory, extension)?.into_iter() {
            let file = match LogFile::try_from(path.as_path()) {
                Ok(file) => file,
                Err(error) => {
                    skipped.push(Skipped::Unreadable(error));
                    continue;
                }
            };
            match Record::extract(file.content.as_str()) {
                Ok(record) => aggregate.push(record),
                Err(rejection) => skipped.push(Skipped::Rejected {
                    path: file.path,
                    rejection,
                }),
            }
        }
        Ok((aggregate, skipped))
    }

    ///
    /// Adds a record to its group.
    ///
    pub fn push(&mut self, record: Record) {
        let elapsed = record.elapsed;
        self.groups.entry(record.key()).or_default().push(elapsed);
    }

    ///
    /// Returns the group summaries in ascending key order.
    ///
    pub fn summaries(&self) -> impl Iterator<Item = (&Key, Summary)> + '_ {
        self.groups
            .iter()
            .filter_map(|(key, times)| Summary::new(times.as_slice()).map(|summary| (key, summary)))
    }

    ///
    /// Whether no records have been aggregated.
    ///
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<Record> for Aggregate {
    fn from_iter<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut aggregate = Self::default();
        for record in records {
            aggregate.push(record);
        }
        aggregate
    }
}

impl Extend<Record> for Aggregate {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::key::Key;
    use crate::record::Record;

    use super::Aggregate;

    fn record(class: &str, xstreams: u32, threads: u32, elapsed: f64) -> Record {
        Record {
            class: Some(class.to_owned()),
            xstreams: Some(xstreams),
            threads: Some(threads),
            initialization_time: None,
            elapsed,
        }
    }

    fn means(aggregate: &Aggregate) -> Vec<(Key, f64)> {
        aggregate
            .summaries()
            .map(|(key, summary)| (key.to_owned(), summary.mean))
            .collect()
    }

    #[test]
    fn mean() {
        let aggregate: Aggregate = vec![
            record("A", 1, 1, 1.0),
            record("A", 1, 1, 2.0),
            record("A", 1, 1, 3.0),
        ]
        .into_iter()
        .collect();

        let summaries: Vec<_> = aggregate.summaries().collect();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].1.mean, 2.0);
        assert_eq!(summaries[0].1.samples, 3);
    }

    #[test]
    fn order_invariant() {
        let records = vec![
            record("A", 1, 1, 1.5),
            record("B", 2, 4, 4.0),
            record("A", 1, 1, 2.5),
            record("B", 2, 4, 6.0),
            record("A", 2, 1, 0.5),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(2);

        let expected = means(&records.into_iter().collect());
        assert_eq!(means(&reversed.into_iter().collect()), expected);
        assert_eq!(means(&rotated.into_iter().collect()), expected);
    }

    #[test]
    fn sorted_keys() {
        let aggregate: Aggregate = vec![
            record("b", 1, 1, 1.0),
            record("a", 2, 1, 1.0),
            record("a", 1, 1, 1.0),
        ]
        .into_iter()
        .collect();

        let keys: Vec<Key> = aggregate.summaries().map(|(key, _)| key.to_owned()).collect();
        assert_eq!(
            keys,
            vec![
                Key::new(Some("a"), Some(1), Some(1)),
                Key::new(Some("a"), Some(2), Some(1)),
                Key::new(Some("b"), Some(1), Some(1)),
            ]
        );
    }

    #[test]
    fn from_directory() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
        std::fs::write(
            directory.path().join("ok.txt"),
            "Class = B\nNumber of available xstreams: 2\nNumber of available threads: 8\nTime in seconds = 4.0\nVERIFICATION SUCCESSFUL\n",
        )
        .expect("Failed to write");
        std::fs::write(
            directory.path().join("no_time.txt"),
            "Class = B\nVERIFICATION SUCCESSFUL\n",
        )
        .expect("Failed to write");
        std::fs::write(directory.path().join("ignored.log"), "VERIFICATION SUCCESSFUL")
            .expect("Failed to write");

        let (aggregate, skipped) =
            Aggregate::from_directory(directory.path(), "txt").expect("Failed to aggregate");

        assert_eq!(
            means(&aggregate),
            vec![(Key::new(Some("B"), Some(2), Some(8)), 4.0)]
        );
        assert_eq!(skipped.len(), 1);
        assert_eq!(
            skipped[0].to_string(),
            "Elapsed time is missing on no_time.txt"
        );
    }

    #[test]
    fn rounded_mean() {
        let aggregate: Aggregate = vec![record("A", 1, 1, 1.004), record("A", 1, 1, 1.0)]
            .into_iter()
            .collect();

        let (_, summary) = aggregate.summaries().next().expect("Always exists");
        assert_eq!(summary.rounded_mean(), 1.0);
    }
}
