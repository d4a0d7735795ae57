//!
//! The benchmark summary table.
//!

pub mod row;

use std::path::Path;

use crate::error::Error;

use self::row::Row;

///
/// The benchmark summary table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The case name the table was loaded for.
    pub name: String,
    /// The rows in file order.
    pub rows: Vec<Row>,
}

impl Table {
    /// The summary table file extension.
    pub const EXTENSION: &'static str = "csv";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &str, rows: Vec<Row>) -> Self {
        Self {
            name: name.to_owned(),
            rows,
        }
    }

    ///
    /// Loads `{directory}/{case_name}.csv`.
    ///
    pub fn load(directory: &Path, case_name: &str) -> Result<Self, Error> {
        let path = directory.join(format!("{case_name}.{}", Self::EXTENSION));
        let file = std::fs::File::open(path.as_path()).map_err(|error| Error::FileNotFound {
            error,
            path: path.clone(),
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let rows = reader
            .deserialize::<Row>()
            .collect::<Result<Vec<Row>, csv::Error>>()
            .map_err(|error| Error::Parsing {
                error,
                path: path.clone(),
            })?;
        Ok(Self::new(case_name, rows))
    }

    ///
    /// Returns the nanosecond time of the unique single-thread baseline row.
    ///
    pub fn baseline_time(&self) -> Result<f64, Error> {
        let mut baselines = self.rows.iter().filter(|row| row.is_baseline());
        let baseline = baselines.next().ok_or_else(|| Error::BaselineNotFound {
            case: self.name.clone(),
        })?;
        let extra = baselines.count();
        if extra > 0 {
            return Err(Error::AmbiguousBaseline {
                case: self.name.clone(),
                count: extra + 1,
            });
        }
        if !baseline.has_valid_timing() {
            return Err(self.invalid_timing(baseline));
        }
        Ok(baseline.time_nanos)
    }

    ///
    /// Computes `baseline / time_nanos` for every row, in row order.
    ///
    pub fn speedups(&self, baseline: f64) -> Result<Vec<f64>, Error> {
        self.rows
            .iter()
            .map(|row| {
                if row.has_valid_timing() {
                    Ok(baseline / row.time_nanos)
                } else {
                    Err(self.invalid_timing(row))
                }
            })
            .collect()
    }

    ///
    /// Returns the distinct Xstreams values in the order they first appear.
    ///
    pub fn xstreams(&self) -> Vec<u32> {
        let mut values: Vec<u32> = Vec::new();
        for row in self.rows.iter() {
            if !values.contains(&row.xstreams) {
                values.push(row.xstreams);
            }
        }
        values
    }

    ///
    /// Returns the rows with the given Xstreams value, in row order.
    ///
    pub fn partition(&self, xstreams: u32) -> Vec<&Row> {
        self.rows
            .iter()
            .filter(|row| row.xstreams == xstreams)
            .collect()
    }

    ///
    /// Returns the rows grouped by Xstreams value, in the order the values first appear.
    ///
    pub fn partitions(&self) -> Vec<(u32, Vec<&Row>)> {
        self.xstreams()
            .into_iter()
            .map(|xstreams| (xstreams, self.partition(xstreams)))
            .collect()
    }

    ///
    /// Builds the invalid timing error for a row of this table.
    ///
    pub fn invalid_timing(&self, row: &Row) -> Error {
        Error::InvalidTiming {
            case: self.name.clone(),
            xstreams: row.xstreams,
            threads: row.threads,
            time_nanos: row.time_nanos,
        }
    }
}
