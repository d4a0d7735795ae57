//!
//! Log aggregator output.
//!

pub mod entry;
pub mod format;

use std::path::PathBuf;

use crate::aggregate::Aggregate;

use self::entry::Entry;
use self::format::Format;

///
/// The report over aggregated benchmark records.
///
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    /// The aggregated records.
    aggregate: &'a Aggregate,
}

impl<'a> Report<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(aggregate: &'a Aggregate) -> Self {
        Self { aggregate }
    }

    ///
    /// Returns the text lines in ascending key order, one per group.
    ///
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.aggregate
            .summaries()
            .map(|(key, summary)| format!("{key}: {:?}", summary.rounded_mean()))
    }

    ///
    /// Returns the serializable entries in ascending key order.
    ///
    pub fn entries(&self) -> impl Iterator<Item = Entry<'a>> + 'a {
        self.aggregate.summaries().map(Entry::from)
    }

    ///
    /// Writes the report in the requested format.
    ///
    pub fn write<W>(&self, writer: &mut W, format: &Format) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        match format {
            Format::Text => {
                for line in self.lines() {
                    writeln!(writer, "{line}")?;
                }
            }
            Format::Json => {
                let entries: Vec<Entry> = self.entries().collect();
                serde_json::to_writer_pretty(&mut *writer, &entries)?;
                writeln!(writer)?;
            }
            Format::Csv => {
                let mut csv_writer = csv::Writer::from_writer(&mut *writer);
                for entry in self.entries() {
                    csv_writer.serialize(entry)?;
                }
                csv_writer.flush()?;
            }
        }
        Ok(())
    }

    ///
    /// Writes the report to a file, or to the standard output if no path is given.
    ///
    pub fn write_to(&self, path: Option<PathBuf>, format: &Format) -> anyhow::Result<()> {
        match path {
            Some(path) => {
                let mut buffer = Vec::new();
                self.write(&mut buffer, format)?;
                std::fs::write(path.as_path(), buffer)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                self.write(&mut handle, format)?;
            }
        }
        Ok(())
    }
}
