//!
//! Benchmark log input.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// A single benchmark log file read in full.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// The path to the log file.
    pub path: PathBuf,
    /// The entire text content.
    pub content: String,
}

impl LogFile {
    ///
    /// Returns the file name used in diagnostics.
    ///
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl TryFrom<&Path> for LogFile {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let bytes = std::fs::read(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            content: String::from_utf8_lossy(bytes.as_slice()).into_owned(),
        })
    }
}

///
/// Lists the regular files directly inside `directory` whose name ends with `.{extension}`.
///
/// Subdirectories and files with other extensions are skipped. The result is sorted by path.
///
pub fn scan(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, Error> {
    if std::fs::read_dir(directory).is_err() {
        return Err(Error::DirectoryNotFound {
            path: directory.to_path_buf(),
        });
    }

    let resolution_pattern = format!(
        "{}/*.{extension}",
        glob::Pattern::escape(directory.to_string_lossy().as_ref())
    );
    let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())
        .map_err(|error| Error::Pattern {
            error,
            path: directory.to_path_buf(),
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}
