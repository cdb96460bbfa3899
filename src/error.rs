use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a report run.
///
/// Record-level problems never show up here; they are absorbed by the
/// aggregator (see [`crate::record::RecordError`]).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file {} not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("error reading file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid date format '{0}', use YYYY-MM-DD")]
    InvalidDate(String),
}

impl ReportError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
