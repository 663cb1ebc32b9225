use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of an index run, one variant per phase so diagnostics name
/// the step that aborted the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write index file {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn list_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::ListDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_index(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::WriteIndex {
            path: path.into(),
            source,
        }
    }
}
