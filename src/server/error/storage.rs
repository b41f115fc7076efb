use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures of the local file storage used for uploads.
///
/// All variants result in a 500 Internal Server Error with a generic message
/// returned to the client; the path and cause are only logged.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing the uploaded content to disk failed (unwritable directory, disk full, ...).
    #[error("Failed to write upload to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The upload directory could not be created at startup.
    #[error("Failed to create upload directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The upload path could not be inspected for a reason other than not existing.
    #[error("Failed to inspect upload directory {path}: {source}")]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured upload path exists but is not a directory.
    #[error("Upload path {0} is not a directory")]
    NotADirectory(PathBuf),
}
