use crate::data_processing::record_error::RecordError;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an extraction run.
///
/// Every variant that concerns a single file or directory names it.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read save file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read timestamps of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid save file {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    #[error("cannot create thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
