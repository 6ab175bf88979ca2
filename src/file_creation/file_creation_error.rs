use std::path::PathBuf;
use thiserror::Error;

/// Errors that may occur while writing a report.
///
/// # Variants
///
/// * `Serialization` - The report could not be serialized.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - Writing the serialized report failed.
#[derive(Debug, Error)]
pub enum FileCreationError {
    #[error("cannot serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot create {path}: {source}")]
    FileCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report: {0}")]
    FileWrite(#[from] std::io::Error),
}
