use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`NicknameTable`](super::NicknameTable).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The install directory, or a directory below it, could not be listed.
    #[error("cannot read install directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file could not be read.
    #[error("cannot read data file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
