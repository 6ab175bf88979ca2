use thiserror::Error;

/// A list entry that is not a valid `id,count` pair.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PairError {
    #[error("entry {0:?} has no comma")]
    MissingComma(String),

    #[error("entry {0:?} has a non-numeric count")]
    InvalidCount(String),

    #[error("adding entry {0:?} overflows the total")]
    Overflow(String),
}

/// A defect in the fields of one save file.
///
/// Any of these aborts the extraction run, since a wrong value would silently
/// skew the report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A key the `[Player]` group must contain is missing.
    #[error("[{section}] has no `{key}` entry")]
    MissingField {
        section: &'static str,
        key: &'static str,
    },

    /// A numeric key holds something that is not a number.
    #[error("`{key}` is not a number: {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    /// An aggregated list contains a malformed entry.
    #[error("`{key}` has a malformed entry: {source}")]
    InvalidPair {
        key: &'static str,
        #[source]
        source: PairError,
    },
}
