use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use std::fs::Metadata;
use std::io;

/// Which save file timestamp a [`RangeFilter`] looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RangeType {
    #[default]
    LastSeen,
    Created,
}

impl RangeType {
    /// Parses `"LastSeen"` or `"Created"`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LastSeen" => Some(RangeType::LastSeen),
            "Created" => Some(RangeType::Created),
            _ => None,
        }
    }
}

/// Modification and creation times of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimestamps {
    pub modified: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl FileTimestamps {
    /// Reads both timestamps from file metadata.
    ///
    /// Filesystems without a creation time fall back to the modification time.
    pub fn from_metadata(metadata: &Metadata) -> io::Result<Self> {
        let modified = metadata.modified()?;
        let created = match metadata.created() {
            Ok(created) => created,
            Err(err) => {
                log::debug!("Creation time unavailable ({err}), using modification time");
                modified
            }
        };
        Ok(FileTimestamps {
            modified: modified.into(),
            created: created.into(),
        })
    }

    fn select(&self, range_type: RangeType) -> DateTime<Utc> {
        match range_type {
            RangeType::LastSeen => self.modified,
            RangeType::Created => self.created,
        }
    }
}

/// Keeps only save files touched within the last `days` days.
///
/// # Fields
///
/// * `days` - Width of the window, counted back from the current instant.
/// * `range_type` - The timestamp compared against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub days: u32,
    pub range_type: RangeType,
}

impl RangeFilter {
    pub fn new(days: u32, range_type: RangeType) -> Self {
        RangeFilter { days, range_type }
    }

    /// The oldest instant still inside the window.
    ///
    /// Windows reaching past the earliest representable instant admit everything.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        TimeDelta::try_days(i64::from(self.days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// True when the selected timestamp is at or after `cutoff`.
    pub fn admits(&self, timestamps: &FileTimestamps, cutoff: DateTime<Utc>) -> bool {
        timestamps.select(self.range_type) >= cutoff
    }
}
