use crate::data_summary::player_report::PlayerReport;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wrapper structure for serializing a `PlayerReport` with run metadata.
///
/// # Fields
///
/// * `generated_at` - When the report was written.
/// * `player_count` - Number of players in the report.
/// * `report` - The `PlayerReport`, flattened into the JSON object.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonFormat<'a> {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) player_count: usize,
    #[serde(flatten)]
    pub(crate) report: &'a PlayerReport,
}
