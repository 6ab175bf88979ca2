use crate::data_summary::player_report::PlayerReport;
use crate::file_creation::file_creation_error::FileCreationError;
use crate::file_creation::json_format::JsonFormat;

use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes a `PlayerReport` into a pretty-printed JSON string.
///
/// # Arguments
///
/// * `report` - The report to serialize.
/// * `generated_at` - Timestamp recorded in the output.
///
/// # Returns
///
/// A `Result` containing the JSON string, or a `FileCreationError` if serialization fails.
fn generate_json(
    report: &PlayerReport,
    generated_at: DateTime<Utc>,
) -> Result<String, FileCreationError> {
    let wrapper = JsonFormat {
        generated_at,
        player_count: report.len(),
        report,
    };
    Ok(serde_json::to_string_pretty(&wrapper)?)
}

/// Writes a `PlayerReport` as JSON to any writer, such as stdout.
pub fn write_json<W: Write>(writer: W, report: &PlayerReport) -> Result<(), FileCreationError> {
    let json_output = generate_json(report, Utc::now())?;

    let mut writer = BufWriter::new(writer);
    writer.write_all(json_output.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Creates a JSON file from a `PlayerReport`.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `report` - The report to include in the file.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_json_file(filename: &Path, report: &PlayerReport) -> Result<(), FileCreationError> {
    let file = File::create(filename).map_err(|source| FileCreationError::FileCreation {
        path: filename.to_path_buf(),
        source,
    })?;
    write_json(file, report)
}
