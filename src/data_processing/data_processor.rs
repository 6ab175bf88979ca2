use crate::archetype::ArchetypeResolver;
use crate::data_processing::directory_walker::collect_save_files;
use crate::data_processing::extraction_error::ExtractionError;
use crate::data_processing::range_filter::{FileTimestamps, RangeFilter};
use crate::data_processing::record_builder::{BuildOutcome, RecordBuilder};
use crate::data_summary::player_report::PlayerReport;
use crate::save_format::parse_save_text;

use chrono::{DateTime, Utc};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one extraction run.
///
/// # Fields
///
/// * `range` - Optional recency window. `None` keeps every save file.
/// * `threads` - Size of the worker pool. `None` lets rayon pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub range: Option<RangeFilter>,
    pub threads: Option<usize>,
}

/// Extracts a player report from every save file under `save_location`.
///
/// # Arguments
///
/// * `save_location` - The root of the save directory tree.
/// * `resolver` - Resolves ship archetype ids to nicknames.
/// * `options` - Range window and thread count.
///
/// # Returns
///
/// An unsorted `PlayerReport`, or the first `ExtractionError` encountered.
pub fn extract_players<R: ArchetypeResolver + ?Sized>(
    save_location: &Path,
    resolver: &R,
    options: &ExtractOptions,
) -> Result<PlayerReport, ExtractionError> {
    extract_players_at(save_location, resolver, options, Utc::now())
}

/// Same as [`extract_players`], with the range window counted back from `now`.
pub fn extract_players_at<R: ArchetypeResolver + ?Sized>(
    save_location: &Path,
    resolver: &R,
    options: &ExtractOptions,
    now: DateTime<Utc>,
) -> Result<PlayerReport, ExtractionError> {
    let paths = collect_save_files(save_location)?;
    log::debug!(
        "Found {} save files under {}",
        paths.len(),
        save_location.display()
    );

    let thread_pool = ThreadPoolBuilder::new()
        .num_threads(options.threads.unwrap_or(0))
        .build()?;
    let builder = RecordBuilder::new(resolver, options.range, now);

    let outcomes = thread_pool.install(|| {
        paths
            .par_iter()
            .map(|path| process_file(path, &builder))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let mut players = Vec::with_capacity(outcomes.len());
    let (mut empty, mut filtered) = (0, 0);
    for outcome in outcomes {
        match outcome {
            BuildOutcome::Built(record) => players.push(record),
            BuildOutcome::Empty => empty += 1,
            BuildOutcome::Filtered => filtered += 1,
        }
    }

    log::info!(
        "Extracted {} players from {} save files ({} empty, {} outside range)",
        players.len(),
        paths.len(),
        empty,
        filtered
    );
    Ok(PlayerReport::new(players))
}

/// Reads, parses and builds a single save file.
///
/// The file is read as UTF-8 with invalid sequences replaced. Timestamps are only
/// read for files with content.
fn process_file<R: ArchetypeResolver + ?Sized>(
    path: &PathBuf,
    builder: &RecordBuilder<'_, R>,
) -> Result<BuildOutcome, ExtractionError> {
    let bytes = fs::read(path).map_err(|source| ExtractionError::ReadFile {
        path: path.clone(),
        source,
    })?;
    let document = parse_save_text(&String::from_utf8_lossy(&bytes));
    if document.is_empty() {
        log::debug!("Skipping empty save file {}", path.display());
        return Ok(BuildOutcome::Empty);
    }

    let timestamps = fs::metadata(path)
        .and_then(|metadata| FileTimestamps::from_metadata(&metadata))
        .map_err(|source| ExtractionError::Metadata {
            path: path.clone(),
            source,
        })?;

    let outcome = builder
        .build(&document, timestamps)
        .map_err(|source| ExtractionError::Record {
            path: path.clone(),
            source,
        })?;
    if outcome == BuildOutcome::Filtered {
        log::debug!("Save file {} is outside the range window", path.display());
    }
    Ok(outcome)
}
