//! Player statistics from Freelancer multiplayer save files.
//!
//! Save files are found under a directory tree, parsed, turned into
//! [`PlayerRecord`]s and collected into a sortable [`PlayerReport`].
//!
//! ```no_run
//! use fl_player_stats::{extract_players, ExtractOptions, NicknameTable, SortDirection, SortField};
//! use std::path::Path;
//!
//! let ships = NicknameTable::from_install_dir(Path::new("Freelancer/DATA"))?;
//! let report = extract_players(Path::new("Accts/MultiPlayer"), &ships, &ExtractOptions::default())?
//!     .sort(Some(SortField::Rank), SortDirection::Desc);
//! println!("{} players", report.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod archetype;
pub mod data_processing;
pub mod data_summary;
pub mod file_creation;
pub mod save_format;

pub use archetype::{ArchetypeResolver, LookupError, NicknameTable};
pub use data_processing::data_processor::{extract_players, extract_players_at, ExtractOptions};
pub use data_processing::extraction_error::ExtractionError;
pub use data_processing::name_decoder::{decode_name, encode_name};
pub use data_processing::player_record::{PlayerProfile, PlayerRecord, PlayerStats};
pub use data_processing::range_filter::{RangeFilter, RangeType};
pub use data_processing::record_error::{PairError, RecordError};
pub use data_summary::player_report::PlayerReport;
pub use data_summary::sort_engine::{sort_players, SortDirection, SortField};
