use crate::archetype::ArchetypeResolver;
use crate::data_processing::field_normalizer::{count_entries, sum_pair_counts};
use crate::data_processing::name_decoder::decode_name;
use crate::data_processing::player_record::{PlayerProfile, PlayerRecord, PlayerStats};
use crate::data_processing::range_filter::{FileTimestamps, RangeFilter};
use crate::data_processing::record_error::RecordError;
use crate::save_format::{FieldValue, SaveDocument, Section};

use chrono::{DateTime, Utc};
use std::str::FromStr;

const PLAYER_SECTION: &str = "Player";
const STATS_SECTION: &str = "mPlayer";
const DEFAULT_BASE: &str = "In Space";
const DEFAULT_FACTION: &str = "Freelancer";

/// What became of one parsed save file.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Built(PlayerRecord),
    /// The file had no content.
    Empty,
    /// The file fell outside the range window.
    Filtered,
}

/// Turns parsed save files into [`PlayerRecord`]s.
///
/// The range cutoff is computed once, from the instant given to [`RecordBuilder::new`],
/// so every file of a run is judged against the same window.
pub struct RecordBuilder<'a, R: ArchetypeResolver + ?Sized> {
    resolver: &'a R,
    range: Option<(RangeFilter, DateTime<Utc>)>,
}

impl<'a, R: ArchetypeResolver + ?Sized> RecordBuilder<'a, R> {
    /// Creates a builder.
    ///
    /// # Arguments
    ///
    /// * `resolver` - Resolves `ship_archetype` ids to nicknames.
    /// * `range` - Optional recency window; `None` keeps every file.
    /// * `now` - The instant the window is counted back from.
    pub fn new(resolver: &'a R, range: Option<RangeFilter>, now: DateTime<Utc>) -> Self {
        RecordBuilder {
            resolver,
            range: range.map(|filter| (filter, filter.cutoff(now))),
        }
    }

    /// Builds the record for one save file.
    ///
    /// Empty documents and files outside the range window produce no record. The
    /// window is checked before any field is read.
    ///
    /// # Arguments
    ///
    /// * `document` - The parsed save file.
    /// * `timestamps` - The file's modification and creation times.
    ///
    /// # Returns
    ///
    /// The `BuildOutcome`, or a `RecordError` if a field is missing or malformed.
    pub fn build(
        &self,
        document: &SaveDocument,
        timestamps: FileTimestamps,
    ) -> Result<BuildOutcome, RecordError> {
        if document.is_empty() {
            return Ok(BuildOutcome::Empty);
        }

        if let Some((filter, cutoff)) = &self.range {
            if !filter.admits(&timestamps, *cutoff) {
                return Ok(BuildOutcome::Filtered);
            }
        }

        let profile = document
            .section(PLAYER_SECTION)
            .map(|section| self.read_profile(section))
            .transpose()?;
        let stats = document
            .section(STATS_SECTION)
            .map(read_stats)
            .transpose()?
            .unwrap_or_default();

        Ok(BuildOutcome::Built(PlayerRecord {
            profile,
            last_seen: timestamps.modified,
            created: timestamps.created,
            stats,
        }))
    }

    fn read_profile(&self, section: &Section) -> Result<PlayerProfile, RecordError> {
        let archetype_id: u32 = read_number(section, "ship_archetype")?;
        let shiparch = match self.resolver.resolve(archetype_id) {
            Some(nickname) => nickname.to_owned(),
            None => {
                log::debug!("Unknown ship archetype {archetype_id}");
                archetype_id.to_string()
            }
        };

        Ok(PlayerProfile {
            name: decode_name(read_required(section, "name")?),
            system: read_required(section, "system")?.to_owned(),
            rank: read_number(section, "rank")?,
            pvpkills: read_number(section, "num_kills")?,
            money: read_number(section, "money")?,
            shiparch,
            base: read_or(section, "base", DEFAULT_BASE),
            faction: read_or(section, "rep_group", DEFAULT_FACTION),
        })
    }
}

fn read_stats(section: &Section) -> Result<PlayerStats, RecordError> {
    let time_played = match stat_field(section, "total_time_played").first() {
        Some(value) => parse_number("total_time_played", value)?,
        None => 0.0,
    };

    Ok(PlayerStats {
        time_played,
        bases_visited: count_entries(stat_field(section, "base_visited")),
        systems_visited: count_entries(stat_field(section, "sys_visited")),
        holes_visited: count_entries(stat_field(section, "holes_visited")),
        missions: sum_counts(section, "rm_completed")?,
        kills: sum_counts(section, "ship_type_killed")?,
    })
}

/// Statistics keys written without a value count as absent.
fn stat_field<'s>(section: &'s Section, key: &str) -> FieldValue<'s> {
    section.field(key).present()
}

fn sum_counts(section: &Section, key: &'static str) -> Result<i64, RecordError> {
    sum_pair_counts(stat_field(section, key)).map_err(|source| RecordError::InvalidPair { key, source })
}

fn read_required<'s>(section: &'s Section, key: &'static str) -> Result<&'s str, RecordError> {
    section
        .field(key)
        .first()
        .ok_or(RecordError::MissingField {
            section: PLAYER_SECTION,
            key,
        })
}

fn read_number<T: FromStr>(section: &Section, key: &'static str) -> Result<T, RecordError> {
    parse_number(key, read_required(section, key)?)
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, RecordError> {
    value.trim().parse().map_err(|_| RecordError::InvalidNumber {
        key,
        value: value.to_owned(),
    })
}

/// Reads an optional text field; empty values count as absent.
fn read_or(section: &Section, key: &str, default: &str) -> String {
    section
        .field(key)
        .first()
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::flhash::nickname_hash;
    use crate::archetype::NicknameTable;
    use crate::save_format::parse_save_text;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn fresh() -> FileTimestamps {
        FileTimestamps {
            modified: now() - TimeDelta::hours(1),
            created: now() - TimeDelta::days(100),
        }
    }

    fn table() -> NicknameTable {
        NicknameTable::from_nicknames(["li_elite"])
    }

    fn player_section(extra: &str) -> String {
        format!(
            "[Player]\nname = 00480069\nsystem = li01\nrank = 3\nnum_kills = 2\nmoney = 15000\nship_archetype = {}\n{extra}",
            nickname_hash("li_elite")
        )
    }

    fn built(outcome: BuildOutcome) -> PlayerRecord {
        match outcome {
            BuildOutcome::Built(record) => record,
            other => panic!("expected a record, got {other:?}"),
        }
    }

    #[test]
    fn builds_profile_with_defaults() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());
        let document = parse_save_text(&player_section(""));

        let record = built(builder.build(&document, fresh()).unwrap());
        let profile = record.profile.unwrap();
        assert_eq!(profile.name, "Hi");
        assert_eq!(profile.system, "li01");
        assert_eq!(profile.rank, 3);
        assert_eq!(profile.pvpkills, 2);
        assert_eq!(profile.money, 15000);
        assert_eq!(profile.shiparch, "li_elite");
        assert_eq!(profile.base, "In Space");
        assert_eq!(profile.faction, "Freelancer");
        assert_eq!(record.stats, PlayerStats::default());
        assert_eq!(record.last_seen, fresh().modified);
        assert_eq!(record.created, fresh().created);
    }

    #[test]
    fn reads_optional_fields_and_statistics() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());
        let text = player_section("base = li01_01_base\nrep_group = li_n_grp\n")
            + "[mPlayer]\ntotal_time_played = 5400.5\nbase_visited = 1\nbase_visited = 2\n\
               sys_visited = 7\nrm_completed = 100, 4\nrm_completed = 101, 6\n\
               ship_type_killed = 9, 11\n";

        let record = built(builder.build(&parse_save_text(&text), fresh()).unwrap());
        let profile = record.profile.unwrap();
        assert_eq!(profile.base, "li01_01_base");
        assert_eq!(profile.faction, "li_n_grp");
        assert_eq!(
            record.stats,
            PlayerStats {
                time_played: 5400.5,
                bases_visited: 2,
                systems_visited: 1,
                holes_visited: 0,
                missions: 10,
                kills: 11,
            }
        );
    }

    #[test]
    fn empty_statistics_values_count_as_absent() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());
        let text = "[mPlayer]\ntotal_time_played =\nbase_visited =\nsys_visited =\n\
                    holes_visited =\nrm_completed =\nship_type_killed =\n";

        let record = built(builder.build(&parse_save_text(text), fresh()).unwrap());
        assert_eq!(record.stats, PlayerStats::default());
    }

    #[test]
    fn unknown_archetype_falls_back_to_its_id() {
        let table = NicknameTable::default();
        let builder = RecordBuilder::new(&table, None, now());
        let document = parse_save_text(&player_section(""));

        let record = built(builder.build(&document, fresh()).unwrap());
        assert_eq!(
            record.profile.unwrap().shiparch,
            nickname_hash("li_elite").to_string()
        );
    }

    #[test]
    fn files_without_player_group_keep_only_bookkeeping() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());
        let document = parse_save_text("[mPlayer]\nsys_visited = 1\nsys_visited = 2\n");

        let record = built(builder.build(&document, fresh()).unwrap());
        assert!(record.profile.is_none());
        assert_eq!(record.stats.systems_visited, 2);
    }

    #[test]
    fn empty_documents_are_skipped() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());
        assert_eq!(
            builder.build(&SaveDocument::default(), fresh()),
            Ok(BuildOutcome::Empty)
        );
    }

    #[test]
    fn range_is_checked_before_fields_are_read() {
        let table = table();
        let filter = RangeFilter::new(7, Default::default());
        let builder = RecordBuilder::new(&table, Some(filter), now());
        // Malformed fields would fail the build if they were read.
        let document = parse_save_text("[Player]\nrank = lots\n");
        let stale = FileTimestamps {
            modified: now() - TimeDelta::days(8),
            created: now() - TimeDelta::days(8),
        };

        assert_eq!(builder.build(&document, stale), Ok(BuildOutcome::Filtered));
    }

    #[test]
    fn malformed_fields_are_record_errors() {
        let table = table();
        let builder = RecordBuilder::new(&table, None, now());

        let document = parse_save_text(&player_section("").replace("rank = 3", "rank = three"));
        assert_eq!(
            builder.build(&document, fresh()),
            Err(RecordError::InvalidNumber {
                key: "rank",
                value: "three".into()
            })
        );

        let document = parse_save_text("[Player]\nrank = 1\n");
        assert!(matches!(
            builder.build(&document, fresh()),
            Err(RecordError::MissingField { .. })
        ));

        let document = parse_save_text("[mPlayer]\nship_type_killed = 12345\n");
        assert!(matches!(
            builder.build(&document, fresh()),
            Err(RecordError::InvalidPair {
                key: "ship_type_killed",
                ..
            })
        ));
    }
}
