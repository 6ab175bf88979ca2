use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fields read from the `[Player]` group of a save file.
///
/// # Fields
///
/// * `name` - The decoded character name.
/// * `system` - Nickname of the system the character is in.
/// * `rank` - The character level.
/// * `pvpkills` - Number of player kills (`num_kills`).
/// * `money` - Credits on hand.
/// * `shiparch` - Nickname of the ship, resolved from `ship_archetype`.
/// * `base` - Docked base, or `"In Space"`.
/// * `faction` - Affiliation (`rep_group`), or `"Freelancer"`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub system: String,
    pub rank: i64,
    pub pvpkills: i64,
    pub money: i64,
    pub shiparch: String,
    pub base: String,
    pub faction: String,
}

/// Aggregates read from the `[mPlayer]` group. All zero when the group is missing.
///
/// # Fields
///
/// * `time_played` - Total seconds played.
/// * `bases_visited` - Number of bases docked at.
/// * `systems_visited` - Number of systems entered.
/// * `holes_visited` - Number of jump holes used.
/// * `missions` - Total completed missions across all mission types.
/// * `kills` - Total NPC kills across all ship types.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct PlayerStats {
    #[serde(rename = "timePlayed")]
    pub time_played: f64,
    #[serde(rename = "basesVisited")]
    pub bases_visited: usize,
    #[serde(rename = "systemsVisited")]
    pub systems_visited: usize,
    #[serde(rename = "holesVisited")]
    pub holes_visited: usize,
    pub missions: i64,
    pub kills: i64,
}

/// One row of the report, built from a single non-empty save file.
///
/// # Fields
///
/// * `profile` - Identity fields, `None` when the file has no `[Player]` group.
/// * `last_seen` - Modification time of the save file.
/// * `created` - Creation time of the save file.
/// * `stats` - Statistics aggregates.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    #[serde(flatten)]
    pub profile: Option<PlayerProfile>,
    #[serde(rename = "lastseen")]
    pub last_seen: DateTime<Utc>,
    pub created: DateTime<Utc>,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

impl PlayerRecord {
    pub fn name(&self) -> Option<&str> {
        self.profile.as_ref().map(|profile| profile.name.as_str())
    }

    pub fn rank(&self) -> Option<i64> {
        self.profile.as_ref().map(|profile| profile.rank)
    }
}
