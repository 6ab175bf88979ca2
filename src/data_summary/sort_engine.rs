use crate::data_processing::player_record::PlayerRecord;

use clap::ValueEnum;
use std::cmp::Ordering;

/// Field a report can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
    Rank,
    LastSeen,
}

impl SortField {
    /// Parses `"Name"`, `"Rank"` or `"LastSeen"`. Anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Name" => Some(SortField::Name),
            "Rank" => Some(SortField::Rank),
            "LastSeen" => Some(SortField::LastSeen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `"Desc"` is descending, anything else ascending.
    pub fn parse(value: &str) -> Self {
        if value == "Desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// Sorts players in place.
///
/// The sort is stable and always ascending. `Desc` then reverses the whole
/// slice, so players with equal keys also end up in reverse order. Without a
/// field the order is left as is, though `Desc` still reverses it.
///
/// # Arguments
///
/// * `players` - The records to sort.
/// * `field` - The sort key, or `None` to keep the current order.
/// * `direction` - Ascending or descending.
pub fn sort_players(players: &mut [PlayerRecord], field: Option<SortField>, direction: SortDirection) {
    match field {
        Some(SortField::Name) => players.sort_by(|p1, p2| compare_names(p1.name(), p2.name())),
        Some(SortField::Rank) => players.sort_by_key(PlayerRecord::rank),
        Some(SortField::LastSeen) => players.sort_by_key(|player| player.last_seen),
        None => {}
    }

    if direction == SortDirection::Desc {
        players.reverse();
    }
}

/// Players without a `[Player]` group sort first.
fn compare_names(name1: Option<&str>, name2: Option<&str>) -> Ordering {
    match (name1, name2) {
        (Some(name1), Some(name2)) => locale_compare(name1, name2),
        _ => name1.is_some().cmp(&name2.is_some()),
    }
}

/// Case-insensitive order; on a tie lowercase comes before uppercase.
///
/// Non-ASCII letters sort by code point, so `"Élène"` comes after `"Zed"`.
fn locale_compare(name1: &str, name2: &str) -> Ordering {
    name1
        .to_lowercase()
        .cmp(&name2.to_lowercase())
        .then_with(|| name2.cmp(name1))
}
