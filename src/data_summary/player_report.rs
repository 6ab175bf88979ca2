use crate::data_processing::player_record::PlayerRecord;
use crate::data_summary::sort_engine::{sort_players, SortDirection, SortField};

use serde::Serialize;

/// The records produced by one extraction run.
///
/// # Fields
///
/// * `players` - One record per non-empty save file, in the current sort order.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct PlayerReport {
    players: Vec<PlayerRecord>,
}

impl PlayerReport {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        PlayerReport { players }
    }

    /// Sorts the report and returns it, for chaining after extraction.
    pub fn sort(mut self, field: Option<SortField>, direction: SortDirection) -> Self {
        sort_players(&mut self.players, field, direction);
        self
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
