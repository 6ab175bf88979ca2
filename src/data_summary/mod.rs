pub mod player_report;
pub mod sort_engine;
