//! Configuration management for the standings engine
//!
//! This module holds the tournament rule set consumed by the engine and the
//! application settings used by the command line adapter.

pub mod app;
pub mod tournament;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use tournament::{
    ColumnNames, FinalStageConfig, FinalTieBreak, GroupSettings, PendingMedalPolicy, ScoringRule,
    TournamentConfig,
};
