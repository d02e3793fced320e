//! Tournament standings engine
//!
//! Four pure stages, each consuming the previous stage's output:
//! group assignment, phase-2 scoring, group ranking and bracket ranking.

pub mod assigner;
pub mod bracket;
pub mod pipeline;
pub mod ranker;
pub mod scorer;

// Re-export commonly used types
pub use assigner::{assign_groups, Group, GroupAssignment, SeededTeam};
pub use bracket::{rank_bracket, BracketEntry, BracketStanding};
pub use pipeline::{Standings, StandingsEngine, TeamStanding};
pub use ranker::{compare_in_group, rank_groups, GroupRanking, RankedGroup, RankedTeam};
pub use scorer::{score_groups, AwardOutcome, MetricAward, PhaseScores, ScoredGroup, ScoredTeam};
