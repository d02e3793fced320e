//! Standings pipeline
//!
//! Runs the four stages in order over one input snapshot. Every stage
//! produces a fresh value from the previous one; the engine keeps no state
//! between runs, so running it twice on the same snapshot gives identical
//! output.
//!
//! Every group winner reaches the Primary bracket, so a run with at least
//! one team always has a Primary leaderboard. The Secondary bracket is empty
//! whenever no group has a second member; that run still completes and
//! reports the bracket as `None` rather than as an empty leaderboard.

use crate::config::tournament::TournamentConfig;
use crate::engine::assigner::{assign_groups, GroupAssignment};
use crate::engine::bracket::{rank_bracket, BracketStanding};
use crate::engine::ranker::{rank_groups, GroupRanking, RankedGroup};
use crate::engine::scorer::score_groups;
use crate::error::{Result, StandingsError};
use crate::store::TeamTable;
use crate::types::{Bracket, EntryId, GroupLabel, TeamId, TeamRecord};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A team record enriched with everything the engine derived for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub entry: EntryId,
    pub name: TeamId,
    pub captain: String,
    pub seed_metric: Option<f64>,
    pub seed_rank: usize,
    pub group_label: GroupLabel,
    pub phase2_points: u32,
    pub won_metrics: Vec<String>,
    pub tie_break_metric: Option<f64>,
    pub group_position: usize,
    pub bracket: Bracket,
    pub final_metric: Option<f64>,
}

/// Complete result of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    /// Every team, in input order
    pub teams: Vec<TeamStanding>,
    /// Groups in label order with their final in-group order
    pub groups: Vec<RankedGroup>,
    pub primary: BracketStanding,
    /// `None` when no group had a second member
    pub secondary: Option<BracketStanding>,
}

impl Standings {
    pub fn bracket(&self, bracket: Bracket) -> Option<&BracketStanding> {
        match bracket {
            Bracket::Primary => Some(&self.primary),
            Bracket::Secondary => self.secondary.as_ref(),
        }
    }

    /// Teams ordered by seed rank, for the phase-1 draw table
    pub fn seeding(&self) -> Vec<&TeamStanding> {
        let mut teams: Vec<&TeamStanding> = self.teams.iter().collect();
        teams.sort_by_key(|team| team.seed_rank);
        teams
    }

    pub fn team(&self, entry: EntryId) -> Option<&TeamStanding> {
        self.teams.iter().find(|team| team.entry == entry)
    }
}

/// Stateless standings engine bound to one tournament rule set
#[derive(Debug, Clone)]
pub struct StandingsEngine {
    config: TournamentConfig,
    labels: Vec<GroupLabel>,
}

impl StandingsEngine {
    /// Create an engine, validating the rule set up front
    pub fn new(config: TournamentConfig) -> Result<Self> {
        config.validate()?;
        let labels = config.group_labels()?;
        Ok(Self { config, labels })
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn group_labels(&self) -> &[GroupLabel] {
        &self.labels
    }

    /// Extract records from a raw table and run every stage
    pub fn run(&self, table: &TeamTable) -> Result<Standings> {
        let records = table.records(&self.config)?;
        self.run_records(&records)
    }

    /// Run every stage over already validated records
    pub fn run_records(&self, records: &[TeamRecord]) -> Result<Standings> {
        let assignment = self.assign(records)?;
        let ranking = self.rank(&assignment)?;

        let primary = rank_bracket(
            Bracket::Primary,
            &ranking.bracket_members(Bracket::Primary),
            &self.config.final_stage,
        )?;
        let secondary = match rank_bracket(
            Bracket::Secondary,
            &ranking.bracket_members(Bracket::Secondary),
            &self.config.final_stage,
        ) {
            Ok(standing) => Some(standing),
            Err(StandingsError::InsufficientDataError { bracket }) => {
                warn!(
                    "{} bracket has no members: every group has a single team",
                    bracket
                );
                None
            }
            Err(err) => return Err(err),
        };

        let teams = enrich(&ranking);
        info!(
            "Standings computed for {} teams (champion {})",
            teams.len(),
            if primary.champion_declared {
                "declared"
            } else {
                "pending"
            }
        );

        Ok(Standings {
            teams,
            groups: ranking.groups,
            primary,
            secondary,
        })
    }

    /// First stage only: seed and distribute teams into groups
    pub fn assign(&self, records: &[TeamRecord]) -> Result<GroupAssignment> {
        assign_groups(records, &self.labels)
    }

    /// Score and rank an existing assignment. Useful for showing the group
    /// phase when a bracket cannot be ranked yet.
    pub fn rank(&self, assignment: &GroupAssignment) -> Result<GroupRanking> {
        let scores = score_groups(assignment, &self.config.rules)?;
        Ok(rank_groups(&scores))
    }
}

fn enrich(ranking: &GroupRanking) -> Vec<TeamStanding> {
    let mut teams: Vec<(usize, TeamStanding)> = ranking
        .groups
        .iter()
        .flat_map(|group| group.standings.iter())
        .map(|ranked| {
            let seeded = &ranked.scored.team;
            let record = &seeded.record;
            let standing = TeamStanding {
                entry: record.entry,
                name: record.name.clone(),
                captain: record.captain.clone(),
                seed_metric: record.seed_metric,
                seed_rank: seeded.seed_rank,
                group_label: seeded.group_label.clone(),
                phase2_points: ranked.scored.phase2_points,
                won_metrics: ranked.scored.won_metrics.clone(),
                tie_break_metric: record.tie_break_metric,
                group_position: ranked.group_position,
                bracket: ranked.bracket,
                final_metric: record.final_metric,
            };
            (seeded.input_position, standing)
        })
        .collect();

    // Back to input order, even if a caller hands in entries that are not 0..n
    teams.sort_by_key(|(input_position, _)| *input_position);
    teams.into_iter().map(|(_, standing)| standing).collect()
}
