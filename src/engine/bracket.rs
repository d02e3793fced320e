//! Bracket ranker
//!
//! Orders the members of a final bracket by the phase-3 metric and labels
//! the medal positions. A member without a positive final metric is
//! "pending": it is still ranked, but a bracket whose members are all
//! pending declares no champion and no medals.

use crate::config::tournament::{FinalStageConfig, FinalTieBreak, PendingMedalPolicy};
use crate::engine::ranker::RankedTeam;
use crate::error::{Result, StandingsError};
use crate::types::{Bracket, EntryId, GroupLabel, Medal, TeamId, TeamRecord};
use crate::utils::cmp_desc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{info, warn};

/// One line of a bracket leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketEntry {
    /// 1-based leaderboard position
    pub rank: usize,
    pub entry: EntryId,
    pub name: TeamId,
    pub captain: String,
    pub group_label: GroupLabel,
    pub group_position: usize,
    pub final_metric: Option<f64>,
    /// No real final-stage result yet
    pub pending: bool,
    pub medal: Option<Medal>,
}

/// Ordered leaderboard of one bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketStanding {
    pub bracket: Bracket,
    pub entries: Vec<BracketEntry>,
    /// False when no member has a real result yet
    pub champion_declared: bool,
}

impl BracketStanding {
    /// Leader of the bracket, only once a real result exists
    pub fn champion(&self) -> Option<&BracketEntry> {
        if self.champion_declared {
            self.entries.first()
        } else {
            None
        }
    }

    /// Entries holding a medal, in rank order
    pub fn medalists(&self) -> Vec<&BracketEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.medal.is_some())
            .collect()
    }

    pub fn all_pending(&self) -> bool {
        self.entries.iter().all(|entry| entry.pending)
    }
}

fn secondary_key(tie_break: FinalTieBreak, a: &TeamRecord, b: &TeamRecord) -> Ordering {
    match tie_break {
        FinalTieBreak::TieBreakMetric => cmp_desc(a.tie_break_metric, b.tie_break_metric),
        FinalTieBreak::SeedMetric => cmp_desc(a.seed_metric, b.seed_metric),
        FinalTieBreak::InputOrder => Ordering::Equal,
    }
}

/// Rank the members of one bracket.
///
/// `members` must be in bracket order (group order, then group position);
/// the sort is stable, so members equal on both keys keep that order.
pub fn rank_bracket(
    bracket: Bracket,
    members: &[&RankedTeam],
    final_stage: &FinalStageConfig,
) -> Result<BracketStanding> {
    if members.is_empty() {
        return Err(StandingsError::InsufficientDataError { bracket });
    }

    let mut ordered: Vec<&RankedTeam> = members.to_vec();
    ordered.sort_by(|a, b| {
        let a = &a.scored.team.record;
        let b = &b.scored.team.record;
        cmp_desc(a.final_metric, b.final_metric)
            .then_with(|| secondary_key(final_stage.tie_break, a, b))
    });

    let any_result = ordered
        .iter()
        .any(|member| member.scored.team.record.has_final_result());
    let cutoff = final_stage.medal_cutoff(bracket);

    let entries: Vec<BracketEntry> = ordered
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let rank = index + 1;
            let record = &member.scored.team.record;
            let pending = !record.has_final_result();
            let eligible = any_result
                && rank <= cutoff
                && match final_stage.pending_medals {
                    PendingMedalPolicy::Withhold => !pending,
                    PendingMedalPolicy::ByOrder => true,
                };

            BracketEntry {
                rank,
                entry: record.entry,
                name: record.name.clone(),
                captain: record.captain.clone(),
                group_label: member.scored.team.group_label.clone(),
                group_position: member.group_position,
                final_metric: record.final_metric,
                pending,
                medal: if eligible { Medal::for_rank(rank) } else { None },
            }
        })
        .collect();

    let champion_declared = entries.first().is_some_and(|leader| !leader.pending);
    if champion_declared {
        info!(
            "{} bracket: '{}' leads {} teams",
            bracket,
            entries[0].name,
            entries.len()
        );
    } else {
        warn!(
            "{} bracket: all {} teams pending, no champion declared",
            bracket,
            entries.len()
        );
    }

    Ok(BracketStanding {
        bracket,
        entries,
        champion_declared,
    })
}
