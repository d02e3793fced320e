//! Group ranker
//!
//! Orders each group and routes its winner to the Primary bracket. The
//! in-group order is a total order over these keys:
//!
//! 1. `phase2_points`, descending
//! 2. `tie_break_metric`, descending (absent last)
//! 3. `seed_metric`, descending (absent last)
//! 4. input order: the team whose row came first wins an exact tie
//!
//! The last key decides which side of a perfect tie reaches the Primary
//! bracket, so it is part of the ranking policy and not a sort artifact.

use crate::engine::scorer::{MetricAward, PhaseScores, ScoredGroup, ScoredTeam};
use crate::types::{Bracket, GroupLabel};
use crate::utils::cmp_desc;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info};

/// A team with its final in-group rank and bracket routing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub scored: ScoredTeam,
    /// 1-based rank within the group
    pub group_position: usize,
    pub bracket: Bracket,
}

/// Final order of one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGroup {
    pub label: GroupLabel,
    pub standings: Vec<RankedTeam>,
    pub awards: Vec<MetricAward>,
}

impl RankedGroup {
    /// The team routed to the Primary bracket, if the group has members
    pub fn winner(&self) -> Option<&RankedTeam> {
        self.standings.first()
    }
}

/// Output of the group ranker
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupRanking {
    pub groups: Vec<RankedGroup>,
}

impl GroupRanking {
    /// Members routed to a bracket, in group order then group position
    pub fn bracket_members(&self, bracket: Bracket) -> Vec<&RankedTeam> {
        self.groups
            .iter()
            .flat_map(|group| group.standings.iter())
            .filter(|team| team.bracket == bracket)
            .collect()
    }

    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|group| group.standings.len()).sum()
    }
}

/// In-group ordering; see the module docs for the key sequence
pub fn compare_in_group(a: &ScoredTeam, b: &ScoredTeam) -> Ordering {
    b.phase2_points
        .cmp(&a.phase2_points)
        .then_with(|| cmp_desc(a.team.record.tie_break_metric, b.team.record.tie_break_metric))
        .then_with(|| cmp_desc(a.team.record.seed_metric, b.team.record.seed_metric))
        .then_with(|| a.team.input_position.cmp(&b.team.input_position))
}

/// Rank every group and route its members
pub fn rank_groups(scores: &PhaseScores) -> GroupRanking {
    let groups: Vec<RankedGroup> = scores.groups.iter().map(rank_group).collect();

    let ranking = GroupRanking { groups };
    info!(
        "Ranked {} groups: {} teams to {}, {} to {}",
        ranking.groups.len(),
        ranking.bracket_members(Bracket::Primary).len(),
        Bracket::Primary,
        ranking.bracket_members(Bracket::Secondary).len(),
        Bracket::Secondary
    );
    ranking
}

/// Rank a single group
pub fn rank_group(group: &ScoredGroup) -> RankedGroup {
    let mut ordered: Vec<&ScoredTeam> = group.teams.iter().collect();
    ordered.sort_by(|a, b| compare_in_group(a, b));

    let standings: Vec<RankedTeam> = ordered
        .into_iter()
        .enumerate()
        .map(|(index, scored)| {
            let group_position = index + 1;
            RankedTeam {
                scored: scored.clone(),
                group_position,
                bracket: Bracket::for_group_position(group_position),
            }
        })
        .collect();

    if let Some(winner) = standings.first() {
        debug!(
            "Group {} won by '{}' with {} points",
            group.label, winner.scored.team.record.name, winner.scored.phase2_points
        );
    }

    RankedGroup {
        label: group.label.clone(),
        standings,
        awards: group.awards.clone(),
    }
}
