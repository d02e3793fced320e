//! Phase scorer
//!
//! Winner-take-all scoring inside each group. For every rule, in declared
//! order, the teams that reach the group maximum each receive the full
//! award. A maximum of zero or no value at all means the campaign has not
//! been played yet, so nobody scores.

use crate::config::tournament::ScoringRule;
use crate::engine::assigner::{Group, GroupAssignment, SeededTeam};
use crate::error::{Result, StandingsError};
use crate::types::{EntryId, GroupLabel};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What one rule produced inside one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AwardOutcome {
    /// Every listed entry reached `max` and received the points
    Awarded { max: f64, winners: Vec<EntryId> },
    /// Not contested yet: no positive value in the group
    Pending,
}

/// Audit record of a single rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricAward {
    pub metric: String,
    pub points: u32,
    pub outcome: AwardOutcome,
}

impl MetricAward {
    /// Points this award added to the group in total
    pub fn points_distributed(&self) -> u64 {
        match &self.outcome {
            AwardOutcome::Awarded { winners, .. } => {
                u64::from(self.points) * winners.len() as u64
            }
            AwardOutcome::Pending => 0,
        }
    }
}

/// A team with its accumulated phase-2 points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTeam {
    pub team: SeededTeam,
    pub phase2_points: u32,
    /// Metrics this team won, in rule order
    pub won_metrics: Vec<String>,
}

/// Scores of one group, members still in seeding order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGroup {
    pub label: GroupLabel,
    pub teams: Vec<ScoredTeam>,
    pub awards: Vec<MetricAward>,
}

impl ScoredGroup {
    pub fn total_points(&self) -> u64 {
        self.teams
            .iter()
            .map(|team| u64::from(team.phase2_points))
            .sum()
    }
}

/// Output of the phase scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseScores {
    pub groups: Vec<ScoredGroup>,
}

/// Score every group independently
pub fn score_groups(assignment: &GroupAssignment, rules: &[ScoringRule]) -> Result<PhaseScores> {
    if rules.is_empty() {
        return Err(StandingsError::config("Scoring rule list cannot be empty"));
    }

    let groups = assignment
        .groups
        .iter()
        .map(|group| score_group(group, rules))
        .collect::<Result<Vec<_>>>()?;

    let pending = groups
        .iter()
        .flat_map(|group| group.awards.iter())
        .filter(|award| award.outcome == AwardOutcome::Pending)
        .count();
    info!(
        "Scored {} groups against {} rules ({} group/rule pairs pending)",
        groups.len(),
        rules.len(),
        pending
    );

    Ok(PhaseScores { groups })
}

/// Apply every rule, in order, to a single group
pub fn score_group(group: &Group, rules: &[ScoringRule]) -> Result<ScoredGroup> {
    let mut teams: Vec<ScoredTeam> = group
        .teams
        .iter()
        .map(|team| ScoredTeam {
            team: team.clone(),
            phase2_points: 0,
            won_metrics: Vec::new(),
        })
        .collect();

    let mut awards = Vec::with_capacity(rules.len());
    for rule in rules {
        let values = teams
            .iter()
            .map(|scored| scored.team.record.phase_metric(&rule.metric))
            .collect::<Result<Vec<_>>>()?;

        let max = values
            .iter()
            .flatten()
            .copied()
            .fold(None, |acc: Option<f64>, value| {
                Some(acc.map_or(value, |current| current.max(value)))
            });

        let outcome = match max {
            Some(max) if max > 0.0 => {
                let mut winners = Vec::new();
                for (scored, value) in teams.iter_mut().zip(&values) {
                    if *value == Some(max) {
                        scored.phase2_points = scored
                            .phase2_points
                            .checked_add(rule.points)
                            .ok_or_else(|| {
                                StandingsError::config(format!(
                                    "Points for '{}' exceed {} after rule '{}'",
                                    scored.team.record.name,
                                    u32::MAX,
                                    rule.metric
                                ))
                            })?;
                        scored.won_metrics.push(rule.metric.clone());
                        winners.push(scored.team.record.entry);
                    }
                }
                debug!(
                    "Group {}: {} won by {} team(s) at {}, +{} each",
                    group.label,
                    rule.metric,
                    winners.len(),
                    max,
                    rule.points
                );
                AwardOutcome::Awarded { max, winners }
            }
            _ => {
                debug!("Group {}: {} not contested yet", group.label, rule.metric);
                AwardOutcome::Pending
            }
        };

        awards.push(MetricAward {
            metric: rule.metric.clone(),
            points: rule.points,
            outcome,
        });
    }

    Ok(ScoredGroup {
        label: group.label.clone(),
        teams,
        awards,
    })
}
