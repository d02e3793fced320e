//! Tournament rules: groups, scoring rules, input columns and final-stage policy

use crate::error::{Result, StandingsError};
use crate::types::Bracket;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Highest medal cutoff a bracket can declare (gold, silver, bronze)
pub const MAX_MEDALS: usize = 3;

/// Group labels can be generated A..Z
const MAX_GENERATED_GROUPS: usize = 26;

/// One winner-take-all scoring rule for phase 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRule {
    /// Input column holding the metric
    pub metric: String,
    /// Points awarded to every team that reaches the group maximum
    pub points: u32,
}

impl ScoringRule {
    pub fn new(metric: impl Into<String>, points: u32) -> Self {
        Self {
            metric: metric.into(),
            points,
        }
    }
}

/// Group layout for phase 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Number of groups
    pub count: usize,
    /// Explicit labels; generated as A, B, C, ... when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Names of the input columns the engine reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub name: String,
    pub captain: String,
    pub seed: String,
    pub tie_break: String,
    pub final_metric: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            name: "Equipo".to_string(),
            captain: "Capitan".to_string(),
            seed: "F1_Venta_23_Ene_Porcentaje".to_string(),
            tie_break: "F2_TieBreak_Nuevos_Clientes".to_string(),
            final_metric: "F3_Pedidos_Por_Dia".to_string(),
        }
    }
}

/// Secondary key used when two bracket members tie on the final metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalTieBreak {
    /// Reuse the phase-2 tie-break metric
    TieBreakMetric,
    /// Fall back to the phase-1 seed metric
    SeedMetric,
    /// No secondary key, bracket order decides
    InputOrder,
}

/// Whether a pending result can still carry a medal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingMedalPolicy {
    /// Pending entries never receive a medal
    Withhold,
    /// Medals follow positional order even for pending entries, as long as
    /// the bracket has at least one real result
    ByOrder,
}

/// Final-stage policy. None of these fields has a default: the business
/// rule must be stated by whoever runs the tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalStageConfig {
    pub tie_break: FinalTieBreak,
    pub pending_medals: PendingMedalPolicy,
    /// Number of medals declared in the Primary bracket (1 = champion only)
    pub primary_medals: usize,
    /// Number of medals declared in the Secondary bracket
    pub secondary_medals: usize,
}

impl FinalStageConfig {
    /// Medal cutoff for a bracket
    pub fn medal_cutoff(&self, bracket: Bracket) -> usize {
        match bracket {
            Bracket::Primary => self.primary_medals,
            Bracket::Secondary => self.secondary_medals,
        }
    }
}

/// Complete rule set for one tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub groups: GroupSettings,
    /// Phase-2 rules, evaluated in declaration order
    pub rules: Vec<ScoringRule>,
    #[serde(default)]
    pub columns: ColumnNames,
    pub final_stage: FinalStageConfig,
}

impl TournamentConfig {
    /// Rules of the 2026 internal World Cup: four groups, 14 points in play,
    /// champion-only World Cup final and a three-medal Confederations final.
    pub fn world_cup_2026(tie_break: FinalTieBreak, pending_medals: PendingMedalPolicy) -> Self {
        Self {
            groups: GroupSettings {
                count: 4,
                labels: None,
            },
            rules: vec![
                ScoringRule::new("F2_Workout_Week_Score", 3),
                ScoringRule::new("F2_Sales_Battle_2_Score", 2),
                ScoringRule::new("F2_Customer_Month_Score", 4),
                ScoringRule::new("F2_Clientes_Compradores_Score", 5),
            ],
            columns: ColumnNames::default(),
            final_stage: FinalStageConfig {
                tie_break,
                pending_medals,
                primary_medals: 1,
                secondary_medals: 3,
            },
        }
    }

    /// Ordered group labels, generated when not given explicitly
    pub fn group_labels(&self) -> Result<Vec<String>> {
        let count = self.groups.count;
        if count == 0 {
            return Err(StandingsError::config("Group count must be greater than 0"));
        }

        match &self.groups.labels {
            Some(labels) => {
                if labels.len() != count {
                    return Err(StandingsError::config(format!(
                        "Group count is {} but {} labels were given",
                        count,
                        labels.len()
                    )));
                }
                let mut seen = HashSet::new();
                for label in labels {
                    if label.trim().is_empty() {
                        return Err(StandingsError::config("Group labels cannot be empty"));
                    }
                    if !seen.insert(label.as_str()) {
                        return Err(StandingsError::config(format!(
                            "Duplicate group label: {}",
                            label
                        )));
                    }
                }
                Ok(labels.clone())
            }
            None => {
                if count > MAX_GENERATED_GROUPS {
                    return Err(StandingsError::config(format!(
                        "Cannot generate labels for {} groups, provide them explicitly",
                        count
                    )));
                }
                Ok((0..count)
                    .map(|i| char::from(b'A' + i as u8).to_string())
                    .collect())
            }
        }
    }

    /// Total points a single team could collect in phase 2, `None` if the
    /// weights do not fit in a `u32`
    pub fn points_in_play(&self) -> Option<u32> {
        self.rules
            .iter()
            .try_fold(0u32, |total, rule| total.checked_add(rule.points))
    }

    /// Validate the rule set
    pub fn validate(&self) -> Result<()> {
        self.group_labels()?;

        if self.rules.is_empty() {
            return Err(StandingsError::config("Scoring rule list cannot be empty"));
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.metric.trim().is_empty() {
                return Err(StandingsError::config("Scoring rule metric cannot be empty"));
            }
            if rule.points == 0 {
                return Err(StandingsError::config(format!(
                    "Scoring rule '{}' must award at least one point",
                    rule.metric
                )));
            }
            if !seen.insert(rule.metric.as_str()) {
                return Err(StandingsError::config(format!(
                    "Duplicate scoring rule for metric '{}'",
                    rule.metric
                )));
            }
        }
        if self.points_in_play().is_none() {
            return Err(StandingsError::config(format!(
                "Scoring rule weights add up to more than {} points",
                u32::MAX
            )));
        }

        let columns = [
            ("name", &self.columns.name),
            ("captain", &self.columns.captain),
            ("seed", &self.columns.seed),
            ("tie_break", &self.columns.tie_break),
            ("final_metric", &self.columns.final_metric),
        ];
        for (role, column) in columns {
            if column.trim().is_empty() {
                return Err(StandingsError::config(format!(
                    "Column name for '{}' cannot be empty",
                    role
                )));
            }
        }

        for bracket in [Bracket::Primary, Bracket::Secondary] {
            let cutoff = self.final_stage.medal_cutoff(bracket);
            if cutoff > MAX_MEDALS {
                return Err(StandingsError::config(format!(
                    "{} bracket declares {} medals, at most {} are supported",
                    bracket, cutoff, MAX_MEDALS
                )));
            }
        }

        Ok(())
    }
}
