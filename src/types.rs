//! Common types used throughout the standings engine

use crate::error::{Result, StandingsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display identifier of a team; not guaranteed unique
pub type TeamId = String;

/// 0-based position of a team in the input snapshot. This is the identity
/// the engine uses, so duplicate team names survive every stage.
pub type EntryId = usize;

/// Label of a phase-2 group (e.g. "A")
pub type GroupLabel = String;

/// Raw value of one input cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// One input row: column name to cell
pub type Row = BTreeMap<String, Cell>;

/// One of the two final-stage pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bracket {
    /// Group winners (the World Cup final)
    Primary,
    /// Everybody else (the Confederations final)
    Secondary,
}

impl Bracket {
    /// Route a team by its 1-based position inside its group
    pub fn for_group_position(position: usize) -> Self {
        if position == 1 {
            Bracket::Primary
        } else {
            Bracket::Secondary
        }
    }
}

impl std::fmt::Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bracket::Primary => write!(f, "Primary"),
            Bracket::Secondary => write!(f, "Secondary"),
        }
    }
}

/// Positional medal label over a bracket leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank, if any
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medal::Gold => write!(f, "Gold"),
            Medal::Silver => write!(f, "Silver"),
            Medal::Bronze => write!(f, "Bronze"),
        }
    }
}

/// Validated team record extracted from one input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub entry: EntryId,
    pub name: TeamId,
    /// Carried through unchanged, no effect on ranking
    pub captain: String,
    /// Phase-1 result, used only for group seeding
    pub seed_metric: Option<f64>,
    /// Phase-2 KPI per scored campaign; `None` means the cell was blank
    pub phase_metrics: BTreeMap<String, Option<f64>>,
    /// Breaks phase-2 point ties
    pub tie_break_metric: Option<f64>,
    /// Phase-3 KPI used inside the final bracket
    pub final_metric: Option<f64>,
}

impl TeamRecord {
    /// Value of a phase-2 metric. A metric that was never loaded for this
    /// record is a schema error; a blank value is `Ok(None)`.
    pub fn phase_metric(&self, metric: &str) -> Result<Option<f64>> {
        self.phase_metrics
            .get(metric)
            .copied()
            .ok_or_else(|| StandingsError::schema(&self.name, metric, "metric not present on record"))
    }

    /// Whether the final-stage metric holds a real result (present and > 0)
    pub fn has_final_result(&self) -> bool {
        matches!(self.final_metric, Some(value) if value > 0.0)
    }
}
