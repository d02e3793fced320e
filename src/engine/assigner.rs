//! Group assigner
//!
//! Seeds teams by their phase-1 result and deals them round-robin into the
//! configured groups, so top seeds are spread across groups and group sizes
//! never differ by more than one.

use crate::error::{Result, StandingsError};
use crate::types::{GroupLabel, TeamRecord};
use crate::utils::cmp_desc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A team placed in a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeededTeam {
    pub record: TeamRecord,
    /// 0-based position of the record in the input table
    pub input_position: usize,
    /// 1-based position in the seeding order
    pub seed_rank: usize,
    pub group_label: GroupLabel,
}

/// Members of one group, in seeding order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub label: GroupLabel,
    pub teams: Vec<SeededTeam>,
}

/// Output of the group assigner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupAssignment {
    /// Groups in label order; empty when there were no teams
    pub groups: Vec<Group>,
}

impl GroupAssignment {
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|group| group.teams.len()).sum()
    }

    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Every seeded team, ordered by seed rank
    pub fn seeding(&self) -> Vec<&SeededTeam> {
        let mut teams: Vec<&SeededTeam> =
            self.groups.iter().flat_map(|group| group.teams.iter()).collect();
        teams.sort_by_key(|team| team.seed_rank);
        teams
    }
}

/// Assign every record to exactly one group.
///
/// Records are ordered by `seed_metric` descending with a stable sort, so
/// equal seeds keep input order and absent seeds go last. The team at sorted
/// position `i` lands in group `i mod G`.
pub fn assign_groups(records: &[TeamRecord], labels: &[GroupLabel]) -> Result<GroupAssignment> {
    if labels.is_empty() {
        return Err(StandingsError::config("At least one group label is required"));
    }

    if records.is_empty() {
        info!("No teams to assign, nothing to render");
        return Ok(GroupAssignment::default());
    }

    let mut seeded: Vec<(usize, &TeamRecord)> = records.iter().enumerate().collect();
    seeded.sort_by(|(_, a), (_, b)| cmp_desc(a.seed_metric, b.seed_metric));

    let mut groups: Vec<Group> = labels
        .iter()
        .map(|label| Group {
            label: label.clone(),
            teams: Vec::new(),
        })
        .collect();

    for (position, (input_position, record)) in seeded.into_iter().enumerate() {
        let group = &mut groups[position % labels.len()];
        debug!(
            "Seed {} '{}' -> group {}",
            position + 1,
            record.name,
            group.label
        );
        group.teams.push(SeededTeam {
            record: record.clone(),
            input_position,
            seed_rank: position + 1,
            group_label: group.label.clone(),
        });
    }

    info!(
        "Assigned {} teams to {} groups",
        records.len(),
        groups.len()
    );
    Ok(GroupAssignment { groups })
}
