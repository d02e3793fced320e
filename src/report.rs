//! Plain-text rendering of a standings run for the command line

use crate::engine::bracket::BracketStanding;
use crate::engine::pipeline::Standings;
use crate::engine::scorer::AwardOutcome;
use crate::types::{Bracket, Medal};
use crate::utils::format_metric;
use std::fmt;

/// Text report over a finished run
pub struct TextReport<'a> {
    standings: &'a Standings,
}

impl<'a> TextReport<'a> {
    pub fn new(standings: &'a Standings) -> Self {
        Self { standings }
    }

    fn write_seeding(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PHASE 1: DRAW")?;
        for team in self.standings.seeding() {
            writeln!(
                f,
                "  {:>3}. {} ({}) seed {} -> group {}",
                team.seed_rank,
                team.name,
                team.captain,
                format_metric(team.seed_metric),
                team.group_label
            )?;
        }
        Ok(())
    }

    fn write_groups(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PHASE 2: GROUPS")?;
        for group in &self.standings.groups {
            writeln!(f, "  GROUP {}", group.label)?;
            for ranked in &group.standings {
                let record = &ranked.scored.team.record;
                let marker = if ranked.bracket == Bracket::Primary {
                    " *"
                } else {
                    ""
                };
                writeln!(
                    f,
                    "    {}. {} ({}) {} pts{}",
                    ranked.group_position,
                    record.name,
                    record.captain,
                    ranked.scored.phase2_points,
                    marker
                )?;
            }
            let pending: Vec<&str> = group
                .awards
                .iter()
                .filter(|award| award.outcome == AwardOutcome::Pending)
                .map(|award| award.metric.as_str())
                .collect();
            if !pending.is_empty() {
                writeln!(f, "    not played yet: {}", pending.join(", "))?;
            }
        }
        Ok(())
    }

    fn write_bracket(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        standing: &BracketStanding,
    ) -> fmt::Result {
        writeln!(f, "FINAL: {}", title)?;
        match standing.champion() {
            Some(champion) => writeln!(
                f,
                "  Champion: {} ({}) {}",
                champion.name,
                champion.captain,
                format_metric(champion.final_metric)
            )?,
            None => writeln!(f, "  Waiting for results...")?,
        }
        for entry in &standing.entries {
            let medal = match entry.medal {
                Some(Medal::Gold) => " [gold]",
                Some(Medal::Silver) => " [silver]",
                Some(Medal::Bronze) => " [bronze]",
                None => "",
            };
            writeln!(
                f,
                "  {:>3}. {} ({}) {}{}{}",
                entry.rank,
                entry.name,
                entry.captain,
                format_metric(entry.final_metric),
                if entry.pending { " (pending)" } else { "" },
                medal
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_seeding(f)?;
        writeln!(f)?;
        self.write_groups(f)?;
        writeln!(f)?;
        self.write_bracket(f, "PRIMARY", &self.standings.primary)?;
        writeln!(f)?;
        match &self.standings.secondary {
            Some(secondary) => self.write_bracket(f, "SECONDARY", secondary),
            None => {
                writeln!(f, "FINAL: SECONDARY")?;
                writeln!(f, "  No teams in this bracket")
            }
        }
    }
}
