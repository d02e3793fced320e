//! Team record store
//!
//! In-memory, ordered table of raw input rows. The store holds no ranking
//! logic: it maps configured column names onto validated [`TeamRecord`]s
//! and reports schema problems. Input order is preserved and becomes each
//! record's [`EntryId`](crate::types::EntryId).

use crate::config::tournament::TournamentConfig;
use crate::error::{Result, StandingsError};
use crate::types::{Cell, Row, TeamId, TeamRecord};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Ordered collection of raw input rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamTable {
    rows: Vec<Row>,
}

impl TeamTable {
    /// Create a table from rows in input order
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Append a row at the end of the table
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract validated records for every row, in input order
    pub fn records(&self, config: &TournamentConfig) -> Result<Vec<TeamRecord>> {
        let records = self
            .rows
            .iter()
            .enumerate()
            .map(|(entry, row)| record_from_row(entry, row, config))
            .collect::<Result<Vec<_>>>()?;

        let duplicates = duplicate_names(&records);
        if !duplicates.is_empty() {
            warn!(
                "Duplicate team names in input, keeping every entry: {:?}",
                duplicates
            );
        }

        debug!("Loaded {} team records", records.len());
        Ok(records)
    }
}

impl From<Vec<Row>> for TeamTable {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Names that appear on more than one record, in first-seen order
pub fn duplicate_names(records: &[TeamRecord]) -> Vec<TeamId> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.name.as_str()).or_default() += 1;
    }

    let mut duplicates: Vec<TeamId> = Vec::new();
    for record in records {
        if counts[record.name.as_str()] > 1 && !duplicates.contains(&record.name) {
            duplicates.push(record.name.clone());
        }
    }
    duplicates
}

fn record_from_row(entry: usize, row: &Row, config: &TournamentConfig) -> Result<TeamRecord> {
    let columns = &config.columns;

    let name = match row.get(&columns.name) {
        Some(cell) => display_text(cell),
        None => {
            return Err(StandingsError::schema(
                &format!("row {}", entry + 1),
                &columns.name,
                "column is missing",
            ))
        }
    };
    let captain = row.get(&columns.captain).map(display_text).unwrap_or_default();

    let seed_metric = numeric_field(row, &name, &columns.seed)?;
    let tie_break_metric = numeric_field(row, &name, &columns.tie_break)?;
    let final_metric = numeric_field(row, &name, &columns.final_metric)?;

    let mut phase_metrics = BTreeMap::new();
    for rule in &config.rules {
        let value = numeric_field(row, &name, &rule.metric)?;
        phase_metrics.insert(rule.metric.clone(), value);
    }

    Ok(TeamRecord {
        entry,
        name,
        captain,
        seed_metric,
        phase_metrics,
        tie_break_metric,
        final_metric,
    })
}

/// Read a numeric column. Blank cells are absent values, not errors.
fn numeric_field(row: &Row, team: &str, column: &str) -> Result<Option<f64>> {
    let cell = row
        .get(column)
        .ok_or_else(|| StandingsError::schema(team, column, "column is missing"))?;

    match cell {
        Cell::Empty => Ok(None),
        Cell::Number(value) if value.is_nan() => Ok(None),
        Cell::Number(value) => Ok(Some(*value)),
        Cell::Text(text) if text.trim().is_empty() => Ok(None),
        Cell::Text(text) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_nan() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(StandingsError::schema(
                team,
                column,
                format!("non-numeric value '{}'", text),
            )),
        },
    }
}

fn display_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Number(value) => crate::utils::format_metric(Some(*value)),
        Cell::Empty => String::new(),
    }
}
