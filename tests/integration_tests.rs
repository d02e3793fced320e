//! Integration tests for the standings engine
//!
//! These tests run the complete pipeline over realistic snapshots:
//! - Group seeding and winner-take-all scoring for the World Cup rules
//! - Bracket routing and final leaderboards, before and after the finals
//! - Configured final-stage tie-breaks
//! - Determinism, duplicate names and schema failures
//! - Loading the shipped demo configuration

mod fixtures;

use standings::config::{AppConfig, FinalTieBreak, PendingMedalPolicy};
use standings::engine::AwardOutcome;
use standings::lookup::{resolve_resources, StaticResourceLookup};
use standings::report::TextReport;
use standings::types::{Bracket, Cell, Medal, Row};
use standings::{StandingsEngine, StandingsError, TeamTable};
use std::path::PathBuf;

use fixtures::{team_row, world_cup_after_finals, world_cup_before_finals, world_cup_config};

fn engine(tie_break: FinalTieBreak) -> StandingsEngine {
    StandingsEngine::new(world_cup_config(tie_break)).unwrap()
}

fn names(entries: impl IntoIterator<Item = usize>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| format!("Equipo {}", entry + 1))
        .collect()
}

#[test]
fn test_world_cup_group_assignment() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_before_finals())
        .unwrap();

    let members = |label: &str| -> Vec<String> {
        let group = standings.groups.iter().find(|g| g.label == label).unwrap();
        let mut entries: Vec<usize> = group
            .standings
            .iter()
            .map(|team| team.scored.team.record.entry)
            .collect();
        entries.sort();
        names(entries)
    };

    assert_eq!(members("A"), names([0, 1, 3]));
    assert_eq!(members("B"), names([5, 6, 10]));
    assert_eq!(members("C"), names([2, 4, 11]));
    assert_eq!(members("D"), names([7, 8, 9]));

    let seeding: Vec<String> = standings
        .seeding()
        .iter()
        .map(|team| team.name.clone())
        .collect();
    assert_eq!(seeding, names([0, 5, 2, 8, 1, 10, 4, 7, 3, 6, 11, 9]));
}

#[test]
fn test_world_cup_group_points_and_positions() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_before_finals())
        .unwrap();

    let points: Vec<u32> = standings.teams.iter().map(|t| t.phase2_points).collect();
    assert_eq!(points, vec![3, 10, 5, 2, 5, 6, 3, 0, 0, 14, 6, 0]);

    let positions: Vec<usize> = standings.teams.iter().map(|t| t.group_position).collect();
    assert_eq!(positions, vec![2, 1, 1, 3, 2, 2, 3, 2, 3, 1, 1, 3]);

    let group_b = &standings.groups[1];
    assert_eq!(group_b.label, "B");
    assert_eq!(group_b.winner().unwrap().scored.team.record.name, "Equipo 11");

    let pending: usize = standings
        .groups
        .iter()
        .flat_map(|group| group.awards.iter())
        .filter(|award| award.outcome == AwardOutcome::Pending)
        .count();
    assert_eq!(pending, 5);

    let team_two = standings.team(1).unwrap();
    assert_eq!(
        team_two.won_metrics,
        vec![
            fixtures::WORKOUT,
            fixtures::SALES_BATTLE,
            fixtures::BUYING_CUSTOMERS
        ]
    );
}

#[test]
fn test_world_cup_bracket_routing() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_before_finals())
        .unwrap();

    let primary: Vec<String> = standings
        .teams
        .iter()
        .filter(|team| team.bracket == Bracket::Primary)
        .map(|team| team.name.clone())
        .collect();
    assert_eq!(primary, names([1, 2, 9, 10]));
    assert_eq!(standings.primary.entries.len(), 4);
    assert_eq!(standings.secondary.as_ref().unwrap().entries.len(), 8);
}

#[test]
fn test_before_finals_nothing_is_declared() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_before_finals())
        .unwrap();

    for bracket in [Bracket::Primary, Bracket::Secondary] {
        let standing = standings.bracket(bracket).unwrap();
        assert!(!standing.entries.is_empty());
        assert!(!standing.champion_declared);
        assert!(standing.champion().is_none());
        assert!(standing.medalists().is_empty());
        assert!(standing.entries.iter().all(|entry| entry.pending));
    }

    let primary: Vec<usize> = standings.primary.entries.iter().map(|e| e.entry).collect();
    assert_eq!(primary, vec![10, 2, 1, 9]);
}

#[test]
fn test_after_finals_with_tie_break_metric() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_after_finals())
        .unwrap();

    let primary: Vec<usize> = standings.primary.entries.iter().map(|e| e.entry).collect();
    assert_eq!(primary, vec![10, 2, 1, 9]);
    let champion = standings.primary.champion().unwrap();
    assert_eq!(champion.name, "Equipo 11");
    assert_eq!(champion.medal, Some(Medal::Gold));
    assert_eq!(standings.primary.medalists().len(), 1);

    let secondary = standings.secondary.as_ref().unwrap();
    let order: Vec<usize> = secondary.entries.iter().map(|e| e.entry).collect();
    assert_eq!(order, vec![0, 5, 4, 7, 11, 8, 3, 6]);
    let medals: Vec<(String, Medal)> = secondary
        .medalists()
        .iter()
        .map(|entry| (entry.name.clone(), entry.medal.unwrap()))
        .collect();
    assert_eq!(
        medals,
        vec![
            ("Equipo 1".to_string(), Medal::Gold),
            ("Equipo 6".to_string(), Medal::Silver),
            ("Equipo 5".to_string(), Medal::Bronze),
        ]
    );
    assert!(secondary.entries[5].pending);
    assert_eq!(secondary.entries[7].final_metric, None);
}

#[test]
fn test_after_finals_with_seed_tie_break() {
    let standings = engine(FinalTieBreak::SeedMetric)
        .run(&world_cup_after_finals())
        .unwrap();

    assert_eq!(standings.primary.champion().unwrap().name, "Equipo 3");
}

#[test]
fn test_after_finals_with_input_order() {
    let standings = engine(FinalTieBreak::InputOrder)
        .run(&world_cup_after_finals())
        .unwrap();

    // Bracket order is group order: B's winner (Equipo 11) precedes C's (Equipo 3)
    assert_eq!(standings.primary.champion().unwrap().name, "Equipo 11");
}

#[test]
fn test_runs_are_identical() {
    let engine = engine(FinalTieBreak::TieBreakMetric);
    let table = world_cup_after_finals();

    let first = serde_json::to_string(&engine.run(&table).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.run(&table).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_duplicate_names_survive() {
    let mut rows: Vec<Row> = world_cup_after_finals().rows().to_vec();
    rows[11].insert("Equipo".to_string(), Cell::from("Equipo 1"));

    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&TeamTable::new(rows))
        .unwrap();

    assert_eq!(standings.teams.len(), 12);
    let copies = standings
        .teams
        .iter()
        .filter(|team| team.name == "Equipo 1")
        .count();
    assert_eq!(copies, 2);
    assert_ne!(standings.teams[0].group_label, standings.teams[11].group_label);
}

#[test]
fn test_missing_metric_column_aborts_run() {
    let mut rows: Vec<Row> = world_cup_after_finals().rows().to_vec();
    rows[4].remove(fixtures::CUSTOMER_MONTH);

    let err = engine(FinalTieBreak::TieBreakMetric)
        .run(&TeamTable::new(rows))
        .unwrap_err();

    assert_eq!(
        err,
        StandingsError::SchemaError {
            team: "Equipo 5".to_string(),
            field: fixtures::CUSTOMER_MONTH.to_string(),
            reason: "column is missing".to_string(),
        }
    );
}

#[test]
fn test_non_numeric_final_metric_aborts_run() {
    let mut rows: Vec<Row> = world_cup_after_finals().rows().to_vec();
    rows[0].insert("F3_Pedidos_Por_Dia".to_string(), Cell::from("soon"));

    let err = engine(FinalTieBreak::TieBreakMetric)
        .run(&TeamTable::new(rows))
        .unwrap_err();

    assert!(matches!(err, StandingsError::SchemaError { ref field, .. } if field == "F3_Pedidos_Por_Dia"));
}

#[test]
fn test_small_field_without_secondary_bracket() {
    let table = TeamTable::new(
        (0..4)
            .map(|i| {
                team_row(
                    &format!("Equipo {}", i + 1),
                    "",
                    i as f64,
                    [1.0, 1.0, 1.0, 1.0],
                    0.0,
                    Some(i as f64 * 2.0),
                )
            })
            .collect(),
    );

    let standings = engine(FinalTieBreak::TieBreakMetric).run(&table).unwrap();

    assert!(standings.secondary.is_none());
    assert_eq!(standings.groups.len(), 4);
    assert!(standings.teams.iter().all(|team| team.bracket == Bracket::Primary));
    let primary: Vec<usize> = standings.primary.entries.iter().map(|e| e.entry).collect();
    assert_eq!(primary, vec![3, 2, 1, 0]);
    assert_eq!(standings.primary.champion().unwrap().name, "Equipo 4");
}

#[test]
fn test_empty_snapshot_is_insufficient_data() {
    let err = engine(FinalTieBreak::TieBreakMetric)
        .run(&TeamTable::default())
        .unwrap_err();

    assert_eq!(
        err,
        StandingsError::InsufficientDataError {
            bracket: Bracket::Primary
        }
    );
}

#[test]
fn test_resource_lookup_at_the_boundary() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_after_finals())
        .unwrap();
    let lookup: StaticResourceLookup = [("equipo_11", "logos/equipo-11.png")]
        .into_iter()
        .collect();

    let resolved = resolve_resources(&standings.primary, &lookup);

    assert_eq!(resolved[0].0.name, "Equipo 11");
    assert_eq!(resolved[0].1.as_ref().unwrap().as_str(), "logos/equipo-11.png");
    assert!(resolved[1..].iter().all(|(_, handle)| handle.is_none()));
}

#[test]
fn test_text_report_for_world_cup() {
    let standings = engine(FinalTieBreak::TieBreakMetric)
        .run(&world_cup_after_finals())
        .unwrap();

    let text = TextReport::new(&standings).to_string();

    assert!(text.contains("Champion: Equipo 11 (Capitán 11) 15"));
    assert!(text.contains("Equipo 1 (Capitán 1) 20 [gold]"));
    assert!(text.contains("GROUP D"));
}

#[test]
fn test_demo_configuration_loads() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/world_cup_2026.toml");

    let config = AppConfig::from_file(&path).unwrap();

    assert_eq!(
        config.tournament,
        standings::TournamentConfig::world_cup_2026(
            FinalTieBreak::TieBreakMetric,
            PendingMedalPolicy::Withhold
        )
    );
}

#[test]
fn test_demo_snapshot_runs() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config = AppConfig::from_file(&root.join("demos/world_cup_2026.toml")).unwrap();
    let contents = std::fs::read_to_string(root.join("demos/teams.json")).unwrap();
    let rows: Vec<Row> = serde_json::from_str(&contents).unwrap();

    let standings = StandingsEngine::new(config.tournament)
        .unwrap()
        .run(&TeamTable::new(rows))
        .unwrap();

    assert_eq!(standings.teams.len(), 12);
    assert_eq!(standings.primary.entries.len(), 4);
}
