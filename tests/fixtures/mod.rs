//! Test fixtures: row builders and the 12-team World Cup snapshot
//!
//! Hand-computed expectations for the snapshot (team numbers, entry = number - 1):
//!
//! - Groups: A = [1, 2, 4], B = [6, 11, 7], C = [3, 5, 12], D = [9, 8, 10]
//! - Points: A 3/10/2, B 6/6/3 (11 wins on tie-break), C 5/5/0 (3 wins on seed), D 0/0/14
//! - Primary: Equipo 2, 11, 3, 10. Secondary: everybody else.

#![allow(dead_code)]

use standings::config::{FinalTieBreak, PendingMedalPolicy, TournamentConfig};
use standings::types::{Cell, Row};
use standings::TeamTable;

pub const WORKOUT: &str = "F2_Workout_Week_Score";
pub const SALES_BATTLE: &str = "F2_Sales_Battle_2_Score";
pub const CUSTOMER_MONTH: &str = "F2_Customer_Month_Score";
pub const BUYING_CUSTOMERS: &str = "F2_Clientes_Compradores_Score";

/// Phase-2 KPI values in rule order: workout, sales battle, customer month, buying customers
pub type Kpis = [f64; 4];

/// Build one input row with the default column names
pub fn team_row(
    name: &str,
    captain: &str,
    seed: f64,
    kpis: Kpis,
    tie_break: f64,
    final_metric: Option<f64>,
) -> Row {
    Row::from([
        ("Equipo".to_string(), Cell::from(name)),
        ("Capitan".to_string(), Cell::from(captain)),
        ("F1_Venta_23_Ene_Porcentaje".to_string(), Cell::Number(seed)),
        (WORKOUT.to_string(), Cell::Number(kpis[0])),
        (SALES_BATTLE.to_string(), Cell::Number(kpis[1])),
        (CUSTOMER_MONTH.to_string(), Cell::Number(kpis[2])),
        (BUYING_CUSTOMERS.to_string(), Cell::Number(kpis[3])),
        (
            "F2_TieBreak_Nuevos_Clientes".to_string(),
            Cell::Number(tie_break),
        ),
        (
            "F3_Pedidos_Por_Dia".to_string(),
            final_metric.map(Cell::Number).unwrap_or(Cell::Empty),
        ),
    ])
}

/// World Cup rules with an explicit final-stage policy
pub fn world_cup_config(tie_break: FinalTieBreak) -> TournamentConfig {
    TournamentConfig::world_cup_2026(tie_break, PendingMedalPolicy::Withhold)
}

/// (seed, kpis, tie_break) for Equipo 1..=12
const TEAMS: [(f64, Kpis, f64); 12] = [
    (0.95, [10.0, 5.0, 0.0, 2.0], 1.0),
    (0.80, [10.0, 7.0, 0.0, 4.0], 6.0),
    (0.88, [0.0, 0.0, 0.0, 3.0], 2.0),
    (0.60, [8.0, 7.0, 0.0, 1.0], 2.0),
    (0.72, [0.0, 0.0, 0.0, 3.0], 2.0),
    (0.91, [5.0, 3.0, 9.0, 0.0], 7.0),
    (0.55, [6.0, 1.0, 2.0, 0.0], 1.0),
    (0.67, [0.0, 0.0, 0.0, 0.0], 5.0),
    (0.83, [1.0, 1.0, 1.0, 1.0], 3.0),
    (0.40, [9.0, 9.0, 9.0, 9.0], 0.0),
    (0.77, [4.0, 3.0, 9.0, 0.0], 9.0),
    (0.50, [0.0, 0.0, 0.0, 0.0], 0.0),
];

/// Final-stage results once the finals have been played
const FINALS: [Option<f64>; 12] = [
    Some(20.0),
    Some(12.0),
    Some(15.0),
    Some(0.0),
    Some(18.0),
    Some(18.0),
    None,
    Some(7.0),
    Some(0.0),
    Some(9.0),
    Some(15.0),
    Some(5.0),
];

fn snapshot(finals: impl Fn(usize) -> Option<f64>) -> TeamTable {
    TEAMS
        .iter()
        .enumerate()
        .map(|(i, (seed, kpis, tie_break))| {
            team_row(
                &format!("Equipo {}", i + 1),
                &format!("Capitán {}", i + 1),
                *seed,
                *kpis,
                *tie_break,
                finals(i),
            )
        })
        .collect::<Vec<_>>()
        .into()
}

/// Snapshot taken after the group phase, before any final was played
pub fn world_cup_before_finals() -> TeamTable {
    snapshot(|i| if i % 2 == 0 { Some(0.0) } else { None })
}

/// Snapshot with final-stage results
pub fn world_cup_after_finals() -> TeamTable {
    snapshot(|i| FINALS[i])
}
