//! Performance benchmarks for the standings pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use standings::config::{FinalTieBreak, PendingMedalPolicy, TournamentConfig};
use standings::types::{Cell, Row};
use standings::{StandingsEngine, TeamTable};

fn create_bench_table(config: &TournamentConfig, teams: usize) -> TeamTable {
    let columns = &config.columns;
    let rows: Vec<Row> = (0..teams)
        .map(|i| {
            let mut row = Row::new();
            row.insert(columns.name.clone(), Cell::Text(format!("Equipo {}", i + 1)));
            row.insert(columns.captain.clone(), Cell::Text(format!("Capitán {}", i + 1)));
            row.insert(columns.seed.clone(), Cell::Number(((i * 37) % 100) as f64 / 100.0));
            row.insert(columns.tie_break.clone(), Cell::Number((i % 9) as f64));
            row.insert(columns.final_metric.clone(), Cell::Number((i % 13) as f64));
            for (r, rule) in config.rules.iter().enumerate() {
                row.insert(rule.metric.clone(), Cell::Number(((i + r) % 5) as f64));
            }
            row
        })
        .collect();
    TeamTable::new(rows)
}

fn bench_full_pipeline(c: &mut Criterion) {
    let config =
        TournamentConfig::world_cup_2026(FinalTieBreak::TieBreakMetric, PendingMedalPolicy::Withhold);
    let engine = StandingsEngine::new(config.clone()).unwrap();

    let mut group = c.benchmark_group("full_pipeline");
    for teams in [12usize, 48, 200] {
        let table = create_bench_table(&config, teams);
        group.bench_with_input(BenchmarkId::from_parameter(teams), &table, |b, table| {
            b.iter(|| engine.run(black_box(table)).unwrap())
        });
    }
    group.finish();
}

fn bench_group_phase(c: &mut Criterion) {
    let config =
        TournamentConfig::world_cup_2026(FinalTieBreak::TieBreakMetric, PendingMedalPolicy::Withhold);
    let engine = StandingsEngine::new(config.clone()).unwrap();
    let records = create_bench_table(&config, 200).records(&config).unwrap();

    c.bench_function("assign_and_rank_200", |b| {
        b.iter(|| {
            let assignment = engine.assign(black_box(&records)).unwrap();
            engine.rank(&assignment).unwrap()
        })
    });
}

criterion_group!(benches, bench_full_pipeline, bench_group_phase);
criterion_main!(benches);
