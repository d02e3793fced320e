//! Command line entry point for the tournament standings engine
//!
//! Reads a tournament configuration (TOML) and a snapshot of team rows
//! (JSON), runs the standings pipeline once and prints the result.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use standings::config::AppConfig;
use standings::report::TextReport;
use standings::types::Row;
use standings::{StandingsEngine, TeamTable};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Output format for the computed standings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Tournament Standings - group seeding, winner-take-all scoring and final brackets
#[derive(Parser)]
#[command(
    name = "standings",
    version,
    about = "Compute group standings and final brackets for a sales tournament",
    long_about = "Seeds teams into groups by their phase-1 result, awards winner-take-all \
                 phase-2 points per group, routes each group winner to the Primary bracket \
                 and everybody else to the Secondary bracket, then ranks both finals."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: PathBuf,

    /// Team snapshot path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a JSON array of team rows (column name -> value)"
    )]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without computing standings")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::from_file(&args.config)?;

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    standings::config::validate_config(&config)?;
    Ok(config)
}

/// Read the team snapshot from disk
fn load_table(path: &Path) -> Result<TeamTable> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team snapshot {}", path.display()))?;
    let rows: Vec<Row> = serde_json::from_str(&contents)
        .with_context(|| format!("Team snapshot {} is not a JSON array of rows", path.display()))?;
    Ok(TeamTable::new(rows))
}

/// Display startup banner with tournament information
fn display_startup_banner(config: &AppConfig, engine: &StandingsEngine) {
    let tournament = &config.tournament;
    info!("🏆 {}", config.service.name);
    info!("   Groups: {}", engine.group_labels().join(", "));
    info!(
        "   Rules: {} ({} points in play)",
        tournament.rules.len(),
        tournament.points_in_play().unwrap_or(u32::MAX)
    );
    info!("   Final tie-break: {:?}", tournament.final_stage.tie_break);
    info!(
        "   Pending medals: {:?}",
        tournament.final_stage.pending_medals
    );
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let engine = StandingsEngine::new(config.tournament.clone())?;
    display_startup_banner(config, &engine);

    if args.dry_run {
        info!("Dry run completed - configuration is valid");
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .context("--input is required unless --dry-run is set")?;
    let table = load_table(input)?;
    info!("Loaded {} rows from {}", table.len(), input.display());

    let standings = engine.run(&table)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&standings)?),
        OutputFormat::Text => print!("{}", TextReport::new(&standings)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&args, &config) {
        error!("Failed to compute standings: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
