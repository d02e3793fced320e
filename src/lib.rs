//! Tournament Standings - ranking engine for a three-stage sales tournament
//!
//! This crate turns a flat table of per-team metrics into group assignments,
//! winner-take-all phase points, bracket routing and final-stage leaderboards.
//! It is a pure transform: no I/O, no state kept between runs.

pub mod config;
pub mod engine;
pub mod error;
pub mod lookup;
pub mod report;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, StandingsError};
pub use types::*;

// Re-export key components
pub use config::TournamentConfig;
pub use engine::{BracketStanding, Standings, StandingsEngine};
pub use lookup::{ResourceLookup, StaticResourceLookup};
pub use store::TeamTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
