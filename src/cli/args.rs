//! CLI argument definitions using clap
//!
//! Commands:
//! - raceday serve [--config <path>] [--port <port>] [--seed <seed>]
//! - raceday simulate --reliability .. --track-type .. --base-lap-time ..

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// raceday - cars, drivers and lap simulation over HTTP
#[derive(Parser, Debug)]
#[command(name = "raceday")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Seed for lap simulation draws, overriding the config file
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate a single lap and print the result as JSON
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Car reliability, 0 to 100
    #[arg(long)]
    pub reliability: i64,

    #[arg(long)]
    pub suitability_race: i64,

    #[arg(long)]
    pub suitability_street: i64,

    /// Driver race skill; omit both skills for a car without a driver
    #[arg(long, requires = "skill_street")]
    pub skill_race: Option<i64>,

    #[arg(long, requires = "skill_race")]
    pub skill_street: Option<i64>,

    /// "race" or "street"
    #[arg(long)]
    pub track_type: String,

    /// Base lap time in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub base_lap_time: f64,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
