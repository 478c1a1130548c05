//! CLI command implementations

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::garage::{check_reliability, check_suitability};
use crate::http_server::{AppState, HttpServer, HttpServerConfig};
use crate::simulation::{
    CarProfile, DriverProfile, LapRequest, LapResult, LapSimulator, RandomSource, SeededRandom,
    ThreadRandom, TrackType,
};

use super::args::{Command, SimulateArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, seed } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(port) = port {
                config.port = port;
            }
            if seed.is_some() {
                config.random_seed = seed;
            }
            serve(config)
        }
        Command::Simulate(args) => match simulate(&args) {
            Ok(result) => write_response(&result),
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                Err(e)
            }
        },
    }
}

/// Load server configuration, falling back to defaults without a path
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

            serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?
        }
        None => HttpServerConfig::default(),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &HttpServerConfig) -> CliResult<()> {
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }

    if config.driver_uri_base.trim().is_empty() {
        return Err(CliError::config_error("driver_uri_base must not be empty"));
    }

    if let Err(e) = EnvFilter::try_new(&config.log_level) {
        return Err(CliError::config_error(format!(
            "Invalid log_level '{}': {}",
            config.log_level, e
        )));
    }

    Ok(())
}

/// RUST_LOG wins over the configured level
fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server
///
/// 1. Initialise logging
/// 2. Build the store (seeded if configured) and the simulator
/// 3. Run the Axum server on a fresh tokio runtime
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_logging(&config.log_level);

    let state = AppState::from_config(&config)
        .map_err(|e| CliError::boot_failed(format!("Failed to build store: {}", e)))?;
    let server = HttpServer::new(config, state);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Simulate one lap from command-line attributes
pub fn simulate(args: &SimulateArgs) -> CliResult<LapResult> {
    let track_type = args.track_type.parse::<TrackType>()?;

    if !args.base_lap_time.is_finite() {
        return Err(CliError::invalid_input("base lap time must be a finite number"));
    }

    let suitability = check_suitability(args.suitability_race, args.suitability_street)?;
    let reliability = check_reliability(args.reliability)?;

    let car = CarProfile {
        reliability,
        suitability_race: suitability.race,
        suitability_street: suitability.street,
    };
    let driver = match (args.skill_race, args.skill_street) {
        (Some(skill_race), Some(skill_street)) => Some(DriverProfile {
            skill_race,
            skill_street,
        }),
        _ => None,
    };

    let random: Arc<dyn RandomSource> = match args.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };
    let request = LapRequest {
        track_type,
        base_lap_time: args.base_lap_time,
    };

    let result = LapSimulator::new(random).simulate(&car, driver.as_ref(), &request)?;
    Ok(result)
}
