//! CLI module for raceday
//!
//! Provides command-line interface for:
//! - serve: Load configuration and run the HTTP server
//! - simulate: One-shot lap simulation

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, SimulateArgs};
pub use commands::{load_config, run, run_command, serve, simulate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
