//! CLI errors
//!
//! Each error carries a stable machine code that `simulate` echoes in its
//! JSON error line; `main` prints the rendered form and exits 1.

use std::io;

use thiserror::Error;

use crate::garage::ValidationError;
use crate::simulation::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Config file unreadable or rejected
    ConfigError,
    /// Writing to stdout failed
    IoError,
    /// Lap attributes rejected
    InvalidInput,
    /// Store, runtime or listener could not start
    BootFailed,
}

impl CliErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigError => "RACEDAY_CLI_CONFIG_ERROR",
            Self::IoError => "RACEDAY_CLI_IO_ERROR",
            Self::InvalidInput => "RACEDAY_CLI_INVALID_INPUT",
            Self::BootFailed => "RACEDAY_CLI_BOOT_FAILED",
        }
    }
}

#[derive(Debug, Error)]
#[error("{}: {message}", .code.as_str())]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(CliErrorCode::IoError, format!("JSON error: {}", e))
    }
}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        Self::invalid_input(e.to_string())
    }
}

impl From<SimulationError> for CliError {
    fn from(e: SimulationError) -> Self {
        Self::invalid_input(e.to_string())
    }
}
