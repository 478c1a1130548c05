//! # Validation Errors
//!
//! Messages are returned to API clients verbatim.

use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Race suitability is required.")]
    MissingRace,

    #[error("Street suitability is required.")]
    MissingStreet,

    #[error("Reliability is required.")]
    MissingReliability,

    #[error("Race and street of suitability must be valid numbers")]
    SuitabilityNotNumeric,

    #[error("The sum of Race and Street must be 100")]
    SuitabilitySum,

    #[error("Reliability must be between 0 and 100")]
    ReliabilityRange,
}
