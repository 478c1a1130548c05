//! # Simulation Errors

use thiserror::Error;

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Track type is unknown, or the car has no driver to supply a skill
    /// for it. Carries the track type as the caller spelled it.
    #[error("Invalid track type or missing skill/suitability data for track type {0}")]
    InvalidTrackType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_track_type() {
        let err = SimulationError::InvalidTrackType("offroad".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid track type or missing skill/suitability data for track type offroad"
        );
    }
}
