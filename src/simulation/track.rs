//! Track types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SimulationError;

/// Kind of track a lap is driven on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Race,
    Street,
}

impl TrackType {
    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Race => "race",
            TrackType::Street => "street",
        }
    }

    /// Amount added to reliability to form the crash roll's upper bound
    pub fn crash_margin(&self) -> i64 {
        match self {
            TrackType::Race => 5,
            TrackType::Street => 10,
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrackType {
    type Err = SimulationError;

    /// Exact, case-sensitive match on "race" or "street"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "race" => Ok(TrackType::Race),
            "street" => Ok(TrackType::Street),
            other => Err(SimulationError::InvalidTrackType(other.to_string())),
        }
    }
}
