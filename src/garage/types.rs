//! Garage record types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::simulation::{CarProfile, DriverProfile};

/// A stored driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: u64,
    pub name: String,
    pub number: u32,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub skill_race: i64,
    pub skill_street: i64,
}

impl DriverRecord {
    pub fn profile(&self) -> DriverProfile {
        DriverProfile {
            skill_race: self.skill_race,
            skill_street: self.skill_street,
        }
    }
}

/// Race/street split of a car's aptitude; the two parts sum to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suitability {
    pub race: i64,
    pub street: i64,
}

/// A stored car joined with its driver, if one is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRecord {
    pub id: u64,
    pub driver: Option<DriverRecord>,
    pub suitability: Suitability,
    pub reliability: i64,
}

impl CarRecord {
    pub fn profile(&self) -> CarProfile {
        CarProfile {
            reliability: self.reliability,
            suitability_race: self.suitability.race,
            suitability_street: self.suitability.street,
        }
    }

    pub fn driver_profile(&self) -> Option<DriverProfile> {
        self.driver.as_ref().map(DriverRecord::profile)
    }
}

/// Validated car attributes ready to be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSpec {
    pub suitability: Suitability,
    pub reliability: i64,
}

/// Suitability as submitted by a client, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuitabilityInput {
    #[serde(default)]
    pub race: Option<Value>,
    #[serde(default)]
    pub street: Option<Value>,
}

/// Car attributes as submitted by a client, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarInput {
    #[serde(default)]
    pub suitability: Option<SuitabilityInput>,
    #[serde(default)]
    pub reliability: Option<Value>,
}
