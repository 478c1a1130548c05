//! # Response Formatting
//!
//! Success bodies are wrapped as `{ "code": 200, "result": ... }`.

use axum::http::StatusCode;
use serde::Serialize;

use crate::garage::{CarRecord, DriverRecord, Suitability};

/// Success envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            result,
        }
    }
}

/// Reference to a car's driver
#[derive(Debug, Clone, Serialize)]
pub struct DriverLink {
    pub name: String,
    pub uri: String,
}

impl DriverLink {
    pub fn new(driver: &DriverRecord, uri_base: &str) -> Self {
        Self {
            name: driver.name.clone(),
            uri: format!("{}/{}", uri_base.trim_end_matches('/'), driver.id),
        }
    }
}

/// A car as returned by the API
///
/// Listings carry a numeric id, single-car lookups a string id.
#[derive(Debug, Clone, Serialize)]
pub struct CarView<I: Serialize> {
    pub id: I,
    pub driver: Option<DriverLink>,
    pub suitability: Suitability,
    pub reliability: i64,
}

impl CarView<u64> {
    pub fn listed(car: &CarRecord, uri_base: &str) -> Self {
        Self {
            id: car.id,
            driver: car.driver.as_ref().map(|d| DriverLink::new(d, uri_base)),
            suitability: car.suitability,
            reliability: car.reliability,
        }
    }
}

impl CarView<String> {
    pub fn detailed(car: &CarRecord, uri_base: &str) -> Self {
        Self {
            id: car.id.to_string(),
            driver: car.driver.as_ref().map(|d| DriverLink::new(d, uri_base)),
            suitability: car.suitability,
            reliability: car.reliability,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillView {
    pub street: i64,
    pub race: i64,
}

/// The driver assigned to a car
#[derive(Debug, Clone, Serialize)]
pub struct DriverView {
    pub name: String,
    pub number: u32,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub skill: SkillView,
}

impl From<&DriverRecord> for DriverView {
    fn from(driver: &DriverRecord) -> Self {
        Self {
            name: driver.name.clone(),
            number: driver.number,
            short_name: driver.short_name.clone(),
            skill: SkillView {
                street: driver.skill_street,
                race: driver.skill_race,
            },
        }
    }
}
