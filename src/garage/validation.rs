//! # Write Validation
//!
//! Checks run in a fixed order: presence, then suitability, then
//! reliability. The first failure wins.

use serde_json::Value;

use super::errors::{ValidationError, ValidationResult};
use super::types::{CarInput, CarSpec, Suitability};

/// Read an integer score from a JSON number or an integer string.
///
/// Fractional numbers are truncated toward zero.
pub fn parse_score(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Every field must be present; returns them unwrapped
pub fn require_params<'a>(
    race: Option<&'a Value>,
    street: Option<&'a Value>,
    reliability: Option<&'a Value>,
) -> ValidationResult<(&'a Value, &'a Value, &'a Value)> {
    let race = race.ok_or(ValidationError::MissingRace)?;
    let street = street.ok_or(ValidationError::MissingStreet)?;
    let reliability = reliability.ok_or(ValidationError::MissingReliability)?;
    Ok((race, street, reliability))
}

pub fn validate_suitability(race: &Value, street: &Value) -> ValidationResult<Suitability> {
    match (parse_score(race), parse_score(street)) {
        (Some(race), Some(street)) => check_suitability(race, street),
        _ => Err(ValidationError::SuitabilityNotNumeric),
    }
}

/// Sum rule on already-parsed scores; an overflowing sum is not 100
pub fn check_suitability(race: i64, street: i64) -> ValidationResult<Suitability> {
    match race.checked_add(street) {
        Some(100) => Ok(Suitability { race, street }),
        _ => Err(ValidationError::SuitabilitySum),
    }
}

pub fn validate_reliability(value: &Value) -> ValidationResult<i64> {
    parse_score(value)
        .ok_or(ValidationError::ReliabilityRange)
        .and_then(check_reliability)
}

pub fn check_reliability(reliability: i64) -> ValidationResult<i64> {
    if (0..=100).contains(&reliability) {
        Ok(reliability)
    } else {
        Err(ValidationError::ReliabilityRange)
    }
}

/// Run every check on a submitted car
pub fn validate_car_input(input: &CarInput) -> ValidationResult<CarSpec> {
    let race = input.suitability.as_ref().and_then(|s| s.race.as_ref());
    let street = input.suitability.as_ref().and_then(|s| s.street.as_ref());
    let reliability = input.reliability.as_ref();

    let (race, street, reliability) = require_params(race, street, reliability)?;
    let suitability = validate_suitability(race, street)?;
    let reliability = validate_reliability(reliability)?;

    Ok(CarSpec {
        suitability,
        reliability,
    })
}
