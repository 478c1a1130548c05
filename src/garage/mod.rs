//! # Garage
//!
//! Car and driver records as the API exposes them, plus the write-time
//! checks that keep suitability and reliability within bounds.

pub mod errors;
pub mod types;
pub mod validation;

pub use errors::{ValidationError, ValidationResult};
pub use types::{CarInput, CarRecord, CarSpec, DriverRecord, Suitability, SuitabilityInput};
pub use validation::{
    check_reliability, check_suitability, parse_score, require_params, validate_car_input,
    validate_reliability, validate_suitability,
};
