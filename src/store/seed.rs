//! Seed data for the in-memory store
//!
//! ```json
//! {
//!   "drivers": [{"id": 1, "name": "Lewis Hamilton", "number": 44, "shortName": "HAM",
//!                "skill_race": 60, "skill_street": 40}],
//!   "cars": [{"id": 1, "driver_id": 1, "suitability_race": 55,
//!             "suitability_street": 45, "reliability": 80}]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::garage::DriverRecord;

use super::errors::{StoreError, StoreResult};

/// A car as stored, with the driver referenced by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRow {
    pub id: u64,
    #[serde(default)]
    pub driver_id: Option<u64>,
    pub suitability_race: i64,
    pub suitability_street: i64,
    pub reliability: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub drivers: Vec<DriverRecord>,
    #[serde(default)]
    pub cars: Vec<CarRow>,
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::Seed(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| StoreError::Seed(format!("Invalid seed JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"drivers": [{{"id": 7, "name": "Ada", "number": 3, "shortName": "ADA",
                "skill_race": 50, "skill_street": 50}}],
               "cars": [{{"id": 1, "suitability_race": 60, "suitability_street": 40,
                "reliability": 90}}]}}"#
        )
        .unwrap();

        let seed = SeedData::load(file.path()).unwrap();
        assert_eq!(seed.drivers[0].short_name, "ADA");
        assert_eq!(seed.cars[0].driver_id, None);
    }

    #[test]
    fn test_missing_seed_file() {
        let err = SeedData::load(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }
}
