//! # Lap Simulator

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{SimulationError, SimulationResult};
use super::random::{RandomSource, ThreadRandom};
use super::track::TrackType;

/// Upper bound (exclusive) of the jitter added to a completed lap
pub const MAX_LAP_JITTER: f64 = 5.0;

/// Car attributes the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarProfile {
    pub reliability: i64,
    pub suitability_race: i64,
    pub suitability_street: i64,
}

impl CarProfile {
    pub fn suitability(&self, track: TrackType) -> i64 {
        match track {
            TrackType::Race => self.suitability_race,
            TrackType::Street => self.suitability_street,
        }
    }
}

/// Driver attributes the simulation reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    pub skill_race: i64,
    pub skill_street: i64,
}

impl DriverProfile {
    pub fn skill(&self, track: TrackType) -> i64 {
        match track {
            TrackType::Race => self.skill_race,
            TrackType::Street => self.skill_street,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapRequest {
    pub track_type: TrackType,
    pub base_lap_time: f64,
}

/// Outcome of one simulated lap
///
/// On a crash `time` is 0 and `randomness` carries the crash roll rather
/// than lap jitter; clients depend on that field reuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapResult {
    pub time: f64,
    pub randomness: f64,
    pub crashed: bool,
}

/// Runs lap simulations against an injected random source
#[derive(Clone)]
pub struct LapSimulator {
    random: Arc<dyn RandomSource>,
}

impl LapSimulator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Simulate a single lap.
    ///
    /// A car without a driver has no skill for any track type and is
    /// rejected with [`SimulationError::InvalidTrackType`].
    pub fn simulate(
        &self,
        car: &CarProfile,
        driver: Option<&DriverProfile>,
        request: &LapRequest,
    ) -> SimulationResult<LapResult> {
        let track = request.track_type;
        let driver = driver
            .ok_or_else(|| SimulationError::InvalidTrackType(track.as_str().to_string()))?;

        // Scores are widened to f64 so no stored row can overflow.
        let suitability = car.suitability(track) as f64;
        let skill = driver.skill(track) as f64;
        let reliability = car.reliability as f64;

        let crash_threshold = reliability + track.crash_margin() as f64;
        let crash_roll = self.random.draw(crash_threshold);
        if crash_roll > reliability {
            return Ok(LapResult {
                time: 0.0,
                randomness: crash_roll,
                crashed: true,
            });
        }

        // Low reliability costs less speed than high reliability does.
        let speed = (suitability + skill + (100.0 - reliability)) / 3.0;
        let lap_time = request.base_lap_time + 10.0 * (speed / 100.0);
        let randomness = self.random.draw(MAX_LAP_JITTER);

        Ok(LapResult {
            time: lap_time + randomness,
            randomness,
            crashed: false,
        })
    }
}

impl Default for LapSimulator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::random::ScriptedRandom;

    fn car() -> CarProfile {
        CarProfile {
            reliability: 80,
            suitability_race: 60,
            suitability_street: 40,
        }
    }

    fn driver() -> DriverProfile {
        DriverProfile {
            skill_race: 70,
            skill_street: 30,
        }
    }

    fn scripted(fractions: &[f64]) -> (Arc<ScriptedRandom>, LapSimulator) {
        let random = Arc::new(ScriptedRandom::new(fractions.iter().copied()));
        let simulator = LapSimulator::new(random.clone());
        (random, simulator)
    }

    #[test]
    fn test_reference_lap() {
        let (_, simulator) = scripted(&[0.0, 0.0]);
        let request = LapRequest {
            track_type: TrackType::Race,
            base_lap_time: 90.0,
        };

        let result = simulator.simulate(&car(), Some(&driver()), &request).unwrap();
        assert!(!result.crashed);
        assert_eq!(result.randomness, 0.0);
        assert!((result.time - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_street_lap_uses_street_attributes() {
        // speed = (40 + 30 + 20) / 3 = 30; jitter = 0.5 * 5
        let (_, simulator) = scripted(&[0.0, 0.5]);
        let request = LapRequest {
            track_type: TrackType::Street,
            base_lap_time: 100.0,
        };

        let result = simulator.simulate(&car(), Some(&driver()), &request).unwrap();
        assert!(!result.crashed);
        assert!((result.randomness - 2.5).abs() < 1e-9);
        assert!((result.time - (100.0 + 3.0 + 2.5)).abs() < 1e-9);
    }

    #[test]
    fn test_crash_reports_roll_as_randomness() {
        // roll = 0.99 * 85 = 84.15 > 80
        let (_, simulator) = scripted(&[0.99]);
        let request = LapRequest {
            track_type: TrackType::Race,
            base_lap_time: 90.0,
        };

        let result = simulator.simulate(&car(), Some(&driver()), &request).unwrap();
        assert!(result.crashed);
        assert_eq!(result.time, 0.0);
        assert!((result.randomness - 84.15).abs() < 1e-9);
    }

    #[test]
    fn test_roll_equal_to_reliability_does_not_crash() {
        let profile = CarProfile {
            reliability: 3,
            suitability_race: 50,
            suitability_street: 50,
        };
        // Race bound is 3 + 5 = 8 and 0.375 * 8 == 3 exactly.
        let (_, simulator) = scripted(&[0.375, 0.0]);
        let request = LapRequest {
            track_type: TrackType::Race,
            base_lap_time: 60.0,
        };

        let result = simulator.simulate(&profile, Some(&driver()), &request).unwrap();
        assert!(!result.crashed);
        assert_eq!(result.randomness, 0.0);
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        let profile = CarProfile {
            reliability: 80,
            suitability_race: i64::MAX,
            suitability_street: -(i64::MAX - 100),
        };
        let skilled = DriverProfile {
            skill_race: i64::MAX,
            skill_street: 0,
        };
        let (_, simulator) = scripted(&[0.0, 0.0]);
        let request = LapRequest {
            track_type: TrackType::Race,
            base_lap_time: 90.0,
        };

        let result = simulator.simulate(&profile, Some(&skilled), &request).unwrap();
        assert!(!result.crashed);
        assert!(result.time.is_finite());
        assert!(result.time > 90.0);

        let reckless = CarProfile {
            reliability: i64::MAX,
            ..profile
        };
        let (random, simulator) = scripted(&[0.0, 0.0]);
        simulator.simulate(&reckless, Some(&skilled), &request).unwrap();
        assert!(random.bounds()[0].is_finite());
    }

    #[test]
    fn test_missing_driver_is_rejected() {
        let (random, simulator) = scripted(&[]);
        let request = LapRequest {
            track_type: TrackType::Street,
            base_lap_time: 90.0,
        };

        let err = simulator.simulate(&car(), None, &request).unwrap_err();
        assert_eq!(err, SimulationError::InvalidTrackType("street".to_string()));
        assert!(random.bounds().is_empty());
    }

    #[test]
    fn test_draw_bounds_follow_track_type() {
        let (race_rng, race) = scripted(&[0.0, 0.0]);
        let (street_rng, street) = scripted(&[0.0, 0.0]);

        race.simulate(
            &car(),
            Some(&driver()),
            &LapRequest {
                track_type: TrackType::Race,
                base_lap_time: 90.0,
            },
        )
        .unwrap();
        street
            .simulate(
                &car(),
                Some(&driver()),
                &LapRequest {
                    track_type: TrackType::Street,
                    base_lap_time: 90.0,
                },
            )
            .unwrap();

        assert_eq!(race_rng.bounds(), vec![85.0, MAX_LAP_JITTER]);
        assert_eq!(street_rng.bounds(), vec![90.0, MAX_LAP_JITTER]);
    }
}
