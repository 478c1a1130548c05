//! # Lap Simulation
//!
//! Decides whether a car crashes on a lap and, if it survives, how long the
//! lap took. The simulator is a pure function of its inputs plus one
//! injected random source.
//!
//! # Model
//!
//! - Crash roll is drawn from `[0, reliability + margin)` where the margin is
//!   5 on race tracks and 10 on street tracks; the car crashes when the roll
//!   exceeds its reliability.
//! - Lap speed averages suitability, driver skill and `100 - reliability`.
//! - Lap time adds up to 5 seconds of jitter on top of the base time.

pub mod errors;
pub mod random;
pub mod simulator;
pub mod track;

pub use errors::{SimulationError, SimulationResult};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use simulator::{CarProfile, DriverProfile, LapRequest, LapResult, LapSimulator};
pub use track::TrackType;
