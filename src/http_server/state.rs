//! Shared handler state

use std::sync::Arc;

use crate::simulation::{LapSimulator, RandomSource, SeededRandom, ThreadRandom};
use crate::store::{CarStore, InMemoryStore, SeedData, StoreResult};

use super::config::HttpServerConfig;

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CarStore>,
    pub simulator: LapSimulator,
    /// Prefix for driver links in car responses
    pub driver_uri_base: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CarStore>,
        simulator: LapSimulator,
        driver_uri_base: impl Into<String>,
    ) -> Self {
        Self {
            store,
            simulator,
            driver_uri_base: driver_uri_base.into(),
        }
    }

    /// Build the in-memory store and simulator a config describes
    pub fn from_config(config: &HttpServerConfig) -> StoreResult<Self> {
        let store = match &config.seed_path {
            Some(path) => InMemoryStore::from_seed(SeedData::load(path)?)?,
            None => InMemoryStore::new(),
        };

        let random: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };

        Ok(Self::new(
            Arc::new(store),
            LapSimulator::new(random),
            config.driver_uri_base.clone(),
        ))
    }
}
