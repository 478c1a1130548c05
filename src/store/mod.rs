//! # Car Store
//!
//! Port through which the HTTP layer reads and writes cars and drivers.
//! The backing database is an external collaborator; [`InMemoryStore`]
//! implements the port for standalone runs and tests.

pub mod errors;
pub mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::garage::{CarRecord, CarSpec, DriverRecord};

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use seed::{CarRow, SeedData};

/// Query interface over cars and drivers
///
/// Mutating calls return `false` when no car matched the id, mirroring an
/// affected-rows count of zero.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// All cars, ordered by id, each joined with its driver
    async fn list_cars(&self) -> StoreResult<Vec<CarRecord>>;

    async fn find_car(&self, id: u64) -> StoreResult<Option<CarRecord>>;

    /// Insert a car and return its new id
    async fn insert_car(&self, driver_id: Option<u64>, spec: CarSpec) -> StoreResult<u64>;

    async fn update_car(&self, id: u64, spec: CarSpec) -> StoreResult<bool>;

    async fn delete_car(&self, id: u64) -> StoreResult<bool>;

    /// Assign a driver to a car, or clear the assignment with `None`
    async fn set_car_driver(&self, car_id: u64, driver_id: Option<u64>) -> StoreResult<bool>;

    async fn find_driver_by_number(&self, number: u32) -> StoreResult<Option<DriverRecord>>;

    async fn list_drivers(&self) -> StoreResult<Vec<DriverRecord>>;
}
