//! # In-Memory Store
//!
//! [`CarStore`] backed by two maps guarded by a single `RwLock`. Car ids
//! are assigned sequentially after the highest seeded id.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::garage::{
    check_reliability, check_suitability, CarRecord, CarSpec, DriverRecord, Suitability,
};

use super::errors::{StoreError, StoreResult};
use super::seed::{CarRow, SeedData};
use super::CarStore;

#[derive(Debug, Default)]
struct Tables {
    cars: BTreeMap<u64, CarRow>,
    drivers: BTreeMap<u64, DriverRecord>,
    next_car_id: u64,
}

impl Tables {
    fn join(&self, row: &CarRow) -> CarRecord {
        CarRecord {
            id: row.id,
            driver: row.driver_id.and_then(|id| self.drivers.get(&id).cloned()),
            suitability: Suitability {
                race: row.suitability_race,
                street: row.suitability_street,
            },
            reliability: row.reliability,
        }
    }

    fn check_driver(&self, driver_id: Option<u64>) -> StoreResult<()> {
        match driver_id {
            Some(id) if !self.drivers.contains_key(&id) => Err(StoreError::UnknownDriver(id)),
            _ => Ok(()),
        }
    }
}

/// In-memory car store
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_car_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Create a store preloaded with seed data.
    ///
    /// Fails if a car references a driver the seed does not define or
    /// breaks the suitability and reliability rules applied to writes.
    pub fn from_seed(seed: SeedData) -> StoreResult<Self> {
        let mut tables = Tables::default();

        for driver in seed.drivers {
            tables.drivers.insert(driver.id, driver);
        }
        for car in seed.cars {
            check_suitability(car.suitability_race, car.suitability_street)
                .and_then(|_| check_reliability(car.reliability))
                .map_err(|e| StoreError::Seed(format!("car {}: {}", car.id, e)))?;
            if let Some(driver_id) = car.driver_id {
                if !tables.drivers.contains_key(&driver_id) {
                    return Err(StoreError::Seed(format!(
                        "car {} references unknown driver {}",
                        car.id, driver_id
                    )));
                }
            }
            tables.cars.insert(car.id, car);
        }
        tables.next_car_id = tables.cars.keys().next_back().map_or(1, |id| id + 1);

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarStore for InMemoryStore {
    async fn list_cars(&self) -> StoreResult<Vec<CarRecord>> {
        let tables = self.read()?;
        Ok(tables.cars.values().map(|row| tables.join(row)).collect())
    }

    async fn find_car(&self, id: u64) -> StoreResult<Option<CarRecord>> {
        let tables = self.read()?;
        Ok(tables.cars.get(&id).map(|row| tables.join(row)))
    }

    async fn insert_car(&self, driver_id: Option<u64>, spec: CarSpec) -> StoreResult<u64> {
        let mut tables = self.write()?;
        tables.check_driver(driver_id)?;

        let id = tables.next_car_id;
        tables.next_car_id += 1;
        tables.cars.insert(
            id,
            CarRow {
                id,
                driver_id,
                suitability_race: spec.suitability.race,
                suitability_street: spec.suitability.street,
                reliability: spec.reliability,
            },
        );
        Ok(id)
    }

    async fn update_car(&self, id: u64, spec: CarSpec) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.cars.get_mut(&id) {
            Some(row) => {
                row.suitability_race = spec.suitability.race;
                row.suitability_street = spec.suitability.street;
                row.reliability = spec.reliability;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_car(&self, id: u64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        Ok(tables.cars.remove(&id).is_some())
    }

    async fn set_car_driver(&self, car_id: u64, driver_id: Option<u64>) -> StoreResult<bool> {
        let mut tables = self.write()?;
        tables.check_driver(driver_id)?;
        match tables.cars.get_mut(&car_id) {
            Some(row) => {
                row.driver_id = driver_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_driver_by_number(&self, number: u32) -> StoreResult<Option<DriverRecord>> {
        let tables = self.read()?;
        Ok(tables.drivers.values().find(|d| d.number == number).cloned())
    }

    async fn list_drivers(&self) -> StoreResult<Vec<DriverRecord>> {
        let tables = self.read()?;
        Ok(tables.drivers.values().cloned().collect())
    }
}
