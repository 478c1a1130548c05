//! Shared helpers for HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use raceday::garage::{CarRecord, CarSpec, DriverRecord};
use raceday::http_server::{AppState, HttpServer, HttpServerConfig};
use raceday::simulation::{LapSimulator, RandomSource};
use raceday::store::{CarRow, CarStore, InMemoryStore, SeedData, StoreError, StoreResult};

pub const DRIVER_URI_BASE: &str = "http://localhost:3389/driver";

pub fn driver(id: u64, name: &str, number: u32, short_name: &str, race: i64) -> DriverRecord {
    DriverRecord {
        id,
        name: name.to_string(),
        number,
        short_name: short_name.to_string(),
        skill_race: race,
        skill_street: 100 - race,
    }
}

/// Two drivers; car 1 driven by #44, car 2 without a driver
pub fn seed() -> SeedData {
    SeedData {
        drivers: vec![
            driver(1, "Lewis Hamilton", 44, "HAM", 70),
            driver(2, "Charles Leclerc", 16, "LEC", 55),
        ],
        cars: vec![
            CarRow {
                id: 1,
                driver_id: Some(1),
                suitability_race: 60,
                suitability_street: 40,
                reliability: 80,
            },
            CarRow {
                id: 2,
                driver_id: None,
                suitability_race: 50,
                suitability_street: 50,
                reliability: 90,
            },
        ],
    }
}

pub fn router_with(store: Arc<dyn CarStore>, random: Arc<dyn RandomSource>) -> Router {
    let state = AppState::new(store, LapSimulator::new(random), DRIVER_URI_BASE);
    HttpServer::new(HttpServerConfig::default(), state).router()
}

pub fn seeded_router(random: Arc<dyn RandomSource>) -> Router {
    let store = InMemoryStore::from_seed(seed()).unwrap();
    router_with(Arc::new(store), random)
}

/// Send one request and decode the JSON body (Null when the body is not JSON)
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

/// Store whose every query fails
pub struct FailingStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".to_string()))
}

#[async_trait]
impl CarStore for FailingStore {
    async fn list_cars(&self) -> StoreResult<Vec<CarRecord>> {
        unavailable()
    }

    async fn find_car(&self, _id: u64) -> StoreResult<Option<CarRecord>> {
        unavailable()
    }

    async fn insert_car(&self, _driver_id: Option<u64>, _spec: CarSpec) -> StoreResult<u64> {
        unavailable()
    }

    async fn update_car(&self, _id: u64, _spec: CarSpec) -> StoreResult<bool> {
        unavailable()
    }

    async fn delete_car(&self, _id: u64) -> StoreResult<bool> {
        unavailable()
    }

    async fn set_car_driver(&self, _car_id: u64, _driver_id: Option<u64>) -> StoreResult<bool> {
        unavailable()
    }

    async fn find_driver_by_number(&self, _number: u32) -> StoreResult<Option<DriverRecord>> {
        unavailable()
    }

    async fn list_drivers(&self) -> StoreResult<Vec<DriverRecord>> {
        unavailable()
    }
}
