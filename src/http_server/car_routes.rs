//! Car HTTP Routes
//!
//! CRUD over cars, the car/driver assignment, and the lap simulation.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::garage::{validate_car_input, CarInput};
use crate::simulation::{LapRequest, LapResult, TrackType};

use super::errors::{ApiError, ApiResult};
use super::response::{ApiResponse, CarView, DriverView};
use super::state::AppState;

const CAR_NOT_FOUND: &str = "Car not found";
const SERVER_ERROR: &str = "Server error";

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct CreateCarRequest {
    #[serde(default)]
    pub driver_id: Option<u64>,
    #[serde(flatten)]
    pub car: CarInput,
}

#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    #[serde(default)]
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LapQuery {
    #[serde(rename = "trackType", default)]
    pub track_type: Option<String>,
    #[serde(rename = "baseLapTime", default)]
    pub base_lap_time: Option<String>,
}

// ==================
// Car Routes
// ==================

/// Create car routes
pub fn car_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_cars_handler).post(create_car_handler))
        .route(
            "/:id",
            get(get_car_handler)
                .put(update_car_handler)
                .delete(delete_car_handler),
        )
        .route(
            "/:id/driver",
            get(get_car_driver_handler)
                .put(assign_driver_handler)
                .delete(remove_driver_handler),
        )
        .route("/:id/lap", get(lap_result_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Ids that are not numbers cannot match any car
fn parse_car_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

fn lap_query(query: Result<Query<LapQuery>, QueryRejection>) -> ApiResult<LapQuery> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

fn parse_base_lap_time(raw: Option<&str>) -> ApiResult<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
        .ok_or_else(|| ApiError::InvalidInput("baseLapTime must be a valid number".to_string()))
}

// ==================
// Car Handlers
// ==================

async fn list_cars_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<CarView<u64>>>>> {
    let cars = state
        .store
        .list_cars()
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?;

    let views = cars
        .iter()
        .map(|car| CarView::listed(car, &state.driver_uri_base))
        .collect();
    Ok(Json(ApiResponse::ok(views)))
}

async fn create_car_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCarRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    let request = json_body(payload)?;
    let spec = validate_car_input(&request.car).map_err(|e| {
        tracing::debug!(error = %e, "car rejected");
        ApiError::from(e)
    })?;

    let id = state
        .store
        .insert_car(request.driver_id, spec)
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?;

    tracing::info!(car_id = id, "car created");
    Ok(Json(ApiResponse::ok("Car created")))
}

async fn get_car_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<CarView<String>>>> {
    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let car = state
        .store
        .find_car(id)
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?
        .ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(CarView::detailed(
        &car,
        &state.driver_uri_base,
    ))))
}

async fn update_car_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CarInput>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    let input = json_body(payload)?;
    let spec = validate_car_input(&input)?;
    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let updated = state
        .store
        .update_car(id, spec)
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?;
    if !updated {
        return Err(ApiError::not_found(CAR_NOT_FOUND));
    }

    Ok(Json(ApiResponse::ok("Car updated")))
}

async fn delete_car_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let deleted = state
        .store
        .delete_car(id)
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?;
    if !deleted {
        return Err(ApiError::not_found(CAR_NOT_FOUND));
    }

    tracing::info!(car_id = id, "car deleted");
    Ok(Json(ApiResponse::ok("Car deleted successfully")))
}

// ==================
// Car Driver Handlers
// ==================

async fn get_car_driver_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<DriverView>>> {
    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let car = state
        .store
        .find_car(id)
        .await
        .map_err(|e| ApiError::upstream(e, SERVER_ERROR))?
        .ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let driver = car
        .driver
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Driver not found"))?;

    Ok(Json(ApiResponse::ok(DriverView::from(driver))))
}

async fn assign_driver_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<AssignDriverRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    let request = json_body(payload)?;
    let number = request
        .number
        .filter(|n| *n != 0)
        .ok_or_else(|| ApiError::InvalidInput("driver_number is required".to_string()))?;

    let driver = state
        .store
        .find_driver_by_number(number)
        .await
        .map_err(|e| ApiError::upstream(e, "Server error while fetching driver"))?
        .ok_or_else(|| ApiError::not_found("Driver not found"))?;

    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;
    let updated = state
        .store
        .set_car_driver(id, Some(driver.id))
        .await
        .map_err(|e| ApiError::upstream(e, "Server error while updating car driver"))?;
    if !updated {
        return Err(ApiError::not_found(CAR_NOT_FOUND));
    }

    tracing::info!(car_id = id, driver_id = driver.id, "driver assigned");
    Ok(Json(ApiResponse::ok("Car driver updated")))
}

async fn remove_driver_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<&'static str>>> {
    const NO_MATCH: &str = "Car not found or no driver assigned to this car";

    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(NO_MATCH))?;
    let updated = state
        .store
        .set_car_driver(id, None)
        .await
        .map_err(|e| ApiError::upstream(e, "Server error while deleting car driver"))?;
    if !updated {
        return Err(ApiError::not_found(NO_MATCH));
    }

    Ok(Json(ApiResponse::ok("Driver removed from car successfully")))
}

// ==================
// Lap Handler
// ==================

/// Simulate one lap for a car
///
/// Query parameters are checked before the store is touched; the simulator
/// only runs once the car row is in hand.
async fn lap_result_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<LapQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<LapResult>>> {
    let query = lap_query(query)?;
    let track_type = query.track_type.as_deref().unwrap_or_default().parse::<TrackType>()?;
    let base_lap_time = parse_base_lap_time(query.base_lap_time.as_deref())?;

    let id = parse_car_id(&id).ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;
    let car = state
        .store
        .find_car(id)
        .await
        .map_err(|e| ApiError::upstream(e, "Query data error while fetching car data"))?
        .ok_or_else(|| ApiError::not_found(CAR_NOT_FOUND))?;

    let request = LapRequest {
        track_type,
        base_lap_time,
    };
    let result = state
        .simulator
        .simulate(&car.profile(), car.driver_profile().as_ref(), &request)
        .map_err(|e| {
            tracing::debug!(car_id = id, error = %e, "lap rejected");
            ApiError::from(e)
        })?;

    tracing::info!(
        car_id = id,
        track = %track_type,
        crashed = result.crashed,
        time = result.time,
        "lap simulated"
    );
    Ok(Json(ApiResponse::ok(result)))
}
