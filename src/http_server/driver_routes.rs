//! Driver HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::garage::DriverRecord;

use super::errors::{ApiError, ApiResult};
use super::state::AppState;

/// Create driver routes
pub fn driver_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_drivers_handler))
        .with_state(state)
}

/// Driver rows as stored, without the response envelope
async fn list_drivers_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DriverRecord>>> {
    let drivers = state
        .store
        .list_drivers()
        .await
        .map_err(|e| ApiError::upstream(e, "Server error"))?;
    Ok(Json(drivers))
}
