//! # API Errors
//!
//! Every failure a handler can return, with its HTTP status and body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::garage::ValidationError;
use crate::simulation::SimulationError;
use crate::store::StoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed or out-of-range request data
    #[error("{0}")]
    InvalidInput(String),

    /// Lap requested for an unknown track type or a car without a driver
    #[error("{0}")]
    InvalidTrackType(String),

    #[error("{0}")]
    NotFound(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store query failed
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidTrackType(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Log a store failure and hide it behind a client-facing message
    pub fn upstream(err: StoreError, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(error = %err, "{}", message);
        ApiError::Upstream(message)
    }
}

impl From<SimulationError> for ApiError {
    fn from(err: SimulationError) -> Self {
        ApiError::InvalidTrackType(err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Error response body
///
/// Track-type rejections put the text under `message`; every other error
/// puts it under `result`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        match err {
            ApiError::InvalidTrackType(message) => Self {
                code,
                message: Some(message),
                result: None,
            },
            ApiError::InvalidInput(text) | ApiError::NotFound(text) | ApiError::Upstream(text) => {
                Self {
                    code,
                    message: None,
                    result: Some(text),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidInput("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("Car not found").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Upstream("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_track_type_error_uses_message_key() {
        let err = ApiError::from(SimulationError::InvalidTrackType("offroad".to_string()));
        let json = serde_json::to_value(ErrorResponse::from(err)).unwrap();

        assert_eq!(json["code"], 400);
        assert_eq!(
            json["message"],
            "Invalid track type or missing skill/suitability data for track type offroad"
        );
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_other_errors_use_result_key() {
        let json = serde_json::to_value(ErrorResponse::from(ApiError::not_found("Car not found")))
            .unwrap();
        assert_eq!(json["code"], 404);
        assert_eq!(json["result"], "Car not found");
        assert!(json.get("message").is_none());
    }
}
