//! # HTTP Server Module
//!
//! Axum server exposing the cars and drivers API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/car` - Car CRUD, driver assignment and `/car/:id/lap` simulation
//! - `/driver` - Driver listing

pub mod car_routes;
pub mod config;
pub mod driver_routes;
pub mod errors;
pub mod observability_routes;
pub mod response;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use state::AppState;
