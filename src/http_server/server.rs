//! # HTTP Server
//!
//! Combines the health, car and driver routers behind CORS and request
//! tracing layers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::car_routes::car_routes;
use super::config::HttpServerConfig;
use super::driver_routes::driver_routes;
use super::observability_routes::health_routes;
use super::state::AppState;

/// HTTP server for the cars and drivers API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: HttpServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
        let state = Arc::new(state);

        let methods = [Method::GET, Method::PUT, Method::POST, Method::DELETE];
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(methods)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(methods)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/car", car_routes(state.clone()))
            .nest("/driver", driver_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr().parse::<SocketAddr>().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "raceday listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
