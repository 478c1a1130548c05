//! HTTP Server Configuration
//!
//! Host, port, CORS, link and logging settings. Every field has a default so
//! an empty JSON object is a valid config.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3389)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, meaning any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Base URI used to build driver links
    #[serde(default = "default_driver_uri_base")]
    pub driver_uri_base: String,

    /// Log filter used when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON file with cars and drivers to preload
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Fixed seed for lap simulation draws
    #[serde(default)]
    pub random_seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3389
}

fn default_driver_uri_base() -> String {
    "http://localhost:3389/driver".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            driver_uri_base: default_driver_uri_base(),
            log_level: default_log_level(),
            seed_path: None,
            random_seed: None,
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3389);
        assert!(config.cors_origins.is_empty());
        assert!(config.random_seed.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }
}
