//! REST API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

/// REST API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Path to the SQLite database file
    pub database_path: String,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("BIBLIO_HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIBLIO_HTTP_PORT".to_string()))?,

            database_path: env::var("BIBLIO_DATABASE_PATH")
                .unwrap_or_else(|_| "./biblio.db".to_string()),

            request_timeout_ms: env::var("BIBLIO_REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BIBLIO_REQUEST_TIMEOUT_MS".to_string()))?,
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
