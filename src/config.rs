//! Configuration management for the task manager.
//!
//! Configuration can be set via environment variables:
//! - `TASK_MANAGER_MODE` - Optional. `local` (in-memory) or `remote` (HTTP backend). Defaults to `local`.
//! - `TASK_API_URL` - Optional. Base URL of the task backend. Defaults to `http://localhost:8000/api`.
//! - `TASK_API_TIMEOUT_SECS` - Optional. HTTP timeout for the remote store. Defaults to `10`.
//! - `HOST` - Optional. Server host for `serve`. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port for `serve`. Defaults to `8000`.

use std::time::Duration;
use thiserror::Error;

use crate::store::{TaskStoreType, DEFAULT_API_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Which task store backs the controller
    pub store_type: TaskStoreType,

    /// Base URL of the remote task API
    pub api_url: String,

    /// Request timeout for the remote task API
    pub api_timeout: Duration,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_type: TaskStoreType::Local,
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: DEFAULT_TIMEOUT,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_type = std::env::var("TASK_MANAGER_MODE")
            .map(|v| TaskStoreType::from_str(&v))
            .unwrap_or_default();

        let api_url =
            std::env::var("TASK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_timeout = match std::env::var("TASK_API_TIMEOUT_SECS") {
            Ok(v) => Duration::from_secs(v.trim().parse().map_err(|e| {
                ConfigError::InvalidValue("TASK_API_TIMEOUT_SECS".to_string(), format!("{}", e))
            })?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        Ok(Self {
            store_type,
            api_url,
            api_timeout,
            host,
            port,
        })
    }
}
