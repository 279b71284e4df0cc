//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dashboard
//! client and the in-memory backend. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// REST backend the dashboard talks to.
    pub api: ApiConfig,

    /// Retry configuration for idempotent requests.
    pub retries: RetryConfig,

    /// In-memory backend settings (`food-api`).
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// REST client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:3333").
    pub base_url: String,

    /// Total time for one request/response in seconds.
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, the first one included.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

/// In-memory backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:3333").
    pub bind_address: String,

    /// Optional JSON file with initial food plates.
    pub seed_path: Option<String>,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3333".to_string(),
            seed_path: None,
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024, // 1MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.retries.max_attempts, 3);
        assert_eq!(config.server.bind_address, "127.0.0.1:3333");
        assert!(config.server.seed_path.is_none());
    }

    #[test]
    fn test_partial_section() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.2:8080"

            [retries]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert!(!config.retries.enabled);
        assert_eq!(config.retries.base_delay_ms, 100);
    }
}
