//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Base URL of the public PokéAPI instance.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream PokéAPI configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the upstream PokéAPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for PokéAPI requests (no trailing slash required).
    pub base_url: String,

    /// Whether tool responses are prefixed with a debug marker.
    pub debug: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            debug: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pokeapi-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("MCP_POKEAPI_BASE_URL") {
            info!("Using PokéAPI base URL from environment: {}", base_url);
            config.api.base_url = base_url;
        }

        if let Ok(debug) = std::env::var("MCP_DEBUG") {
            config.api.debug = debug.parse().unwrap_or(false);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_points_at_public_pokeapi() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_POKEAPI_BASE_URL);
        assert!(!config.api.debug);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_base_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_POKEAPI_BASE_URL", "http://localhost:8080/api/v2");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v2");
        unsafe {
            std::env::remove_var("MCP_POKEAPI_BASE_URL");
        }
    }

    #[test]
    fn test_base_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_POKEAPI_BASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, DEFAULT_POKEAPI_BASE_URL);
    }

    #[test]
    fn test_debug_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DEBUG", "true");
        }
        let config = Config::from_env();
        assert!(config.api.debug);

        unsafe {
            std::env::set_var("MCP_DEBUG", "not-a-bool");
        }
        let config = Config::from_env();
        assert!(!config.api.debug);

        unsafe {
            std::env::remove_var("MCP_DEBUG");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "custom-pokedex");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "custom-pokedex");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}
