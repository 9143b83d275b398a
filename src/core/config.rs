//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, command-line flags, or defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability. It is immutable after load:
/// the CLI and environment produce one `Config`, and everything downstream
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Server and transport configuration.
    pub server: ServerConfig,

    /// Upper bound on graceful shutdown (transport drain and the
    /// application shutdown hook).
    pub shutdown_timeout: Duration,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter: "debug", "info", "warn" or "error".
    pub level: String,

    /// Log output format: "text" or "json".
    pub format: String,
}

/// Server and transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport to serve on: "stdio" or "http".
    pub transport_type: String,

    /// Host address to bind to (HTTP transport only).
    pub host: String,

    /// Port number to listen on (HTTP transport only). Zero means "unset";
    /// stored wide so that out-of-range values survive until validation.
    pub port: u32,

    /// Per-request timeout handed to tools that perform outbound calls.
    pub transport_timeout: Duration,

    /// When set, handlers skip or restrict registration of mutating tools.
    pub read_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
            server: ServerConfig {
                transport_type: "stdio".to_string(),
                host: "localhost".to_string(),
                port: 8080,
                transport_timeout: Duration::from_secs(30),
                read_only: false,
            },
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables under `prefix`.
    ///
    /// Keys follow the dotted field paths with `.` and `-` mapped to `_`
    /// and the whole name upper-cased. For example, with prefix `MCP`,
    /// `server.transport_type` is read from `MCP_SERVER_TRANSPORT_TYPE`
    /// and `shutdown_timeout` from `MCP_SHUTDOWN_TIMEOUT`.
    ///
    /// Timeouts are expressed in whole seconds. Values that fail to parse
    /// keep the default.
    pub fn from_env(prefix: &str) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(level) = env_var(prefix, "LOGGING_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(format) = env_var(prefix, "LOGGING_FORMAT") {
            config.logging.format = format;
        }

        if let Ok(transport_type) = env_var(prefix, "SERVER_TRANSPORT_TYPE") {
            config.server.transport_type = transport_type;
        }

        if let Ok(host) = env_var(prefix, "SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = env_var(prefix, "SERVER_PORT") {
            config.server.port = port.parse().unwrap_or(config.server.port);
        }

        if let Ok(secs) = env_var(prefix, "SERVER_TRANSPORT_TIMEOUT") {
            config.server.transport_timeout = secs
                .parse()
                .map(Duration::from_secs)
                .unwrap_or(config.server.transport_timeout);
        }

        if let Ok(read_only) = env_var(prefix, "SERVER_READ_ONLY") {
            config.server.read_only = read_only.parse().unwrap_or(config.server.read_only);
        }

        if let Ok(secs) = env_var(prefix, "SHUTDOWN_TIMEOUT") {
            config.shutdown_timeout = secs
                .parse()
                .map(Duration::from_secs)
                .unwrap_or(config.shutdown_timeout);
        }

        config
    }
}

fn env_var(prefix: &str, key: &str) -> Result<String, std::env::VarError> {
    std::env::var(format!("{prefix}_{key}"))
}
