//! Daemon configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::{DaemonError, DaemonResult};
use std::env;
use std::path::PathBuf;

/// Default location of the event log, relative to the working directory.
pub const DEFAULT_EVENTS_FILE: &str = "testdata/events-sample.json";

// =============================================================================
// Configuration
// =============================================================================

/// Daemon configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Event log configuration
    pub events: EventsConfig,

    /// Environment (test, development, production)
    pub environment: Environment,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

/// Event log configuration.
#[derive(Debug, Clone)]
pub struct EventsConfig {
    /// Path of the line-oriented event log loaded at startup
    pub path: PathBuf,
}

/// Environment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Test environment
    Test,
    /// Development environment
    Development,
    /// Production environment
    Production,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> DaemonResult<Self> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> DaemonResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Self::load_environment(&lookup)?;
        let api = Self::load_api_config(&lookup)?;
        let events = Self::load_events_config(&lookup);

        Ok(Self {
            api,
            events,
            environment,
        })
    }

    /// Create test configuration.
    pub fn test() -> Self {
        Self {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
            },
            events: EventsConfig {
                path: PathBuf::from(DEFAULT_EVENTS_FILE),
            },
            environment: Environment::Test,
        }
    }

    /// Address string the API listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    fn load_environment<F>(lookup: &F) -> DaemonResult<Environment>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_str = lookup("TIMELINE_ENV").unwrap_or_else(|| "development".to_string());

        match env_str.to_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(DaemonError::Config(format!(
                "Invalid TIMELINE_ENV: {}. Expected: test, development, production",
                other
            ))),
        }
    }

    fn load_api_config<F>(lookup: &F) -> DaemonResult<ApiConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("TIMELINE_API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port_str = lookup("TIMELINE_API_PORT").unwrap_or_else(|| "8888".to_string());

        let port = port_str.parse::<u16>().map_err(|_| {
            DaemonError::Config(format!("Invalid TIMELINE_API_PORT: {}", port_str))
        })?;

        Ok(ApiConfig { host, port })
    }

    fn load_events_config<F>(lookup: &F) -> EventsConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("TIMELINE_EVENTS_FILE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVENTS_FILE.to_string());

        EventsConfig {
            path: PathBuf::from(path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                host: "0.0.0.0".to_string(),
                port: 8888,
            },
            events: EventsConfig {
                path: PathBuf::from(DEFAULT_EVENTS_FILE),
            },
            environment: Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
