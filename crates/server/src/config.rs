//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CLEMENTINE_HOST` - Bind address (default: 127.0.0.1)
//! - `CLEMENTINE_PORT` - Listen port (default: 8080)
//! - `CLEMENTINE_CATALOG_SIZE` - Number of products seeded at startup (default: 520)
//! - `GEMINI_API_KEY` - Gemini API key; without it the chat endpoint reports
//!   service-unavailable at call time
//! - `GEMINI_MODEL` - Gemini model identifier (default: gemini-1.5-flash)
//! - `GEMINI_ENDPOINT` - Gemini API base URL (default: public Google endpoint)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Default number of seeded catalog products.
pub const DEFAULT_CATALOG_SIZE: usize = 520;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Number of products seeded into the catalog at startup
    pub catalog_size: usize,
    /// Gemini text-generation API configuration
    pub gemini: GeminiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key. Absence is a call-time error, not a startup error.
    pub api_key: Option<SecretString>,
    /// Model identifier (e.g., gemini-1.5-flash)
    pub model: String,
    /// API base URL; overridable so tests can point at a local mock
    pub endpoint: String,
}

impl GeminiConfig {
    /// Default model identifier used when `GEMINI_MODEL` is unset.
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Default API base URL used when `GEMINI_ENDPOINT` is unset.
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com";
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but not parseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CLEMENTINE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("CLEMENTINE_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_PORT".to_string(), e.to_string())
            })?;
        let catalog_size = get_env_or_default("CLEMENTINE_CATALOG_SIZE", "520")
            .parse::<usize>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_CATALOG_SIZE".to_string(), e.to_string())
            })?;

        let gemini = GeminiConfig::from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            catalog_size,
            gemini,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GeminiConfig {
    fn from_env() -> Self {
        Self {
            api_key: get_optional_env("GEMINI_API_KEY").map(SecretString::from),
            model: get_env_or_default("GEMINI_MODEL", Self::DEFAULT_MODEL),
            endpoint: get_env_or_default("GEMINI_ENDPOINT", Self::DEFAULT_ENDPOINT),
        }
    }

    /// Configuration with defaults and no API key, useful in tests.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            api_key: None,
            model: Self::DEFAULT_MODEL.to_string(),
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
