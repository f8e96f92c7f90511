//! Configuration module for Cabinet.

use serde::Deserialize;
use std::path::Path;

use crate::{CabinetError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/cabinet.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing JWTs.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token expiry in seconds.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: u64,
}

fn default_jwt_secret() -> String {
    // Empty by default so that validate() forces operators to set one.
    String::new()
}

fn default_token_expiry() -> u64 {
    3600
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_expiry_secs: default_token_expiry(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file (empty = console only).
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CabinetError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks that values required at runtime are present and sane.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(CabinetError::Config("server.host must not be empty".into()));
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(CabinetError::Config(
                "auth.jwt_secret must be set to a non-empty value".into(),
            ));
        }
        if self.auth.jwt_secret.len() < 16 {
            return Err(CabinetError::Config(
                "auth.jwt_secret must be at least 16 characters".into(),
            ));
        }
        if self.auth.token_expiry_secs == 0 {
            return Err(CabinetError::Config(
                "auth.token_expiry_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
