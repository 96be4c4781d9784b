//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `IMMAGREAT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use immagreat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod livekit;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use livekit::LiveKitConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection; empty URL means in-memory)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Session authentication configuration
    pub auth: AuthConfig,

    /// Live video credentials
    #[serde(default)]
    pub livekit: Option<LiveKitConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IMMAGREAT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IMMAGREAT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `IMMAGREAT__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IMMAGREAT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        if let Some(livekit) = &self.livekit {
            livekit.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    fn set_minimal_env() {
        env::set_var("IMMAGREAT__AUTH__JWT_SECRET", "test-secret");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("IMMAGREAT__AUTH__JWT_SECRET");
        env::remove_var("IMMAGREAT__DATABASE__URL");
        env::remove_var("IMMAGREAT__SERVER__PORT");
        env::remove_var("IMMAGREAT__SERVER__ENVIRONMENT");
        env::remove_var("IMMAGREAT__LIVEKIT__API_KEY");
        env::remove_var("IMMAGREAT__LIVEKIT__API_SECRET");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("IMMAGREAT__DATABASE__URL", "postgresql://test@localhost/test");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.auth.jwt_secret.expose_secret(), "test-secret");
        assert_eq!(config.database.url(), Some("postgresql://test@localhost/test"));
        assert!(config.livekit.is_none());
    }

    #[test]
    fn test_minimal_config_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(!config.database.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.auth.cookie_name, "immagreat_session");
    }

    #[test]
    fn test_production_rejects_short_secret() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("IMMAGREAT__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_BYTES))
        );
    }

    #[test]
    fn test_livekit_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("IMMAGREAT__LIVEKIT__API_KEY", "APIabc");
        env::set_var("IMMAGREAT__LIVEKIT__API_SECRET", "livekit-secret");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let livekit = config.livekit.expect("livekit section");
        assert_eq!(livekit.api_key, "APIabc");
        assert_eq!(livekit.token_ttl_secs, 21_600);
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("IMMAGREAT__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
