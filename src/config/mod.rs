//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `DECISION_STEWARD` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_steward::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod directory;
mod error;
mod redis;
mod resolver;

pub use database::DatabaseConfig;
pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use resolver::ResolverConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL ownership-chain resolution)
    pub database: DatabaseConfig,

    /// Redis configuration (live profile update channel)
    pub redis: RedisConfig,

    /// Profile directory configuration (identity service client)
    pub directory: DirectoryConfig,

    /// Session resolver retry policy
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_STEWARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_STEWARD__DATABASE__URL=...` -> `database.url = ...`
    /// - `DECISION_STEWARD__DIRECTORY__BASE_URL=...` -> `directory.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required environment variables are missing
    /// or values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_STEWARD")
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
        self.database.validate()?;
        self.redis.validate()?;
        self.directory.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    fn set_minimal_env() {
        env::set_var(
            "DECISION_STEWARD__DATABASE__URL",
            "postgresql://test@localhost/test",
        );
        env::set_var("DECISION_STEWARD__REDIS__URL", "redis://localhost:6379");
        env::set_var(
            "DECISION_STEWARD__DIRECTORY__BASE_URL",
            "https://identity.internal",
        );
        env::set_var("DECISION_STEWARD__DIRECTORY__SERVICE_TOKEN", "svc-token");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DECISION_STEWARD__DATABASE__URL");
        env::remove_var("DECISION_STEWARD__REDIS__URL");
        env::remove_var("DECISION_STEWARD__DIRECTORY__BASE_URL");
        env::remove_var("DECISION_STEWARD__DIRECTORY__SERVICE_TOKEN");
        env::remove_var("DECISION_STEWARD__RESOLVER__RETRY_BUDGET");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert_eq!(config.directory.base_url, "https://identity.internal");
        // Resolver section is optional and falls back to defaults.
        assert_eq!(config.resolver.retry_budget, 1);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_fails_without_required_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        assert!(result.is_err());
    }
}
