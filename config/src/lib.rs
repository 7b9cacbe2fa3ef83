//! # Configuration Management for Keystash
//!
//! This crate provides the centralized configuration structures for the
//! keystash cache accessor.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::CacheConfig;
//!
//! let cache_config = CacheConfig::new("redis://localhost:6379".to_string());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [cache]
//! redis_url = "redis://localhost:6379"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! # fn main() -> Result<(), config::ConfigError> {
//! // Load from keystash.toml (or the path named in KEYSTASH_CONFIG)
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok(())
//! # }
//! ```
//!
//! When no file is wanted, `CacheConfig::from_env()` resolves the connection
//! URL from the `REDIS_URL` environment variable and otherwise falls back to
//! the local default.

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./keystash.toml";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
}

/// Cache connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection string (redis://host:port)
    pub redis_url: String,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            // A missing .env file is fine; other dotenvy failures are not
            match dotenvy::dotenv() {
                Ok(_) => {}
                Err(err) if err.not_found() => {}
                Err(err) => return Err(ConfigError::Dotenvy(err)),
            }

            // Honor KEYSTASH_CONFIG when set
            if let Ok(config_path) = env::var("KEYSTASH_CONFIG") {
                Self::from_file(&config_path)
            }
            // Try to load config from DEFAULT_CONFIG_PATH
            else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // No file anywhere: fall back to environment-derived defaults
            else {
                Ok(Self {
                    cache: CacheConfig::from_env(),
                })
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.cache.validate()
    }
}

impl CacheConfig {
    /// Create a new cache configuration
    pub fn new(redis_url: String) -> Self {
        Self { redis_url }
    }

    /// Resolve the connection URL from REDIS_URL, falling back to localhost
    pub fn from_env() -> Self {
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string());
        Self { redis_url }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.redis_url.is_empty() {
            return Err(ConfigError::Invalid(
                "Redis URL cannot be empty".to_string(),
            ));
        }
        if !self.redis_url.starts_with("redis://") && !self.redis_url.starts_with("rediss://") {
            return Err(ConfigError::Invalid(format!(
                "Redis URL must use the redis:// or rediss:// scheme, got: {}",
                self.redis_url
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}
