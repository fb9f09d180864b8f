//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RWA_TOKENIZER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable setup.
//!
//! # Example
//!
//! ```no_run
//! use rwa_tokenizer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data stored in {}", config.storage.data_dir.display());
//! ```

mod error;
mod runtime;
mod services;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use services::{
    IdentityConfig, MintingConfig, ValuationConfig, MAX_SUFFIX_LENGTH, MIN_SUFFIX_LENGTH,
};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Collection store backend and location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Administrator naming policy
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Token id format and per-property limit
    #[serde(default)]
    pub minting: MintingConfig,

    /// Valuation fallback base
    #[serde(default)]
    pub valuation: ValuationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RWA_TOKENIZER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RWA_TOKENIZER__STORAGE__DATA_DIR=./data` -> `storage.data_dir = ./data`
    /// - `RWA_TOKENIZER__MINTING__ONE_TOKEN_PER_PROPERTY=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RWA_TOKENIZER")
                    .separator("__")
                    .try_parsing(true),
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
        self.storage.validate()?;
        self.identity.validate()?;
        self.minting.validate()?;
        self.valuation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
