//! Configuration management for the showcase API
//!
//! Settings are layered from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use showcase_api::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Overrides follow the pattern `SHOWCASE__<section>__<key>`:
//! - `SHOWCASE__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `SHOWCASE__STORE__BACKEND=memory`
//! - `SHOWCASE__FILES__PUBLIC_BASE_URL=https://cdn.example.com`
//!
//! # Configuration File
//!
//! Loaded from `config/showcase.toml` unless `SHOWCASE_CONFIG` points elsewhere.

mod models;
mod sources;
mod validation;

pub use models::{Config, FilesConfig, ServerConfig, StoreBackend, StoreConfig, TelemetryConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation
    /// fails (bad public base URL, absolute files path, missing store path).
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
