//! # dao-config
//!
//! Layered configuration loading for data-object tooling using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DAO_*` prefix, `__` as separator)
//! 2. Project-level `.dataobjects/config.toml`
//! 3. User-level `~/.config/dataobjects/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DAO_IDS__STRATEGY` -> `ids.strategy`, `DAO_LOG__LEVEL` -> `log.level`, etc.
//! The `__` (double underscore) separates nested config sections. `DAO_LOG`
//! itself is the tracing filter and is not a config key.
//!
//! # Usage
//!
//! ```no_run
//! use dao_config::DaoConfig;
//!
//! let config = DaoConfig::load_with_dotenv().expect("config");
//! let ids = config.ids.generator();
//! println!("first id: {}", ids.next_id());
//! ```

mod error;
mod ids;
mod log;
mod output;

pub use error::ConfigError;
pub use ids::{IdStrategy, IdsConfig};
pub use log::LogConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".dataobjects/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DaoConfig {
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DaoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`DaoConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source fails to parse and
    /// `ConfigError::InvalidValue` when a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`DaoConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`DaoConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "loading user config");
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "loading project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DAO_").ignore(&["LOG"]).split("__"))
    }

    /// # Errors
    ///
    /// Returns the first section that fails validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ids.validate()?;
        self.log.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dataobjects").join("config.toml"))
    }

    /// Load `.env` from the working directory or its ancestors. Missing files
    /// are ignored.
    fn load_dotenv() {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(error) => tracing::trace!(%error, "no .env loaded"),
        }
    }
}
