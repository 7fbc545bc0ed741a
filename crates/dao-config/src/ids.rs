//! Identifier generation settings.

use dao_core::ids::{IdGenerator, SequentialIds, UuidIds};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_prefix() -> String {
    "dao".to_string()
}

/// How fresh entity ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random upper-case UUIDv4.
    #[default]
    Uuid,
    /// `{prefix}-1`, `{prefix}-2`, ...
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdsConfig {
    #[serde(default)]
    pub strategy: IdStrategy,

    /// Prefix for sequential ids. Ignored by the UUID strategy.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::default(),
            prefix: default_prefix(),
        }
    }
}

impl IdsConfig {
    /// Build the configured generator.
    #[must_use]
    pub fn generator(&self) -> Box<dyn IdGenerator> {
        match self.strategy {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => Box::new(SequentialIds::new(self.prefix.clone())),
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank sequential prefix.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == IdStrategy::Sequential && self.prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ids.prefix".into(),
                reason: "sequential ids need a non-empty prefix".into(),
            });
        }
        Ok(())
    }
}
