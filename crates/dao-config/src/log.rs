//! Logging settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default `tracing` level when `DAO_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LogConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown level name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_ascii_lowercase();
        if LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "log.level".into(),
                reason: format!("expected one of {}, got '{}'", LEVELS.join(", "), self.level),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("warn", true)]
    #[case("DEBUG", true)]
    #[case("off", true)]
    #[case("loud", false)]
    #[case("", false)]
    fn level_validation(#[case] level: &str, #[case] ok: bool) {
        let config = LogConfig {
            level: level.into(),
        };
        assert_eq!(config.validate().is_ok(), ok);
    }
}
