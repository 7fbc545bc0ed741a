use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dictionary::FromData;
use crate::ids::IdGenerator;

/// Ordering weight for prices, tiers, seasons, alerts, and documents.
///
/// Always within `[Priority::NONE, Priority::HIGHEST]`: construction and
/// deserialization clamp out-of-range values to the nearest bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Priority(i64);

impl Priority {
    pub const NONE: Self = Self(0);
    pub const LOWEST: Self = Self(10);
    pub const LOW: Self = Self(25);
    pub const NORMAL: Self = Self(50);
    pub const HIGH: Self = Self(75);
    pub const HIGHEST: Self = Self(100);

    /// Clamp `value` into the valid range.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        if value > Self::HIGHEST.0 {
            Self::HIGHEST
        } else if value < Self::NONE.0 {
            Self::NONE
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

impl FromData for Priority {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        i64::from_data(value, ids).map(Self::new)
    }
}
