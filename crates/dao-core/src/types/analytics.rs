use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

/// Per-platform figures, used both for analytics counts and for system
/// failure rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalyticsNumbers {
    pub android: f64,
    pub ios: f64,
    pub total: f64,
}

impl AnalyticsNumbers {
    /// Figures with `total` derived from the platform values.
    #[must_use]
    pub fn new(android: f64, ios: f64) -> Self {
        Self {
            android,
            ios,
            total: android + ios,
        }
    }
}

impl FromData for AnalyticsNumbers {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, n| {
            r.read("android", &mut n.android);
            r.read("iOS", &mut n.ios);
            r.read("ios", &mut n.ios);
            r.read("total", &mut n.total);
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ids::UuidIds;

    #[test]
    fn accepts_either_ios_spelling() {
        let legacy = AnalyticsNumbers::from_data(&json!({"iOS": 2, "android": "1.5"}), &UuidIds)
            .unwrap();
        assert!((legacy.ios - 2.0).abs() < f64::EPSILON);
        assert!((legacy.android - 1.5).abs() < f64::EPSILON);
        assert!((AnalyticsNumbers::new(1.0, 2.0).total - 3.0).abs() < f64::EPSILON);
    }
}
