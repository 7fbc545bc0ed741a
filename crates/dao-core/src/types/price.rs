use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Priority, TimeOfDay};
use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

/// One candidate price, optionally limited to a time-of-day window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    pub price: f64,
    pub priority: Priority,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
}

impl Price {
    #[must_use]
    pub fn new(price: f64, priority: Priority) -> Self {
        Self {
            price,
            priority,
            ..Self::default()
        }
    }

    /// Whether the time of day of `at` falls inside `[start_time, end_time)`.
    /// A missing bound is open.
    #[must_use]
    pub fn is_active(&self, at: DateTime<Utc>) -> bool {
        let now = TimeOfDay::of(at);
        self.start_time.is_none_or(|start| start <= now)
            && self.end_time.is_none_or(|end| now < end)
    }
}

impl FromData for Price {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, p| {
            r.read("price", &mut p.price);
            r.read("priority", &mut p.priority);
            r.read("startTime", &mut p.start_time);
            r.read("endTime", &mut p.end_time);
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::ids::UuidIds;

    #[test]
    fn window_bounds_are_half_open() {
        let price = Price {
            start_time: TimeOfDay::new(10, 0),
            end_time: TimeOfDay::new(12, 0),
            ..Price::new(5.0, Priority::NORMAL)
        };
        let at = |h| Utc.with_ymd_and_hms(2024, 5, 1, h, 0, 0).unwrap();
        assert!(!price.is_active(at(9)));
        assert!(price.is_active(at(10)));
        assert!(!price.is_active(at(12)));
        assert!(Price::new(1.0, Priority::LOW).is_active(at(3)));
    }

    #[test]
    fn parses_string_amounts_and_clamps_priority() {
        let price =
            Price::from_data(&json!({"price": "15.50", "priority": 400}), &UuidIds).unwrap();
        assert!((price.price - 15.5).abs() < f64::EPSILON);
        assert_eq!(price.priority, Priority::HIGHEST);
    }
}
