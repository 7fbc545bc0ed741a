use chrono::{DateTime, Datelike, Utc, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

/// One flag per weekday. Every day is set by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DayOfWeekFlags {
    pub sunday: bool,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
}

impl DayOfWeekFlags {
    pub const ALL: Self = Self {
        sunday: true,
        monday: true,
        tuesday: true,
        wednesday: true,
        thursday: true,
        friday: true,
        saturday: true,
    };

    pub const NONE: Self = Self {
        sunday: false,
        monday: false,
        tuesday: false,
        wednesday: false,
        thursday: false,
        friday: false,
        saturday: false,
    };

    #[must_use]
    pub const fn is_set(&self, day: Weekday) -> bool {
        match day {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    pub const fn set(&mut self, day: Weekday, on: bool) {
        let flag = match day {
            Weekday::Sun => &mut self.sunday,
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
        };
        *flag = on;
    }

    /// Whether the UTC weekday of `at` is set.
    #[must_use]
    pub fn includes(&self, at: DateTime<Utc>) -> bool {
        self.is_set(at.weekday())
    }
}

impl Default for DayOfWeekFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromData for DayOfWeekFlags {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, flags| {
            r.read("sunday", &mut flags.sunday);
            r.read("monday", &mut flags.monday);
            r.read("tuesday", &mut flags.tuesday);
            r.read("wednesday", &mut flags.wednesday);
            r.read("thursday", &mut flags.thursday);
            r.read("friday", &mut flags.friday);
            r.read("saturday", &mut flags.saturday);
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
    fn missing_days_stay_set() {
        let flags = DayOfWeekFlags::from_data(&json!({"sunday": false, "monday": 0}), &UuidIds)
            .unwrap();
        assert!(!flags.is_set(Weekday::Sun));
        assert!(!flags.is_set(Weekday::Mon));
        assert!(flags.is_set(Weekday::Sat));
    }

    #[test]
    fn includes_checks_the_utc_weekday() {
        let mut flags = DayOfWeekFlags::NONE;
        flags.set(Weekday::Sat, true);
        // 2024-06-15 is a Saturday.
        assert!(flags.includes(Utc.with_ymd_and_hms(2024, 6, 15, 23, 0, 0).unwrap()));
        assert!(!flags.includes(Utc.with_ymd_and_hms(2024, 6, 16, 1, 0, 0).unwrap()));
    }
}
