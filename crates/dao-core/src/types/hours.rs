use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dictionary::{FromData, read_record};
use crate::ids::IdGenerator;

/// Wall-clock time without a date, in minute resolution.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    /// Returns `None` unless `hour < 24` and `minute < 60`.
    #[must_use]
    pub const fn new(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Time of day of `at`, in UTC.
    #[must_use]
    pub fn of(at: DateTime<Utc>) -> Self {
        Self {
            hour: at.hour(),
            minute: at.minute(),
        }
    }

    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Parse `"HH:MM"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.trim().split_once(':')?;
        Self::new(hour.parse().ok()?, minute.parse().ok()?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromData for TimeOfDay {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        if let Some(s) = value.as_str() {
            return Self::parse(s);
        }
        let parsed = read_record(value, ids, Self::default(), |r, t| {
            r.read("hour", &mut t.hour);
            r.read("minute", &mut t.minute);
        })?;
        Self::new(parsed.hour, parsed.minute)
    }
}

/// Opening hours for one day. A day with neither bound is closed; a missing
/// open bound means midnight and a missing close bound means end of day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DailyHours {
    pub open: Option<TimeOfDay>,
    pub close: Option<TimeOfDay>,
}

impl DailyHours {
    #[must_use]
    pub const fn new(open: TimeOfDay, close: TimeOfDay) -> Self {
        Self {
            open: Some(open),
            close: Some(close),
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.open.is_none() && self.close.is_none()
    }

    /// Whether `time` falls in `[open, close)`. Hours that close before they
    /// open wrap past midnight.
    #[must_use]
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        match (self.open, self.close) {
            (None, None) => false,
            (Some(open), None) => open <= time,
            (None, Some(close)) => time < close,
            (Some(open), Some(close)) if open <= close => open <= time && time < close,
            (Some(open), Some(close)) => time >= open || time < close,
        }
    }
}

impl FromData for DailyHours {
    fn from_data(value: &Value, ids: &dyn IdGenerator) -> Option<Self> {
        read_record(value, ids, Self::default(), |r, h| {
            r.read("open", &mut h.open);
            r.read("close", &mut h.close);
        })
    }
}
