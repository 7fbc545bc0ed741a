use std::cmp::Reverse;

use chrono::{DateTime, Datelike, Utc, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Activity, Alert, Announcement, window_contains};
use crate::dao::BaseObject;
use crate::enums::{Scope, Status};
use crate::types::{DailyHours, GeoPoint, LocalizedString, PostalAddress, TimeOfDay};

/// A physical venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseObject,
    pub activities: Vec<Activity>,
    pub address: Option<PostalAddress>,
    pub alerts: Vec<Alert>,
    pub announcements: Vec<Announcement>,
    pub code: String,
    pub events: Vec<PlaceEvent>,
    pub geohashes: Vec<String>,
    pub geopoint: Option<GeoPoint>,
    pub hours: Option<Box<PlaceHours>>,
    pub name: LocalizedString,
    pub phone: String,
    pub pricing_tier_id: String,
    pub section_id: String,
    pub statuses: Vec<PlaceStatus>,
    /// IANA zone name, e.g. `America/Chicago`.
    pub time_zone: String,
}

impl Place {
    /// The status governing `at`: among statuses that apply on `at` (see
    /// [`PlaceStatus::applies_on`]), the narrowest scope wins, then the latest
    /// start.
    #[must_use]
    pub fn status_at(&self, at: DateTime<Utc>) -> Option<&PlaceStatus> {
        self.statuses
            .iter()
            .filter(|status| status.applies_on(at))
            .min_by_key(|status| (status.scope, Reverse(status.start_time)))
    }

    /// Open unless a covering status says otherwise. A place without any
    /// statuses is open.
    #[must_use]
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        self.status_at(at).is_none_or(PlaceStatus::is_open)
    }

    /// Message of the governing status, or empty text.
    #[must_use]
    pub fn status_message_at(&self, at: DateTime<Utc>) -> LocalizedString {
        self.status_at(at)
            .map(|status| status.message.clone())
            .unwrap_or_default()
    }

    /// Alerts active at `at`, highest priority first.
    #[must_use]
    pub fn active_alerts(&self, at: DateTime<Utc>) -> Vec<&Alert> {
        let mut alerts: Vec<&Alert> =
            self.alerts.iter().filter(|alert| alert.is_active_at(at)).collect();
        alerts.sort_by(|a, b| b.priority.cmp(&a.priority));
        alerts
    }
}

crate::impl_dao!(Place, "place", |this, r| {
    r.read("activities", &mut this.activities);
    r.read("address", &mut this.address);
    r.read("alerts", &mut this.alerts);
    r.read("announcements", &mut this.announcements);
    r.read("code", &mut this.code);
    r.read("events", &mut this.events);
    r.read("geohashes", &mut this.geohashes);
    r.read("geopoint", &mut this.geopoint);
    r.read("hours", &mut this.hours);
    r.read("name", &mut this.name);
    r.read("phone", &mut this.phone);
    r.read("pricingTierId", &mut this.pricing_tier_id);
    r.read_reference("sectionId", "section", &mut this.section_id);
    r.read("statuses", &mut this.statuses);
    r.read("timeZone", &mut this.time_zone);
});

/// A named happening at a place, e.g. a private party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceEvent {
    #[serde(flatten)]
    pub base: BaseObject,
    pub name: LocalizedString,
    #[serde(rename = "type")]
    pub event_type: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub time_zone: String,
}

impl PlaceEvent {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_date, self.end_date, at)
    }
}

crate::impl_dao!(PlaceEvent, "place_event", |this, r| {
    r.read("name", &mut this.name);
    r.read("type", &mut this.event_type);
    r.read("startDate", &mut this.start_date);
    r.read("endDate", &mut this.end_date);
    r.read("timeZone", &mut this.time_zone);
});

/// Replacement hours for a single calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceHoliday {
    #[serde(flatten)]
    pub base: BaseObject,
    pub date: Option<DateTime<Utc>>,
    pub hours: DailyHours,
}

impl PlaceHoliday {
    #[must_use]
    pub fn falls_on(&self, at: DateTime<Utc>) -> bool {
        self.date.is_some_and(|date| date.date_naive() == at.date_naive())
    }
}

crate::impl_dao!(PlaceHoliday, "place_holiday", |this, r| {
    r.read("date", &mut this.date);
    r.read("hours", &mut this.hours);
});

/// Weekly opening hours plus dated exceptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceHours {
    #[serde(flatten)]
    pub base: BaseObject,
    pub monday: DailyHours,
    pub tuesday: DailyHours,
    pub wednesday: DailyHours,
    pub thursday: DailyHours,
    pub friday: DailyHours,
    pub saturday: DailyHours,
    pub sunday: DailyHours,
    pub events: Vec<PlaceEvent>,
    pub holidays: Vec<PlaceHoliday>,
}

impl PlaceHours {
    #[must_use]
    pub const fn on(&self, weekday: Weekday) -> DailyHours {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Hours for the date of `at`: a matching holiday replaces the weekday.
    #[must_use]
    pub fn for_date(&self, at: DateTime<Utc>) -> DailyHours {
        self.holidays
            .iter()
            .find(|holiday| holiday.falls_on(at))
            .map_or_else(|| self.on(at.weekday()), |holiday| holiday.hours)
    }

    #[must_use]
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        self.for_date(at).is_open_at(TimeOfDay::of(at))
    }
}

crate::impl_dao!(PlaceHours, "place_hours", |this, r| {
    r.read("monday", &mut this.monday);
    r.read("tuesday", &mut this.tuesday);
    r.read("wednesday", &mut this.wednesday);
    r.read("thursday", &mut this.thursday);
    r.read("friday", &mut this.friday);
    r.read("saturday", &mut this.saturday);
    r.read("sunday", &mut this.sunday);
    r.read("events", &mut this.events);
    r.read("holidays", &mut this.holidays);
});

/// A status override applying to a place for a time window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaceStatus {
    #[serde(flatten)]
    pub base: BaseObject,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message: LocalizedString,
    pub scope: Scope,
    pub status: Status,
}

impl PlaceStatus {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }

    /// Active at `at`, or starting or ending on the same UTC calendar date.
    #[must_use]
    pub fn applies_on(&self, at: DateTime<Utc>) -> bool {
        let same_date = |bound: Option<DateTime<Utc>>| {
            bound.is_some_and(|bound| bound.date_naive() == at.date_naive())
        };
        self.is_active_at(at) || same_date(self.start_time) || same_date(self.end_time)
    }
}

crate::impl_dao!(PlaceStatus, "place_status", |this, r| {
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("message", &mut this.message);
    r.read("scope", &mut this.scope);
    r.read("status", &mut this.status);
});
