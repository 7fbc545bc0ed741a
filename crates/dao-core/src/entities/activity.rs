use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Pricing, window_contains};
use crate::dao::BaseObject;
use crate::types::LocalizedString;

/// A bookable activity at a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Activity {
    #[serde(flatten)]
    pub base: BaseObject,
    pub base_type: Option<Box<ActivityType>>,
    pub blackouts: Vec<ActivityBlackout>,
    pub booking_start_time: Option<DateTime<Utc>>,
    pub booking_end_time: Option<DateTime<Utc>>,
    pub code: String,
    pub name: LocalizedString,
}

impl Activity {
    /// Bookable at `at`: inside the booking window and outside every blackout.
    #[must_use]
    pub fn is_bookable_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.booking_start_time, self.booking_end_time, at)
            && self.blackout_at(at).is_none()
    }

    #[must_use]
    pub fn blackout_at(&self, at: DateTime<Utc>) -> Option<&ActivityBlackout> {
        self.blackouts.iter().find(|blackout| blackout.is_active_at(at))
    }
}

crate::impl_dao!(Activity, "activity", |this, r| {
    r.read("baseType", &mut this.base_type);
    r.read("blackouts", &mut this.blackouts);
    r.read("bookingStartTime", &mut this.booking_start_time);
    r.read("bookingEndTime", &mut this.booking_end_time);
    r.read("code", &mut this.code);
    r.read("name", &mut this.name);
});

/// A period during which an activity cannot be booked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityBlackout {
    #[serde(flatten)]
    pub base: BaseObject,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message: LocalizedString,
}

impl ActivityBlackout {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }
}

crate::impl_dao!(ActivityBlackout, "activity_blackout", |this, r| {
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("message", &mut this.message);
});

/// Template shared by activities of the same kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityType {
    #[serde(flatten)]
    pub base: BaseObject,
    pub code: String,
    pub name: LocalizedString,
    pub pricing: Option<Box<Pricing>>,
}

crate::impl_dao!(ActivityType, "activity_type", |this, r| {
    r.read("code", &mut this.code);
    r.read("name", &mut this.name);
    r.read("pricing", &mut this.pricing);
});
