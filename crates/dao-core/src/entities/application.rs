use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::window_contains;
use crate::dao::BaseObject;
use crate::types::{LocalizedString, Priority};

/// A dated in-app event such as a promotion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AppEvent {
    #[serde(flatten)]
    pub base: BaseObject,
    pub title: LocalizedString,
    pub priority: Priority,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl AppEvent {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }
}

crate::impl_dao!(AppEvent, "app_event", |this, r| {
    r.read("title", &mut this.title);
    r.read("priority", &mut this.priority);
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    #[serde(flatten)]
    pub base: BaseObject,
    pub app_events: Vec<AppEvent>,
}

impl Application {
    /// Active events at `at`, highest priority first.
    #[must_use]
    pub fn active_events(&self, at: DateTime<Utc>) -> Vec<&AppEvent> {
        let mut events: Vec<&AppEvent> =
            self.app_events.iter().filter(|event| event.is_active_at(at)).collect();
        events.sort_by(|a, b| b.priority.cmp(&a.priority));
        events
    }
}

crate::impl_dao!(Application, "application", |this, r| {
    r.read("appEvents", &mut this.app_events);
});
