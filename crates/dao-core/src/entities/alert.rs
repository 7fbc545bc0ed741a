use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::window_contains;
use crate::dao::BaseObject;
use crate::enums::{AlertScope, Status};
use crate::types::{LocalizedString, Priority};

/// A time-boxed banner shown to users within some scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Alert {
    #[serde(flatten)]
    pub base: BaseObject,
    pub name: String,
    pub priority: Priority,
    pub scope: AlertScope,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Status,
    pub tag_line: LocalizedString,
    pub title: LocalizedString,
    pub image_url: String,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            base: BaseObject::default(),
            name: String::new(),
            priority: Priority::HIGHEST,
            scope: AlertScope::All,
            start_time: None,
            end_time: None,
            status: Status::TempClosed,
            tag_line: LocalizedString::default(),
            title: LocalizedString::default(),
            image_url: String::new(),
        }
    }
}

impl Alert {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }
}

crate::impl_dao!(Alert, "alert", |this, r| {
    r.read("name", &mut this.name);
    r.read("priority", &mut this.priority);
    r.read("scope", &mut this.scope);
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("status", &mut this.status);
    r.read("tagLine", &mut this.tag_line);
    r.read("title", &mut this.title);
    r.read("imageUrl", &mut this.image_url);
});
