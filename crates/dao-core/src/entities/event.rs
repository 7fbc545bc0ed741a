use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Chat, Media, window_contains};
use crate::dao::BaseObject;
use crate::enums::Visibility;
use crate::types::{GeoPoint, LocalizedString, PostalAddress};

/// A multi-day event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub base: BaseObject,
    pub body: LocalizedString,
    pub days: Vec<EventDay>,
    pub distribution: Visibility,
    pub enabled: bool,
    pub title: LocalizedString,
    pub address: Option<PostalAddress>,
    pub geopoint: Option<GeoPoint>,
    pub media_items: Vec<Media>,
    pub attachments: Vec<Media>,
    pub chat: Option<Box<Chat>>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            base: BaseObject::default(),
            body: LocalizedString::default(),
            days: Vec::new(),
            distribution: Visibility::default(),
            enabled: true,
            title: LocalizedString::default(),
            address: None,
            geopoint: None,
            media_items: Vec::new(),
            attachments: Vec::new(),
            chat: None,
        }
    }
}

impl Event {
    /// Days sorted by date; undated days come last.
    #[must_use]
    pub fn schedule(&self) -> Vec<&EventDay> {
        let mut days: Vec<&EventDay> = self.days.iter().collect();
        days.sort_by_key(|day| (day.date.is_none(), day.date));
        days
    }
}

crate::impl_dao!(Event, "event", |this, r| {
    r.read("body", &mut this.body);
    r.read("days", &mut this.days);
    r.read("distribution", &mut this.distribution);
    r.read("enabled", &mut this.enabled);
    r.read("title", &mut this.title);
    r.read("address", &mut this.address);
    r.read("geopoint", &mut this.geopoint);
    r.read("mediaItems", &mut this.media_items);
    r.read("attachments", &mut this.attachments);
    r.read("chat", &mut this.chat);
});

/// One day of an [`Event`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDay {
    #[serde(flatten)]
    pub base: BaseObject,
    pub body: LocalizedString,
    pub date: Option<DateTime<Utc>>,
    pub distribution: Visibility,
    pub items: Vec<EventDayItem>,
    pub notes: LocalizedString,
    pub title: LocalizedString,
    pub address: Option<PostalAddress>,
    pub geopoint: Option<GeoPoint>,
    pub media_items: Vec<Media>,
    pub attachments: Vec<Media>,
    pub chat: Option<Box<Chat>>,
}

impl EventDay {
    /// Items running at `at`.
    #[must_use]
    pub fn items_at(&self, at: DateTime<Utc>) -> Vec<&EventDayItem> {
        self.items.iter().filter(|item| item.is_active_at(at)).collect()
    }
}

crate::impl_dao!(EventDay, "event_day", |this, r| {
    r.read("body", &mut this.body);
    r.read("date", &mut this.date);
    r.read("distribution", &mut this.distribution);
    r.read("items", &mut this.items);
    r.read("notes", &mut this.notes);
    r.read("title", &mut this.title);
    r.read("address", &mut this.address);
    r.read("geopoint", &mut this.geopoint);
    r.read("mediaItems", &mut this.media_items);
    r.read("attachments", &mut this.attachments);
    r.read("chat", &mut this.chat);
});

/// A scheduled slot within an [`EventDay`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EventDayItem {
    #[serde(flatten)]
    pub base: BaseObject,
    pub title: LocalizedString,
    pub subtitle: LocalizedString,
    pub distribution: Visibility,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub address: Option<PostalAddress>,
    pub geopoint: Option<GeoPoint>,
}

impl EventDayItem {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }
}

crate::impl_dao!(EventDayItem, "event_day_item", |this, r| {
    r.read("title", &mut this.title);
    r.read("subtitle", &mut this.subtitle);
    r.read("distribution", &mut this.distribution);
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("address", &mut this.address);
    r.read("geopoint", &mut this.geopoint);
});
