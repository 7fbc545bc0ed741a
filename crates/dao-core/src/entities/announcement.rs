use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Chat, Media, window_contains};
use crate::dao::BaseObject;
use crate::enums::Visibility;
use crate::types::LocalizedString;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Announcement {
    #[serde(flatten)]
    pub base: BaseObject,
    pub attachments: Vec<Media>,
    pub body: LocalizedString,
    pub chat: Option<Box<Chat>>,
    pub distribution: Visibility,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub media_items: Vec<Media>,
    pub subtitle: LocalizedString,
    pub title: LocalizedString,
}

impl Announcement {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }
}

crate::impl_dao!(Announcement, "announcement", |this, r| {
    r.read("attachments", &mut this.attachments);
    r.read("body", &mut this.body);
    r.read("chat", &mut this.chat);
    r.read("distribution", &mut this.distribution);
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("mediaItems", &mut this.media_items);
    r.read("subtitle", &mut this.subtitle);
    r.read("title", &mut this.title);
});
