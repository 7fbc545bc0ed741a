use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::enums::NotificationType;
use crate::types::LocalizedString;

/// A push or in-app message, optionally linking into the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Notification {
    #[serde(flatten)]
    pub base: BaseObject,
    pub body: LocalizedString,
    pub deep_link: String,
    pub title: LocalizedString,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

crate::impl_dao!(Notification, "notification", |this, r| {
    r.read("body", &mut this.body);
    r.read("deepLink", &mut this.deep_link);
    r.read("title", &mut this.title);
    r.read("type", &mut this.notification_type);
});
