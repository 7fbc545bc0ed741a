use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::enums::MediaType;
use crate::types::LocalizedString;

/// An image or video reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    #[serde(flatten)]
    pub base: BaseObject,
    pub path: String,
    pub preload_url: String,
    pub title: LocalizedString,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
}

impl Media {
    /// URL to show first: the preload URL when set, else the full URL.
    #[must_use]
    pub fn display_url(&self) -> &str {
        if self.preload_url.is_empty() {
            &self.url
        } else {
            &self.preload_url
        }
    }
}

crate::impl_dao!(Media, "media", |this, r| {
    r.read("path", &mut this.path);
    r.read("preloadUrl", &mut this.preload_url);
    r.read("title", &mut this.title);
    r.read("type", &mut this.media_type);
    r.read("url", &mut this.url);
});
