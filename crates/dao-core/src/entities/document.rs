use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::types::{LocalizedString, Priority};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    #[serde(flatten)]
    pub base: BaseObject,
    pub priority: Priority,
    pub title: LocalizedString,
    pub url: String,
}

crate::impl_dao!(Document, "document", |this, r| {
    r.read("priority", &mut this.priority);
    r.read("title", &mut this.title);
    r.read("url", &mut this.url);
});
