use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Media, Pricing};
use crate::dao::BaseObject;
use crate::types::{LocalizedString, Price};

/// A purchasable item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseObject,
    pub about: LocalizedString,
    pub media_items: Vec<Media>,
    pub pricing: Option<Box<Pricing>>,
    pub sku: String,
    pub title: LocalizedString,
}

impl Product {
    /// Price for `tier_id` at `at`, if the product has pricing.
    #[must_use]
    pub fn price_at(&self, tier_id: &str, at: DateTime<Utc>) -> Option<Price> {
        self.pricing.as_ref()?.price_at(tier_id, at)
    }
}

crate::impl_dao!(Product, "product", |this, r| {
    r.read("about", &mut this.about);
    r.read("mediaItems", &mut this.media_items);
    r.read("pricing", &mut this.pricing);
    r.read("sku", &mut this.sku);
    r.read("title", &mut this.title);
});
