//! Tiered, seasonal pricing.
//!
//! Resolution for a tier at time `t`: the highest-priority enabled override
//! active at `t` that yields a price, otherwise the highest-priority season
//! active at `t` that yields one. Within a season or override the
//! highest-priority item with a price wins; an item prefers its weekday price
//! over its default; a [`PricingPrice`] picks its highest-priority active
//! [`Price`]. Ties keep list order.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc, Weekday};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::window_contains;
use crate::dao::BaseObject;
use crate::types::{LocalizedString, Price, Priority};

/// First element with the highest priority.
fn highest<'a, T: 'a>(
    items: impl Iterator<Item = &'a T>,
    priority: impl Fn(&T) -> Priority,
) -> Option<&'a T> {
    items.min_by_key(|item| Reverse(priority(*item)))
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Root of a pricing tree: a set of tiers addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    #[serde(flatten)]
    pub base: BaseObject,
    pub tiers: Vec<PricingTier>,
}

impl Pricing {
    /// Highest-priority tier with `tier_id`, else the first tier.
    #[must_use]
    pub fn tier(&self, tier_id: &str) -> Option<&PricingTier> {
        highest(self.tiers.iter().filter(|tier| tier.base.id == tier_id), |tier| tier.priority)
            .or_else(|| self.tiers.first())
    }

    #[must_use]
    pub fn price_at(&self, tier_id: &str, at: DateTime<Utc>) -> Option<Price> {
        self.tier(tier_id)?.price_at(at)
    }

    #[must_use]
    pub fn data_string(&self, tier_id: &str, key: &str) -> Option<&LocalizedString> {
        self.tier(tier_id)?.data_strings.get(key)
    }

    /// All data strings of the resolved tier; empty when there are no tiers.
    #[must_use]
    pub fn data_strings(&self, tier_id: &str) -> BTreeMap<String, LocalizedString> {
        self.tier(tier_id)
            .map(|tier| tier.data_strings.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn override_title_at(&self, tier_id: &str, at: DateTime<Utc>) -> Option<&LocalizedString> {
        self.tier(tier_id)?.override_title_at(at)
    }
}

crate::impl_dao!(Pricing, "pricing", |this, r| {
    r.read("tiers", &mut this.tiers);
});

// ---------------------------------------------------------------------------
// PricingTier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(flatten)]
    pub base: BaseObject,
    /// Tier-specific display strings, e.g. a marketing blurb.
    pub data_strings: BTreeMap<String, LocalizedString>,
    pub overrides: Vec<PricingOverride>,
    pub priority: Priority,
    pub seasons: Vec<PricingSeason>,
    pub title: LocalizedString,
}

impl PricingTier {
    #[must_use]
    pub fn price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        self.override_price_at(at).or_else(|| self.season_price_at(at))
    }

    fn override_price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        let mut active: Vec<&PricingOverride> =
            self.overrides.iter().filter(|o| o.is_active_at(at)).collect();
        active.sort_by_key(|o| Reverse(o.priority));
        active.into_iter().find_map(|o| o.price_at(at))
    }

    fn season_price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        let mut active: Vec<&PricingSeason> =
            self.seasons.iter().filter(|s| s.is_active_at(at)).collect();
        active.sort_by_key(|s| Reverse(s.priority));
        active.into_iter().find_map(|s| s.price_at(at))
    }

    /// Highest-priority season with `season_id`, else the first season.
    #[must_use]
    pub fn season(&self, season_id: &str) -> Option<&PricingSeason> {
        highest(self.seasons.iter().filter(|s| s.base.id == season_id), |s| s.priority)
            .or_else(|| self.seasons.first())
    }

    /// Highest-priority override with `override_id`, else the first override.
    #[must_use]
    pub fn override_for(&self, override_id: &str) -> Option<&PricingOverride> {
        highest(self.overrides.iter().filter(|o| o.base.id == override_id), |o| o.priority)
            .or_else(|| self.overrides.first())
    }

    /// Title of the highest-priority override active at `at`.
    #[must_use]
    pub fn override_title_at(&self, at: DateTime<Utc>) -> Option<&LocalizedString> {
        highest(self.overrides.iter().filter(|o| o.is_active_at(at)), |o| o.priority)
            .map(|o| &o.title)
    }
}

crate::impl_dao!(PricingTier, "pricing_tier", |this, r| {
    r.read("dataStrings", &mut this.data_strings);
    r.read("overrides", &mut this.overrides);
    r.read("priority", &mut this.priority);
    r.read("seasons", &mut this.seasons);
    r.read("title", &mut this.title);
});

// ---------------------------------------------------------------------------
// PricingSeason
// ---------------------------------------------------------------------------

/// A date range with its own price list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingSeason {
    #[serde(flatten)]
    pub base: BaseObject,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub items: Vec<PricingItem>,
    pub priority: Priority,
}

impl PricingSeason {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        window_contains(self.start_time, self.end_time, at)
    }

    /// Highest-priority item that has a price at `at`.
    #[must_use]
    pub fn item_at(&self, at: DateTime<Utc>) -> Option<&PricingItem> {
        item_with_price(&self.items, at)
    }

    #[must_use]
    pub fn price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        self.item_at(at)?.price_at(at)
    }
}

crate::impl_dao!(PricingSeason, "pricing_season", |this, r| {
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("items", &mut this.items);
    r.read("priority", &mut this.priority);
});

// ---------------------------------------------------------------------------
// PricingOverride
// ---------------------------------------------------------------------------

/// A switchable exception that beats every season while enabled and active.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingOverride {
    #[serde(flatten)]
    pub base: BaseObject,
    pub enabled: bool,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub items: Vec<PricingItem>,
    pub priority: Priority,
    pub title: LocalizedString,
}

impl PricingOverride {
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.enabled && window_contains(self.start_time, self.end_time, at)
    }

    /// Highest-priority item that has a price at `at`.
    #[must_use]
    pub fn item_at(&self, at: DateTime<Utc>) -> Option<&PricingItem> {
        item_with_price(&self.items, at)
    }

    #[must_use]
    pub fn price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        self.item_at(at)?.price_at(at)
    }
}

crate::impl_dao!(PricingOverride, "pricing_override", |this, r| {
    r.read("enabled", &mut this.enabled);
    r.read("startTime", &mut this.start_time);
    r.read("endTime", &mut this.end_time);
    r.read("items", &mut this.items);
    r.read("priority", &mut this.priority);
    r.read("title", &mut this.title);
});

fn item_with_price(items: &[PricingItem], at: DateTime<Utc>) -> Option<&PricingItem> {
    highest(items.iter().filter(|item| item.price_at(at).is_some()), |item| item.priority)
}

// ---------------------------------------------------------------------------
// PricingItem
// ---------------------------------------------------------------------------

/// A default price plus optional per-weekday prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingItem {
    #[serde(flatten)]
    pub base: BaseObject,
    pub price_default: Option<Box<PricingPrice>>,
    pub price_monday: Option<Box<PricingPrice>>,
    pub price_tuesday: Option<Box<PricingPrice>>,
    pub price_wednesday: Option<Box<PricingPrice>>,
    pub price_thursday: Option<Box<PricingPrice>>,
    pub price_friday: Option<Box<PricingPrice>>,
    pub price_saturday: Option<Box<PricingPrice>>,
    pub price_sunday: Option<Box<PricingPrice>>,
    pub priority: Priority,
}

impl PricingItem {
    #[must_use]
    pub fn price_on(&self, weekday: Weekday) -> Option<&PricingPrice> {
        let slot = match weekday {
            Weekday::Mon => &self.price_monday,
            Weekday::Tue => &self.price_tuesday,
            Weekday::Wed => &self.price_wednesday,
            Weekday::Thu => &self.price_thursday,
            Weekday::Fri => &self.price_friday,
            Weekday::Sat => &self.price_saturday,
            Weekday::Sun => &self.price_sunday,
        };
        slot.as_deref()
    }

    /// The weekday price when it has an active entry at `at`, else the
    /// default price.
    #[must_use]
    pub fn price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        self.price_on(at.weekday())
            .and_then(|weekday| weekday.price_at(at))
            .or_else(|| self.price_default.as_ref()?.price_at(at))
    }
}

crate::impl_dao!(PricingItem, "pricing_item", |this, r| {
    r.read("priceDefault", &mut this.price_default);
    r.read("priceMonday", &mut this.price_monday);
    r.read("priceTuesday", &mut this.price_tuesday);
    r.read("priceWednesday", &mut this.price_wednesday);
    r.read("priceThursday", &mut this.price_thursday);
    r.read("priceFriday", &mut this.price_friday);
    r.read("priceSaturday", &mut this.price_saturday);
    r.read("priceSunday", &mut this.price_sunday);
    r.read("priority", &mut this.priority);
});

// ---------------------------------------------------------------------------
// PricingPrice
// ---------------------------------------------------------------------------

/// Candidate prices for one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPrice {
    #[serde(flatten)]
    pub base: BaseObject,
    pub prices: Vec<Price>,
}

impl PricingPrice {
    /// Highest-priority price active at `at`.
    #[must_use]
    pub fn price_at(&self, at: DateTime<Utc>) -> Option<Price> {
        highest(self.prices.iter().filter(|price| price.is_active(at)), |price| price.priority)
            .cloned()
    }
}

crate::impl_dao!(PricingPrice, "pricing_price", |this, r| {
    r.read("prices", &mut this.prices);
});
