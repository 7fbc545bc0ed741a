//! Price resolution across tiers, overrides, seasons, items, and prices.

mod common;

use chrono::{Duration, TimeZone, Utc};
use dao_core::dao::Dao;
use dao_core::entities::{Pricing, PricingItem, PricingPrice, PricingSeason, PricingTier};
use dao_core::types::{Price, Priority};
use serde_json::json;

fn amount(price: Option<Price>) -> Option<f64> {
    price.map(|p| p.price)
}

fn flat(id: &str, value: f64, priority: Priority) -> PricingItem {
    PricingItem {
        price_default: Some(Box::new(PricingPrice {
            prices: vec![Price::new(value, Priority::NORMAL)],
            ..PricingPrice::with_id(format!("{id}-price"))
        })),
        priority,
        ..PricingItem::with_id(id)
    }
}

#[test]
fn pricing_price_parses_string_free_dictionary() {
    let data = json!({"id": "x", "prices": [{"price": 15.50, "priority": 50}]});
    let parsed = PricingPrice::from_dictionary(data.as_object().unwrap()).unwrap();
    assert_eq!(parsed.id(), "x");
    assert_eq!(parsed.prices.len(), 1);
    assert!((parsed.prices[0].price - 15.50).abs() < f64::EPSILON);
    assert_eq!(parsed.prices[0].priority, Priority::NORMAL);
}

#[test]
fn pricing_price_prefers_highest_priority_active_price() {
    let fixture = common::pricing_price();
    let afternoon = Utc.with_ymd_and_hms(2024, 6, 14, 13, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 6, 14, 18, 0, 0).unwrap();
    assert_eq!(amount(fixture.price_at(afternoon)), Some(15.5));
    assert_eq!(amount(fixture.price_at(evening)), Some(19.75));
    assert_eq!(PricingPrice::default().price_at(evening), None);
}

#[test]
fn equal_priorities_keep_list_order() {
    let price = PricingPrice {
        prices: vec![Price::new(1.0, Priority::HIGH), Price::new(2.0, Priority::HIGH)],
        ..PricingPrice::default()
    };
    assert_eq!(amount(price.price_at(common::epoch())), Some(1.0));
}

#[test]
fn pricing_item_uses_weekday_price_when_available() {
    let item = common::pricing_item();
    // 2024-06-15 is a Saturday.
    let saturday = common::epoch();
    let friday = saturday - Duration::days(1);
    assert_eq!(amount(item.price_at(saturday)), Some(22.0));
    assert_eq!(amount(item.price_at(friday)), Some(15.5));
}

#[test]
fn season_picks_highest_priority_item_with_a_price() {
    let season = PricingSeason {
        items: vec![
            flat("low", 5.0, Priority::LOW),
            PricingItem {
                priority: Priority::HIGHEST,
                ..PricingItem::with_id("empty")
            },
            flat("high", 8.0, Priority::HIGH),
        ],
        ..PricingSeason::default()
    };
    let at = common::epoch();
    assert_eq!(season.item_at(at).map(|i| i.id().to_string()), Some("high".into()));
    assert_eq!(amount(season.price_at(at)), Some(8.0));
}

#[test]
fn tier_uses_enabled_override_before_seasons() {
    let mut tier = common::pricing_tier();
    let at = common::epoch() - Duration::days(1) + Duration::hours(1);

    // The fixture override is disabled, so the season price applies.
    assert_eq!(amount(tier.price_at(at)), Some(15.5));
    assert!(tier.override_title_at(at).is_none());

    tier.overrides[0].enabled = true;
    assert_eq!(amount(tier.price_at(at)), Some(9.99));
    assert_eq!(tier.override_title_at(at).map(|t| t.text()), Some("Flash sale"));

    // Outside the override window the season applies again.
    let later = common::epoch() + Duration::days(5);
    assert_eq!(amount(tier.price_at(later)), Some(15.5));
}

#[test]
fn tier_skips_inactive_seasons() {
    let tier = PricingTier {
        seasons: vec![
            PricingSeason {
                end_time: Some(common::epoch() - Duration::days(1)),
                items: vec![flat("old", 1.0, Priority::NORMAL)],
                priority: Priority::HIGHEST,
                ..PricingSeason::with_id("old")
            },
            PricingSeason {
                items: vec![flat("current", 2.0, Priority::NORMAL)],
                priority: Priority::LOW,
                ..PricingSeason::with_id("current")
            },
        ],
        ..PricingTier::default()
    };
    assert_eq!(amount(tier.price_at(common::epoch())), Some(2.0));
    assert_eq!(tier.season("current").map(Dao::id), Some("current"));
    assert_eq!(tier.season("missing").map(Dao::id), Some("old"));
}

#[test]
fn pricing_resolves_tier_by_id_or_falls_back_to_first() {
    let mut pricing = common::pricing();
    pricing.tiers.push(PricingTier {
        priority: Priority::LOW,
        title: "Member".into(),
        ..PricingTier::with_id("tier-member")
    });

    assert_eq!(pricing.tier("tier-member").map(|t| t.title.text()), Some("Member"));
    assert_eq!(pricing.tier("nope").map(Dao::id), Some("tier-standard"));
    assert_eq!(
        pricing.data_string("tier-standard", "blurb").map(|s| s.text()),
        Some("Best value")
    );
    assert!(pricing.data_strings("tier-member").is_empty());
    assert!(Pricing::default().tier("any").is_none());
    assert!(Pricing::default().data_strings("any").is_empty());
}

#[test]
fn duplicate_tier_ids_resolve_to_highest_priority() {
    let pricing = Pricing {
        tiers: vec![
            PricingTier {
                priority: Priority::LOW,
                title: "low".into(),
                ..PricingTier::with_id("dup")
            },
            PricingTier {
                priority: Priority::HIGH,
                title: "high".into(),
                ..PricingTier::with_id("dup")
            },
        ],
        ..Pricing::default()
    };
    assert_eq!(pricing.tier("dup").map(|t| t.title.text()), Some("high"));
}
