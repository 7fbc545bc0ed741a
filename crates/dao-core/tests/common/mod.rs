//! Realistic fixtures for every entity, shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use dao_core::dao::{BaseObject, Dao};
use dao_core::entities::*;
use dao_core::enums::*;
use dao_core::types::*;

/// Fixed instant so fixtures are reproducible.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn base(id: &str) -> BaseObject {
    let mut base = BaseObject::with_id(id);
    base.meta.created_by = "fixtures".into();
    base.meta.status = "active".into();
    base.meta.views = 3;
    base.meta.reaction_counts.insert("like".into(), 2);
    base
}

pub fn time(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

pub fn address() -> PostalAddress {
    PostalAddress {
        street: "100 Ocean Ave".into(),
        city: "Santa Cruz".into(),
        state: "CA".into(),
        postal_code: "95060".into(),
        country: "US".into(),
    }
}

pub fn analytics_data() -> AnalyticsData {
    AnalyticsData {
        base: base("analytics-1"),
        title: "Daily opens".into(),
        subtitle: "Last 7 days".into(),
        data: vec![AnalyticsNumbers::new(10.0, 12.0), AnalyticsNumbers::new(4.0, 7.5)],
    }
}

pub fn media() -> Media {
    Media {
        base: base("media-1"),
        path: "images/waves.png".into(),
        preload_url: "https://cdn.example.com/waves-small.png".into(),
        title: LocalizedString::new("Waves").with("es", "Olas"),
        media_type: MediaType::StaticImage,
        url: "https://cdn.example.com/waves.png".into(),
    }
}

pub fn document() -> Document {
    Document {
        base: base("document-1"),
        priority: Priority::HIGH,
        title: "Liability waiver".into(),
        url: "https://example.com/waiver.pdf".into(),
    }
}

pub fn notification() -> Notification {
    Notification {
        base: base("notification-1"),
        body: "Your booking is confirmed".into(),
        deep_link: "app://bookings/42".into(),
        title: "Booked".into(),
        notification_type: NotificationType::DeepLink,
    }
}

pub fn beacon() -> Beacon {
    Beacon {
        base: base("beacon-1"),
        accuracy: 1.75,
        code: "BCN-01".into(),
        distance: BeaconDistance::Near,
        major: 100,
        minor: 7,
        name: "Front desk".into(),
        range: "near".into(),
        rssi: -62,
    }
}

pub fn alert() -> Alert {
    Alert {
        base: base("alert-1"),
        name: "storm".into(),
        priority: Priority::HIGHEST,
        scope: AlertScope::Region,
        start_time: Some(epoch() - Duration::hours(2)),
        end_time: Some(epoch() + Duration::hours(6)),
        status: Status::BadWeather,
        tag_line: "Stay safe".into(),
        title: "Storm warning".into(),
        image_url: "https://cdn.example.com/storm.png".into(),
    }
}

pub fn app_event() -> AppEvent {
    AppEvent {
        base: base("app-event-1"),
        title: "Summer sale".into(),
        priority: Priority::LOW,
        start_time: Some(epoch() - Duration::days(1)),
        end_time: Some(epoch() + Duration::days(30)),
    }
}

pub fn application() -> Application {
    Application {
        base: base("application-1"),
        app_events: vec![app_event()],
    }
}

pub fn price(amount: f64, priority: Priority) -> Price {
    Price::new(amount, priority)
}

pub fn pricing_price() -> PricingPrice {
    PricingPrice {
        base: base("pricing-price-1"),
        prices: vec![
            price(15.5, Priority::NORMAL),
            Price {
                start_time: Some(time(17, 0)),
                end_time: Some(time(21, 0)),
                ..price(19.75, Priority::HIGH)
            },
        ],
    }
}

pub fn pricing_item() -> PricingItem {
    PricingItem {
        base: base("pricing-item-1"),
        price_default: Some(Box::new(pricing_price())),
        price_saturday: Some(Box::new(PricingPrice {
            base: base("pricing-price-sat"),
            prices: vec![price(22.0, Priority::NORMAL)],
        })),
        priority: Priority::NORMAL,
        ..PricingItem::default()
    }
}

pub fn pricing_season() -> PricingSeason {
    PricingSeason {
        base: base("pricing-season-1"),
        start_time: Some(epoch() - Duration::days(30)),
        end_time: Some(epoch() + Duration::days(60)),
        items: vec![pricing_item()],
        priority: Priority::NORMAL,
    }
}

pub fn pricing_override() -> PricingOverride {
    PricingOverride {
        base: base("pricing-override-1"),
        enabled: false,
        start_time: Some(epoch() - Duration::days(1)),
        end_time: Some(epoch() + Duration::days(1)),
        items: vec![PricingItem {
            base: base("pricing-item-override"),
            price_default: Some(Box::new(PricingPrice {
                base: base("pricing-price-override"),
                prices: vec![price(9.99, Priority::NORMAL)],
            })),
            ..PricingItem::default()
        }],
        priority: Priority::HIGH,
        title: "Flash sale".into(),
    }
}

pub fn pricing_tier() -> PricingTier {
    let mut data_strings = BTreeMap::new();
    data_strings.insert("blurb".to_string(), LocalizedString::new("Best value"));
    PricingTier {
        base: base("tier-standard"),
        data_strings,
        overrides: vec![pricing_override()],
        priority: Priority::NORMAL,
        seasons: vec![pricing_season()],
        title: "Standard".into(),
    }
}

pub fn pricing() -> Pricing {
    Pricing {
        base: base("pricing-1"),
        tiers: vec![pricing_tier()],
    }
}

pub fn activity_type() -> ActivityType {
    ActivityType {
        base: base("activity-type-1"),
        code: "SURF".into(),
        name: "Surfing".into(),
        pricing: Some(Box::new(pricing())),
    }
}

pub fn activity_blackout() -> ActivityBlackout {
    ActivityBlackout {
        base: base("blackout-1"),
        start_time: Some(epoch() + Duration::days(3)),
        end_time: Some(epoch() + Duration::days(4)),
        message: "Closed for maintenance".into(),
    }
}

pub fn activity() -> Activity {
    Activity {
        base: base("activity-1"),
        base_type: Some(Box::new(activity_type())),
        blackouts: vec![activity_blackout()],
        booking_start_time: Some(epoch() - Duration::days(10)),
        booking_end_time: Some(epoch() + Duration::days(90)),
        code: "SURF-AM".into(),
        name: "Morning surf".into(),
    }
}

pub fn place_status() -> PlaceStatus {
    PlaceStatus {
        base: base("place-status-1"),
        start_time: Some(epoch() - Duration::hours(1)),
        end_time: Some(epoch() + Duration::hours(1)),
        message: "Lifeguard training".into(),
        scope: Scope::Place,
        status: Status::Training,
    }
}

pub fn place_event() -> PlaceEvent {
    PlaceEvent {
        base: base("place-event-1"),
        name: "Private party".into(),
        event_type: "private".into(),
        start_date: Some(epoch() + Duration::days(2)),
        end_date: Some(epoch() + Duration::days(2) + Duration::hours(4)),
        time_zone: "America/Los_Angeles".into(),
    }
}

pub fn place_holiday() -> PlaceHoliday {
    PlaceHoliday {
        base: base("place-holiday-1"),
        date: Some(Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap()),
        hours: DailyHours::new(time(10, 0), time(14, 0)),
    }
}

pub fn place_hours() -> PlaceHours {
    let weekday = DailyHours::new(time(9, 0), time(17, 0));
    PlaceHours {
        base: base("place-hours-1"),
        monday: weekday,
        tuesday: weekday,
        wednesday: weekday,
        thursday: weekday,
        friday: weekday,
        saturday: DailyHours::new(time(8, 0), time(20, 0)),
        sunday: DailyHours::default(),
        events: vec![place_event()],
        holidays: vec![place_holiday()],
    }
}

pub fn place() -> Place {
    Place {
        base: base("place-1"),
        activities: vec![activity()],
        address: Some(address()),
        alerts: vec![alert()],
        announcements: Vec::new(),
        code: "SCZ".into(),
        events: vec![place_event()],
        geohashes: vec!["9q94".into(), "9q95".into()],
        geopoint: Some(GeoPoint::new(36.9741, -122.0308)),
        hours: Some(Box::new(place_hours())),
        name: "Santa Cruz Beach".into(),
        phone: "+1 831 555 0100".into(),
        pricing_tier_id: "tier-standard".into(),
        section_id: "section-1".into(),
        statuses: vec![place_status()],
        time_zone: "America/Los_Angeles".into(),
    }
}

pub fn section() -> Section {
    let mut root = Section {
        base: base("section-1"),
        name: "West".into(),
        places: vec![place()],
        pricing_tier_id: "tier-standard".into(),
        ..Section::default()
    };
    root.add_child(Section {
        base: base("section-2"),
        name: "Coast".into(),
        ..Section::default()
    });
    root
}

pub fn chat_message() -> ChatMessage {
    ChatMessage {
        base: base("chat-message-1"),
        body: "See you at 9".into(),
        chat_id: "chat-1".into(),
        media: Some(Box::new(media())),
    }
}

pub fn account() -> Account {
    Account {
        base: base("account-1"),
        name: PersonName::from_full_name("Ada King Lovelace"),
        avatar: Some(Box::new(media())),
        cards: vec![card()],
        dob: Some(Utc.with_ymd_and_hms(1990, 12, 10, 0, 0, 0).unwrap()),
        email_notifications: true,
        push_notifications: false,
        pricing_tier_id: "tier-standard".into(),
        users: Vec::new(),
    }
}

pub fn chat() -> Chat {
    let mut chat = Chat {
        base: base("chat-1"),
        participants: vec![account()],
        ..Chat::default()
    };
    chat.add_message(chat_message());
    chat
}

pub fn announcement() -> Announcement {
    Announcement {
        base: base("announcement-1"),
        attachments: vec![media()],
        body: "New hours start Monday".into(),
        chat: Some(Box::new(chat())),
        distribution: Visibility::Everyone,
        start_time: Some(epoch()),
        end_time: None,
        media_items: vec![media()],
        subtitle: "Summer schedule".into(),
        title: "Hours update".into(),
    }
}

pub fn transaction() -> Transaction {
    Transaction {
        base: base("transaction-1"),
        amount: 42.5,
        card: None,
        confirmation: "CONF-123".into(),
        order: None,
        tax: 3.72,
        tip: 5.0,
        transaction_type: "charge".into(),
    }
}

pub fn card() -> Card {
    Card {
        base: base("card-1"),
        billing_address: address(),
        card_holder_email: "ada@example.com".into(),
        card_holder_name: "Ada Lovelace".into(),
        card_holder_phone: "+1 555 0100".into(),
        card_number: "4111111111111234".into(),
        card_type: "visa".into(),
        is_default: true,
        expiration: Some(Utc.with_ymd_and_hms(2028, 1, 31, 0, 0, 0).unwrap()),
        nickname: "Travel".into(),
        pin_number: String::new(),
        transactions: vec![transaction()],
    }
}

pub fn product() -> Product {
    Product {
        base: base("product-1"),
        about: "Soft-top board".into(),
        media_items: vec![media()],
        pricing: Some(Box::new(pricing())),
        sku: "BRD-8FT".into(),
        title: "Board rental".into(),
    }
}

pub fn order_item() -> OrderItem {
    OrderItem {
        base: base("order-item-1"),
        account: None,
        order_id: "order-1".into(),
        place: None,
        product: Some(Box::new(product())),
        quantity: 2,
    }
}

pub fn order() -> Order {
    let mut order = Order {
        base: base("order-1"),
        account: Some(Box::new(account())),
        state: OrderState::Processing,
        subtotal: 39.0,
        tax: 3.5,
        total: 42.5,
        transaction: Some(Box::new(transaction())),
        ..Order::default()
    };
    order.add_item(order_item());
    order
}

pub fn basket_item() -> BasketItem {
    BasketItem {
        base: base("basket-item-1"),
        account: None,
        basket_id: "basket-1".into(),
        place: None,
        product: Some(Box::new(product())),
        quantity: 1,
    }
}

pub fn basket() -> Basket {
    let mut basket = Basket {
        base: base("basket-1"),
        account: Some(Box::new(account())),
        place: Some(Box::new(place())),
        ..Basket::default()
    };
    basket.add_item(basket_item());
    basket
}

pub fn user() -> User {
    User {
        base: base("user-1"),
        accounts: vec![account()],
        cards: vec![card()],
        consent: Some(epoch()),
        consent_by: "guardian-1".into(),
        dob: Some(Utc.with_ymd_and_hms(2008, 3, 1, 0, 0, 0).unwrap()),
        email: "kid@example.com".into(),
        favorites: vec![activity_type()],
        my_place: Some(Box::new(place())),
        name: PersonName::from_full_name("Sam Rivers"),
        phone: "+1 555 0101".into(),
        status: "active".into(),
        user_type: UserType::Youth,
        user_role: UserRole::PlaceStaff,
        visibility: Visibility::StaffCadets,
    }
}

pub fn account_link_request() -> AccountLinkRequest {
    AccountLinkRequest {
        base: base("link-request-1"),
        account: Some(Box::new(account())),
        user: Some(Box::new(user())),
        approved: None,
        approved_by: String::new(),
        requested: Some(epoch()),
    }
}

pub fn change_request() -> ChangeRequest {
    ChangeRequest {
        base: base("change-request-1"),
    }
}

pub fn user_change_request() -> UserChangeRequest {
    UserChangeRequest {
        base: base("user-change-request-1"),
        user: Some(Box::new(user())),
        requested_role: UserRole::PlaceAdmin,
    }
}

pub fn event_day_item() -> EventDayItem {
    EventDayItem {
        base: base("event-day-item-1"),
        title: "Heats".into(),
        subtitle: "Round one".into(),
        distribution: Visibility::Everyone,
        start_time: Some(epoch()),
        end_time: Some(epoch() + Duration::hours(3)),
        address: Some(address()),
        geopoint: Some(GeoPoint::new(36.95, -122.02)),
    }
}

pub fn event_day() -> EventDay {
    EventDay {
        base: base("event-day-1"),
        body: "Opening day".into(),
        date: Some(epoch()),
        distribution: Visibility::Everyone,
        items: vec![event_day_item()],
        notes: "Bring sunscreen".into(),
        title: "Day one".into(),
        address: Some(address()),
        geopoint: None,
        media_items: vec![media()],
        attachments: Vec::new(),
        chat: None,
    }
}

pub fn event() -> Event {
    Event {
        base: base("event-1"),
        body: "Annual contest".into(),
        days: vec![event_day()],
        distribution: Visibility::Everyone,
        enabled: true,
        title: "Surf Classic".into(),
        address: Some(address()),
        geopoint: Some(GeoPoint::new(36.95, -122.02)),
        media_items: vec![media()],
        attachments: vec![media()],
        chat: Some(Box::new(chat())),
    }
}

pub fn faq() -> Faq {
    Faq {
        base: base("faq-1"),
        question: "Do I need a wetsuit?".into(),
        answer: "We provide one.".into(),
        section_id: "faq-section-1".into(),
    }
}

pub fn faq_section() -> FaqSection {
    let mut section = FaqSection {
        base: base("faq-section-1"),
        code: "GEAR".into(),
        icon: "wetsuit".into(),
        title: "Gear".into(),
        ..FaqSection::default()
    };
    section.add_faq(faq());
    section
}

pub fn system_status() -> SystemStatus {
    let mut failure_codes = BTreeMap::new();
    failure_codes.insert("503".to_string(), AnalyticsNumbers::new(2.0, 1.0));
    SystemStatus {
        base: base("system-status-1"),
        failure_codes,
        failure_rate: AnalyticsNumbers::new(0.02, 0.01),
        state: SystemState::Yellow,
        state_override: SystemState::None,
        total_points: AnalyticsNumbers::new(1200.0, 800.0),
    }
}

pub fn system_end_point() -> SystemEndPoint {
    SystemEndPoint {
        base: base("end-point-1"),
        current_state: Some(Box::new(system_status())),
        history_state: vec![system_status()],
        name: "bookings-api".into(),
        system_id: "system-1".into(),
    }
}

pub fn system() -> System {
    let mut system = System {
        base: base("system-1"),
        current_state: Some(Box::new(system_status())),
        history_state: vec![system_status()],
        message: "Degraded".into(),
        name: "Backend".into(),
        ..System::default()
    };
    system.add_end_point(system_end_point());
    system
}

pub fn app_action_colors() -> AppActionColors {
    AppActionColors {
        base: base("app-action-colors-1"),
        cancel_button_background: Some("#eeeeee".into()),
        cancel_button_text: Some("#333333".into()),
        ok_button_background: Some("#0a84ff".into()),
        ok_button_text: None,
    }
}

pub fn app_action_images() -> AppActionImages {
    AppActionImages {
        base: base("app-action-images-1"),
        top_url: "https://cdn.example.com/storm.png".into(),
    }
}

pub fn app_action_strings() -> AppActionStrings {
    AppActionStrings {
        base: base("app-action-strings-1"),
        body: LocalizedString::new("High surf this afternoon").with("es", "Oleaje alto esta tarde"),
        cancel_label: "Later".into(),
        disclaimer: "Conditions change quickly".into(),
        okay_label: "Got it".into(),
        sub_title: "West beaches".into(),
        title: "Surf advisory".into(),
    }
}

pub fn app_action() -> AppAction {
    AppAction {
        base: base("app-action-1"),
        action_type: AppActionType::Drawer,
        colors: Some(Box::new(app_action_colors())),
        deep_link: "app://alerts/surf".into(),
        images: Some(Box::new(app_action_images())),
        strings: Some(Box::new(app_action_strings())),
    }
}

pub fn district() -> District {
    District {
        base: base("district-1"),
        name: "Coast".into(),
        places: vec![place()],
        region_id: "region-1".into(),
    }
}

pub fn region() -> Region {
    let mut region = Region {
        base: base("region-1"),
        name: LocalizedString::new("West").with("es", "Oeste"),
        ..Region::default()
    };
    region.add_district(district());
    region
}

/// Recursive JSON comparison that allows a one-second drift between
/// timestamps and a small epsilon between floats.
pub fn assert_json_close(left: &serde_json::Value, right: &serde_json::Value, path: &str) {
    use serde_json::Value;

    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            let mut keys: Vec<&String> = l.keys().chain(r.keys()).collect();
            keys.sort();
            keys.dedup();
            for key in keys {
                let lv = l.get(key).unwrap_or(&Value::Null);
                let rv = r.get(key).unwrap_or(&Value::Null);
                assert_json_close(lv, rv, &format!("{path}.{key}"));
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            assert_eq!(l.len(), r.len(), "array length differs at {path}");
            for (i, (lv, rv)) in l.iter().zip(r).enumerate() {
                assert_json_close(lv, rv, &format!("{path}[{i}]"));
            }
        }
        (Value::Number(l), Value::Number(r)) => {
            let (l, r) = (l.as_f64().unwrap(), r.as_f64().unwrap());
            assert!((l - r).abs() <= 1e-9 * l.abs().max(1.0), "number differs at {path}: {l} vs {r}");
        }
        (Value::String(l), Value::String(r)) => {
            match (
                DateTime::parse_from_rfc3339(l),
                DateTime::parse_from_rfc3339(r),
            ) {
                (Ok(l), Ok(r)) => assert!(
                    (l - r).num_seconds().abs() <= 1,
                    "timestamp differs at {path}: {l} vs {r}"
                ),
                _ => assert_eq!(l, r, "string differs at {path}"),
            }
        }
        _ => assert_eq!(left, right, "value differs at {path}"),
    }
}
