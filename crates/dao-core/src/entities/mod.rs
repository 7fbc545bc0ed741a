//! Entity structs for every data object.
//!
//! Each entity embeds a flattened [`BaseObject`](crate::dao::BaseObject),
//! derives `Serialize`, `Deserialize`, and `JsonSchema` with `camelCase` keys,
//! and implements [`Dao`](crate::dao::Dao) through `impl_dao!`. Owned children
//! are held by value (`Vec<T>`, `Option<Box<T>>`); back-references to an
//! owning parent are stored as the parent's id.

use chrono::{DateTime, Utc};

mod account;
mod activity;
mod alert;
mod analytics;
mod announcement;
mod app_action;
mod application;
mod basket;
mod beacon;
mod card;
mod change_request;
mod chat;
mod document;
mod event;
mod faq;
mod media;
mod notification;
mod order;
mod place;
mod pricing;
mod product;
mod region;
mod section;
mod system;
mod transaction;
mod user;

pub use account::{Account, AccountLinkRequest};
pub use activity::{Activity, ActivityBlackout, ActivityType};
pub use alert::Alert;
pub use analytics::AnalyticsData;
pub use announcement::Announcement;
pub use app_action::{AppAction, AppActionColors, AppActionImages, AppActionStrings};
pub use application::{AppEvent, Application};
pub use basket::{Basket, BasketItem};
pub use beacon::Beacon;
pub use card::Card;
pub use change_request::{ChangeRequest, UserChangeRequest};
pub use chat::{Chat, ChatMessage};
pub use document::Document;
pub use event::{Event, EventDay, EventDayItem};
pub use faq::{Faq, FaqSection};
pub use media::Media;
pub use notification::Notification;
pub use order::{Order, OrderItem};
pub use place::{Place, PlaceEvent, PlaceHoliday, PlaceHours, PlaceStatus};
pub use pricing::{
    Pricing, PricingItem, PricingOverride, PricingPrice, PricingSeason, PricingTier,
};
pub use product::Product;
pub use region::{District, Region};
pub use section::Section;
pub use system::{System, SystemEndPoint, SystemStatus};
pub use transaction::Transaction;
pub use user::User;

/// Whether `at` lies in `[start, end]`. A missing bound is unbounded.
pub(crate) fn window_contains(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    at: DateTime<Utc>,
) -> bool {
    start.is_none_or(|start| start <= at) && end.is_none_or(|end| at <= end)
}
