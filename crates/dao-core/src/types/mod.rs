//! Value records embedded in entities. None of these carry an id or metadata.

mod analytics;
mod hours;
mod localized;
mod location;
mod metadata;
mod person;
mod price;
mod priority;
mod weekdays;

pub use analytics::AnalyticsNumbers;
pub use hours::{DailyHours, TimeOfDay};
pub use localized::{DEFAULT_LANGUAGE, LocalizedString};
pub use location::{GeoPoint, PostalAddress};
pub use metadata::Metadata;
pub use person::PersonName;
pub use price::Price;
pub use priority::Priority;
pub use weekdays::DayOfWeekFlags;
