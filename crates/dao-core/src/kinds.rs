//! Runtime registry of entity kinds.
//!
//! Lets tooling dispatch on a kind name (`"pricing_tier"`) without knowing the
//! concrete type at compile time.

use std::fmt;
use std::str::FromStr;

use schemars::{Schema, schema_for};

use crate::codec;
use crate::dao::{BaseObject, Dao};
use crate::dictionary::DataDictionary;
use crate::entities::*;
use crate::errors::CoreError;
use crate::ids::IdGenerator;

macro_rules! entity_kinds {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// Every concrete data-object type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EntityKind {
            $($variant),+
        }

        impl EntityKind {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// `snake_case` kind name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => <$ty as Dao>::KIND),+
                }
            }

            /// Lenient parse into the kind's type, then back to its canonical
            /// dictionary. `None` for an empty input.
            #[must_use]
            pub fn normalize_with(
                self,
                data: &DataDictionary,
                ids: &dyn IdGenerator,
            ) -> Option<DataDictionary> {
                match self {
                    $(Self::$variant => {
                        <$ty>::from_dictionary_with(data, ids).map(|entity| entity.as_dictionary())
                    })+
                }
            }

            /// Strict decode into the kind's type, then back to its canonical
            /// dictionary.
            pub fn decode_value(self, value: serde_json::Value) -> Result<DataDictionary, CoreError> {
                match self {
                    $(Self::$variant => {
                        codec::decode_value::<$ty>(value).map(|entity| entity.as_dictionary())
                    })+
                }
            }

            /// Lenient parse of both sides followed by the difference check.
            /// `None` when either side is empty.
            #[must_use]
            pub fn differs(
                self,
                lhs: &DataDictionary,
                rhs: &DataDictionary,
                ids: &dyn IdGenerator,
            ) -> Option<bool> {
                match self {
                    $(Self::$variant => {
                        let lhs = <$ty>::from_dictionary_with(lhs, ids)?;
                        let rhs = <$ty>::from_dictionary_with(rhs, ids)?;
                        Some(lhs.is_diff_from(Some(&rhs)))
                    })+
                }
            }

            #[must_use]
            pub fn json_schema(self) -> Schema {
                match self {
                    $(Self::$variant => schema_for!($ty)),+
                }
            }
        }
    };
}

entity_kinds! {
    BaseObject => BaseObject,
    Account => Account,
    AccountLinkRequest => AccountLinkRequest,
    Activity => Activity,
    ActivityBlackout => ActivityBlackout,
    ActivityType => ActivityType,
    Alert => Alert,
    AnalyticsData => AnalyticsData,
    Announcement => Announcement,
    AppAction => AppAction,
    AppActionColors => AppActionColors,
    AppActionImages => AppActionImages,
    AppActionStrings => AppActionStrings,
    AppEvent => AppEvent,
    Application => Application,
    Basket => Basket,
    BasketItem => BasketItem,
    Beacon => Beacon,
    Card => Card,
    ChangeRequest => ChangeRequest,
    Chat => Chat,
    ChatMessage => ChatMessage,
    District => District,
    Document => Document,
    Event => Event,
    EventDay => EventDay,
    EventDayItem => EventDayItem,
    Faq => Faq,
    FaqSection => FaqSection,
    Media => Media,
    Notification => Notification,
    Order => Order,
    OrderItem => OrderItem,
    Place => Place,
    PlaceEvent => PlaceEvent,
    PlaceHoliday => PlaceHoliday,
    PlaceHours => PlaceHours,
    PlaceStatus => PlaceStatus,
    Pricing => Pricing,
    PricingItem => PricingItem,
    PricingOverride => PricingOverride,
    PricingPrice => PricingPrice,
    PricingSeason => PricingSeason,
    PricingTier => PricingTier,
    Product => Product,
    Region => Region,
    Section => Section,
    System => System,
    SystemEndPoint => SystemEndPoint,
    SystemStatus => SystemStatus,
    Transaction => Transaction,
    User => User,
    UserChangeRequest => UserChangeRequest,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    /// Accepts the `snake_case` name, ignoring ASCII case and treating `-` as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}
