//! Enumerated field values shared across entities.
//!
//! String-valued enums serialize in `camelCase` via `#[serde(rename_all = "camelCase")]`
//! and expose the same spelling through `as_str()`. [`UserRole`] is the one
//! integer-valued enum: it serializes as its numeric rank.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dictionary::FromData;

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

/// Audience an item is shown to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    AdultsOnly,
    #[default]
    Everyone,
    StaffCadets,
    StaffOnly,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdultsOnly => "adultsOnly",
            Self::Everyone => "everyone",
            Self::StaffCadets => "staffCadets",
            Self::StaffOnly => "staffOnly",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Operating status of a place or alert.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    BadWeather,
    Closed,
    ComingSoon,
    GrandOpening,
    Hidden,
    Holiday,
    Maintenance,
    #[default]
    Open,
    PrivateEvent,
    TempClosed,
    Training,
}

impl Status {
    /// Whether visitors are admitted under this status.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::GrandOpening | Self::Holiday)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadWeather => "badWeather",
            Self::Closed => "closed",
            Self::ComingSoon => "comingSoon",
            Self::GrandOpening => "grandOpening",
            Self::Hidden => "hidden",
            Self::Holiday => "holiday",
            Self::Maintenance => "maintenance",
            Self::Open => "open",
            Self::PrivateEvent => "privateEvent",
            Self::TempClosed => "tempClosed",
            Self::Training => "training",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    #[default]
    Unknown,
    StaticImage,
    AnimatedImage,
    Video,
}

impl MediaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::StaticImage => "staticImage",
            Self::AnimatedImage => "animatedImage",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OrderState
// ---------------------------------------------------------------------------

/// Lifecycle of an order.
///
/// ```text
/// created → pending → processing → completed → refunded
///                                → cancelled
///                                → fraudulent
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum OrderState {
    Cancelled,
    Completed,
    #[default]
    Created,
    Fraudulent,
    Pending,
    Processing,
    Refunded,
    Unknown,
}

impl OrderState {
    /// No further transitions are expected.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Cancelled | Self::Fraudulent | Self::Refunded)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Created => "created",
            Self::Fraudulent => "fraudulent",
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Refunded => "refunded",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AlertScope
// ---------------------------------------------------------------------------

/// How far an alert reaches. Ordered from narrowest to widest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum AlertScope {
    Place,
    District,
    Region,
    #[default]
    All,
}

impl AlertScope {
    pub const ALL: [Self; 4] = [Self::Place, Self::District, Self::Region, Self::All];

    /// Position in narrowest-to-widest order, the legacy integer encoding.
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        match self {
            Self::Place => 0,
            Self::District => 1,
            Self::Region => 2,
            Self::All => 3,
        }
    }

    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.ordinal() == ordinal)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::District => "district",
            Self::Region => "region",
            Self::All => "all",
        }
    }
}

impl fmt::Display for AlertScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationType
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum NotificationType {
    #[default]
    Unknown,
    Alert,
    DeepLink,
    DeepLinkAuto,
}

impl NotificationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Alert => "alert",
            Self::DeepLink => "deepLink",
            Self::DeepLinkAuto => "deepLinkAuto",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserType
// ---------------------------------------------------------------------------

/// Age bracket of a user. `Unknown` serializes as the empty string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum UserType {
    #[default]
    #[serde(rename = "")]
    Unknown,
    Child,
    Youth,
    PendingAdult,
    Adult,
}

impl UserType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Child => "child",
            Self::Youth => "youth",
            Self::PendingAdult => "pendingAdult",
            Self::Adult => "adult",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// Administrative reach. Ordered from narrowest to widest.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    #[default]
    Place,
    District,
    Region,
    All,
}

impl Scope {
    pub const ALL: [Self; 4] = [Self::Place, Self::District, Self::Region, Self::All];

    /// Numeric rank used by legacy integer encodings.
    #[must_use]
    pub const fn rank(self) -> i64 {
        match self {
            Self::Place => 1000,
            Self::District => 3000,
            Self::Region => 5000,
            Self::All => 10000,
        }
    }

    #[must_use]
    pub fn from_rank(rank: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|scope| scope.rank() == rank)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Place => "place",
            Self::District => "district",
            Self::Region => "region",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Permission level. Higher ranks include the rights of lower ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserRole {
    Blocked,
    #[default]
    EndUser,
    PlaceViewer,
    PlaceStaff,
    PlaceOperation,
    PlaceAdmin,
    DistrictViewer,
    DistrictStaff,
    DistrictOperation,
    DistrictAdmin,
    RegionalViewer,
    RegionalStaff,
    RegionalOperation,
    RegionalAdmin,
    SupportViewer,
    SupportStaff,
    SupportOperation,
    SupportAdmin,
    SuperUser,
}

impl UserRole {
    pub const ALL: [Self; 19] = [
        Self::Blocked,
        Self::EndUser,
        Self::PlaceViewer,
        Self::PlaceStaff,
        Self::PlaceOperation,
        Self::PlaceAdmin,
        Self::DistrictViewer,
        Self::DistrictStaff,
        Self::DistrictOperation,
        Self::DistrictAdmin,
        Self::RegionalViewer,
        Self::RegionalStaff,
        Self::RegionalOperation,
        Self::RegionalAdmin,
        Self::SupportViewer,
        Self::SupportStaff,
        Self::SupportOperation,
        Self::SupportAdmin,
        Self::SuperUser,
    ];

    /// Numeric rank, as stored.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Blocked => -1,
            Self::EndUser => 0,
            Self::PlaceViewer => 6_000,
            Self::PlaceStaff => 7_000,
            Self::PlaceOperation => 8_000,
            Self::PlaceAdmin => 9_000,
            Self::DistrictViewer => 60_000,
            Self::DistrictStaff => 70_000,
            Self::DistrictOperation => 80_000,
            Self::DistrictAdmin => 90_000,
            Self::RegionalViewer => 100_000,
            Self::RegionalStaff => 200_000,
            Self::RegionalOperation => 300_000,
            Self::RegionalAdmin => 400_000,
            Self::SupportViewer => 500_000,
            Self::SupportStaff => 600_000,
            Self::SupportOperation => 700_000,
            Self::SupportAdmin => 800_000,
            Self::SuperUser => 900_000,
        }
    }

    #[must_use]
    pub fn from_value(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.value() == value)
    }

    /// Display code, e.g. `"RegionalAdmin"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Blocked => "Blocked",
            Self::EndUser => "EndUser",
            Self::PlaceViewer => "PlaceViewer",
            Self::PlaceStaff => "PlaceStaff",
            Self::PlaceOperation => "PlaceOperation",
            Self::PlaceAdmin => "PlaceAdmin",
            Self::DistrictViewer => "DistrictViewer",
            Self::DistrictStaff => "DistrictStaff",
            Self::DistrictOperation => "DistrictOperation",
            Self::DistrictAdmin => "DistrictAdmin",
            Self::RegionalViewer => "RegionalViewer",
            Self::RegionalStaff => "RegionalStaff",
            Self::RegionalOperation => "RegionalOperation",
            Self::RegionalAdmin => "RegionalAdmin",
            Self::SupportViewer => "SupportViewer",
            Self::SupportStaff => "SupportStaff",
            Self::SupportOperation => "SupportOperation",
            Self::SupportAdmin => "SupportAdmin",
            Self::SuperUser => "SuperUser",
        }
    }

    /// Case-insensitive inverse of [`UserRole::code`]. Unknown codes map to
    /// `EndUser`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(code.trim()))
            .unwrap_or_default()
    }

    /// Whether this role has administrative visibility at `scope`.
    #[must_use]
    pub const fn is_admin(self, scope: Scope) -> bool {
        let floor = match scope {
            Scope::All => Self::SupportViewer,
            Scope::Region => Self::RegionalViewer,
            Scope::District => Self::DistrictViewer,
            Scope::Place => Self::PlaceViewer,
        };
        self.value() >= floor.value()
    }

    #[must_use]
    pub const fn is_super_user(self) -> bool {
        matches!(self, Self::SuperUser)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown user role {value}")))
    }
}

impl JsonSchema for UserRole {
    fn schema_name() -> Cow<'static, str> {
        "UserRole".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let values: Vec<i64> = Self::ALL.iter().map(|role| role.value()).collect();
        json_schema!({
            "type": "integer",
            "enum": values,
        })
    }
}

// ---------------------------------------------------------------------------
// SystemState
// ---------------------------------------------------------------------------

/// Health colour of a monitored system.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum SystemState {
    None,
    #[default]
    Green,
    Orange,
    Red,
    Yellow,
}

impl SystemState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BeaconDistance
// ---------------------------------------------------------------------------

/// Coarse proximity bucket reported for a beacon.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum BeaconDistance {
    #[default]
    Unknown,
    Immediate,
    Near,
    Far,
}

impl BeaconDistance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Immediate => "immediate",
            Self::Near => "near",
            Self::Far => "far",
        }
    }
}

impl fmt::Display for BeaconDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AppActionType
// ---------------------------------------------------------------------------

/// How an in-app action is presented.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum AppActionType {
    Drawer,
    FullScreen,
    #[default]
    Popup,
    Stage,
}

impl AppActionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drawer => "drawer",
            Self::FullScreen => "fullScreen",
            Self::Popup => "popup",
            Self::Stage => "stage",
        }
    }
}

impl fmt::Display for AppActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReactionType
// ---------------------------------------------------------------------------

/// A user reaction. The name doubles as the key in
/// [`Metadata::reaction_counts`](crate::types::Metadata).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum ReactionType {
    #[default]
    #[serde(rename = "")]
    Unknown,
    Angered,
    Cared,
    Humored,
    Liked,
    Loved,
    Saddened,
    Wowed,
}

impl ReactionType {
    pub const ALL: [Self; 8] = [
        Self::Unknown,
        Self::Angered,
        Self::Cared,
        Self::Humored,
        Self::Liked,
        Self::Loved,
        Self::Saddened,
        Self::Wowed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Angered => "angered",
            Self::Cared => "cared",
            Self::Humored => "humored",
            Self::Liked => "liked",
            Self::Loved => "loved",
            Self::Saddened => "saddened",
            Self::Wowed => "wowed",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ReactionType> for String {
    fn from(reaction: ReactionType) -> Self {
        reaction.as_str().to_string()
    }
}

crate::from_data_via_serde!(
    Visibility,
    Status,
    MediaType,
    OrderState,
    NotificationType,
    UserType,
    SystemState,
    BeaconDistance,
    AppActionType,
    ReactionType,
);

/// Accepts the camelCase name or the legacy integer form (as a number or a
/// numeric string), mapped through `from_int`.
fn named_or_integer<T: serde::de::DeserializeOwned>(
    value: &serde_json::Value,
    ids: &dyn crate::ids::IdGenerator,
    from_int: impl Fn(i64) -> Option<T>,
) -> Option<T> {
    match value {
        serde_json::Value::String(s) if s.trim().parse::<i64>().is_err() => {
            serde_json::from_value(value.clone()).ok()
        }
        _ => i64::from_data(value, ids).and_then(from_int),
    }
}

impl crate::dictionary::FromData for Scope {
    fn from_data(
        value: &serde_json::Value,
        ids: &dyn crate::ids::IdGenerator,
    ) -> Option<Self> {
        named_or_integer(value, ids, Self::from_rank)
    }
}

impl crate::dictionary::FromData for AlertScope {
    fn from_data(
        value: &serde_json::Value,
        ids: &dyn crate::ids::IdGenerator,
    ) -> Option<Self> {
        named_or_integer(value, ids, Self::from_ordinal)
    }
}

impl crate::dictionary::FromData for UserRole {
    fn from_data(
        value: &serde_json::Value,
        ids: &dyn crate::ids::IdGenerator,
    ) -> Option<Self> {
        match value {
            serde_json::Value::String(s) if s.trim().parse::<i64>().is_err() => Self::ALL
                .into_iter()
                .find(|role| role.code().eq_ignore_ascii_case(s.trim())),
            _ => i64::from_data(value, ids).and_then(Self::from_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn string_enums_serialize_camel_case() {
        assert_eq!(serde_json::to_value(Status::GrandOpening).unwrap(), json!("grandOpening"));
        assert_eq!(serde_json::to_value(UserType::Unknown).unwrap(), json!(""));
        assert_eq!(
            serde_json::from_value::<MediaType>(json!("animatedImage")).unwrap(),
            MediaType::AnimatedImage
        );
        assert_eq!(Visibility::StaffOnly.to_string(), "staffOnly");
    }

    #[rstest]
    #[case(Status::Open, true)]
    #[case(Status::GrandOpening, true)]
    #[case(Status::Holiday, true)]
    #[case(Status::Closed, false)]
    #[case(Status::TempClosed, false)]
    #[case(Status::BadWeather, false)]
    fn status_openness(#[case] status: Status, #[case] open: bool) {
        assert_eq!(status.is_open(), open);
    }

    #[test]
    fn scopes_order_narrow_to_wide() {
        assert!(AlertScope::Place < AlertScope::District);
        assert!(AlertScope::Region < AlertScope::All);
        assert!(Scope::Place.rank() < Scope::All.rank());
    }

    #[test]
    fn user_role_codes_round_trip() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_code(role.code()), role);
            assert_eq!(UserRole::from_value(role.value()), Some(role));
        }
        assert_eq!(UserRole::from_code("regionaladmin"), UserRole::RegionalAdmin);
        assert_eq!(UserRole::from_code("nobody"), UserRole::EndUser);
    }

    #[rstest]
    #[case(UserRole::PlaceViewer, Scope::Place, true)]
    #[case(UserRole::PlaceAdmin, Scope::District, false)]
    #[case(UserRole::DistrictStaff, Scope::District, true)]
    #[case(UserRole::RegionalAdmin, Scope::All, false)]
    #[case(UserRole::SupportViewer, Scope::All, true)]
    #[case(UserRole::EndUser, Scope::Place, false)]
    #[case(UserRole::Blocked, Scope::Place, false)]
    fn user_role_admin_thresholds(
        #[case] role: UserRole,
        #[case] scope: Scope,
        #[case] expected: bool,
    ) {
        assert_eq!(role.is_admin(scope), expected);
    }

    #[test]
    fn user_role_serializes_as_integer() {
        assert_eq!(serde_json::to_value(UserRole::PlaceStaff).unwrap(), json!(7000));
        assert_eq!(
            serde_json::from_value::<UserRole>(json!(900_000)).unwrap(),
            UserRole::SuperUser
        );
        assert!(serde_json::from_value::<UserRole>(json!(12)).is_err());
        assert!(UserRole::SuperUser.is_super_user());
        assert!(!UserRole::SupportAdmin.is_super_user());
    }

    #[test]
    fn user_role_dictionary_accepts_codes_and_numbers() {
        use crate::ids::UuidIds;

        assert_eq!(UserRole::from_data(&json!("7000"), &UuidIds), Some(UserRole::PlaceStaff));
        assert_eq!(UserRole::from_data(&json!("PlaceStaff"), &UuidIds), Some(UserRole::PlaceStaff));
        assert_eq!(UserRole::from_data(&json!(-1), &UuidIds), Some(UserRole::Blocked));
        assert_eq!(UserRole::from_data(&json!("boss"), &UuidIds), None);
    }

    #[rstest]
    #[case(json!(3000), Some(Scope::District))]
    #[case(json!("5000"), Some(Scope::Region))]
    #[case(json!(10000), Some(Scope::All))]
    #[case(json!("place"), Some(Scope::Place))]
    #[case(json!(2), None)]
    #[case(json!("galaxy"), None)]
    fn scope_dictionary_accepts_rank_or_name(
        #[case] value: serde_json::Value,
        #[case] expected: Option<Scope>,
    ) {
        assert_eq!(Scope::from_data(&value, &crate::ids::UuidIds), expected);
    }

    #[rstest]
    #[case(json!(0), Some(AlertScope::Place))]
    #[case(json!(1), Some(AlertScope::District))]
    #[case(json!("2"), Some(AlertScope::Region))]
    #[case(json!("all"), Some(AlertScope::All))]
    #[case(json!(4), None)]
    fn alert_scope_dictionary_accepts_ordinal_or_name(
        #[case] value: serde_json::Value,
        #[case] expected: Option<AlertScope>,
    ) {
        assert_eq!(AlertScope::from_data(&value, &crate::ids::UuidIds), expected);
    }

    #[test]
    fn reaction_names_match_wire_form() {
        assert_eq!(serde_json::to_value(ReactionType::Unknown).unwrap(), json!(""));
        for reaction in ReactionType::ALL {
            assert_eq!(serde_json::to_value(reaction).unwrap(), json!(reaction.as_str()));
        }
        assert_eq!(
            ReactionType::from_data(&json!("wowed"), &crate::ids::UuidIds),
            Some(ReactionType::Wowed)
        );
        assert_eq!(String::from(ReactionType::Liked), "liked");
    }

    #[test]
    fn app_action_type_defaults_to_popup() {
        assert_eq!(AppActionType::default(), AppActionType::Popup);
        assert_eq!(serde_json::to_value(AppActionType::FullScreen).unwrap(), json!("fullScreen"));
    }
}
