use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Account, ActivityType, Card, Place};
use crate::dao::BaseObject;
use crate::enums::{UserRole, UserType, Visibility};
use crate::types::PersonName;

/// A person who signs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub base: BaseObject,
    pub accounts: Vec<Account>,
    pub cards: Vec<Card>,
    pub consent: Option<DateTime<Utc>>,
    pub consent_by: String,
    pub dob: Option<DateTime<Utc>>,
    pub email: String,
    pub favorites: Vec<ActivityType>,
    pub my_place: Option<Box<Place>>,
    pub name: PersonName,
    pub phone: String,
    pub status: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub user_role: UserRole,
    pub visibility: Visibility,
}

impl User {
    #[must_use]
    pub fn is_favorite(&self, activity_type_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav.base.id == activity_type_id)
    }

    /// Add `activity_type` to favorites unless an entry with the same id exists.
    pub fn add_favorite(&mut self, activity_type: ActivityType) {
        if !self.is_favorite(&activity_type.base.id) {
            self.favorites.push(activity_type);
        }
    }

    pub fn remove_favorite(&mut self, activity_type_id: &str) {
        self.favorites.retain(|fav| fav.base.id != activity_type_id);
    }
}

crate::impl_dao!(User, "user", |this, r| {
    r.read("accounts", &mut this.accounts);
    r.read("cards", &mut this.cards);
    r.read("consent", &mut this.consent);
    r.read("consentBy", &mut this.consent_by);
    r.read("dob", &mut this.dob);
    r.read("email", &mut this.email);
    r.read("favorites", &mut this.favorites);
    r.read("myPlace", &mut this.my_place);
    r.read("name", &mut this.name);
    r.read("phone", &mut this.phone);
    r.read("status", &mut this.status);
    r.read("type", &mut this.user_type);
    r.read("userRole", &mut this.user_role);
    r.read("visibility", &mut this.visibility);
});
