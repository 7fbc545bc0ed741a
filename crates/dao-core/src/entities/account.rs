use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Card, Media, User};
use crate::dao::BaseObject;
use crate::types::PersonName;

/// A billing account shared by one or more users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    #[serde(flatten)]
    pub base: BaseObject,
    pub name: PersonName,
    pub avatar: Option<Box<Media>>,
    pub cards: Vec<Card>,
    pub dob: Option<DateTime<Utc>>,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub pricing_tier_id: String,
    pub users: Vec<User>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            base: BaseObject::default(),
            name: PersonName::default(),
            avatar: None,
            cards: Vec::new(),
            dob: None,
            email_notifications: true,
            push_notifications: true,
            pricing_tier_id: String::new(),
            users: Vec::new(),
        }
    }
}

impl Account {
    /// The card flagged as default, else the first card.
    #[must_use]
    pub fn default_card(&self) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.is_default)
            .or_else(|| self.cards.first())
    }
}

crate::impl_dao!(Account, "account", |this, r| {
    r.read("name", &mut this.name);
    r.read("avatar", &mut this.avatar);
    r.read("cards", &mut this.cards);
    r.read("dob", &mut this.dob);
    r.read("emailNotifications", &mut this.email_notifications);
    r.read("pushNotifications", &mut this.push_notifications);
    r.read("pricingTierId", &mut this.pricing_tier_id);
    r.read("users", &mut this.users);
});

/// A user's request to be linked to an existing account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountLinkRequest {
    #[serde(flatten)]
    pub base: BaseObject,
    pub account: Option<Box<Account>>,
    pub user: Option<Box<User>>,
    pub approved: Option<DateTime<Utc>>,
    pub approved_by: String,
    pub requested: Option<DateTime<Utc>>,
}

impl AccountLinkRequest {
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved.is_some()
    }

    /// Stamp approval by `by` at the current time.
    pub fn approve(&mut self, by: impl Into<String>) {
        self.approved = Some(Utc::now());
        self.approved_by = by.into();
    }
}

crate::impl_dao!(AccountLinkRequest, "account_link_request", |this, r| {
    r.read("account", &mut this.account);
    r.read("user", &mut this.user);
    r.read("approved", &mut this.approved);
    r.read("approvedBy", &mut this.approved_by);
    r.read("requested", &mut this.requested);
});
