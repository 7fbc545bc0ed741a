use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::dao::BaseObject;
use crate::types::PostalAddress;

/// A stored payment card and the transactions charged to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Card {
    #[serde(flatten)]
    pub base: BaseObject,
    pub billing_address: PostalAddress,
    pub card_holder_email: String,
    pub card_holder_name: String,
    pub card_holder_phone: String,
    pub card_number: String,
    pub card_type: String,
    pub is_default: bool,
    pub expiration: Option<DateTime<Utc>>,
    pub nickname: String,
    pub pin_number: String,
    pub transactions: Vec<Transaction>,
}

impl Card {
    /// Card number with all but the last four digits hidden.
    #[must_use]
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        let tail: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("**** {tail}")
    }

    #[must_use]
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|expiration| expiration < at)
    }
}

crate::impl_dao!(Card, "card", |this, r| {
    r.read("billingAddress", &mut this.billing_address);
    r.read("cardHolderEmail", &mut this.card_holder_email);
    r.read("cardHolderName", &mut this.card_holder_name);
    r.read("cardHolderPhone", &mut this.card_holder_phone);
    r.read("cardNumber", &mut this.card_number);
    r.read("cardType", &mut this.card_type);
    r.read("isDefault", &mut this.is_default);
    r.read("expiration", &mut this.expiration);
    r.read("nickname", &mut this.nickname);
    r.read("pinNumber", &mut this.pin_number);
    r.read("transactions", &mut this.transactions);
});
