use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Card, Order};
use crate::dao::BaseObject;

/// A payment against a card, optionally settling an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    #[serde(flatten)]
    pub base: BaseObject,
    pub amount: f64,
    pub card: Option<Box<Card>>,
    pub confirmation: String,
    pub order: Option<Box<Order>>,
    pub tax: f64,
    pub tip: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
}

impl Transaction {
    /// Amount plus tax and tip.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.amount + self.tax + self.tip
    }
}

crate::impl_dao!(Transaction, "transaction", |this, r| {
    r.read("amount", &mut this.amount);
    r.read("card", &mut this.card);
    r.read("confirmation", &mut this.confirmation);
    r.read("order", &mut this.order);
    r.read("tax", &mut this.tax);
    r.read("tip", &mut this.tip);
    r.read("type", &mut this.transaction_type);
});
