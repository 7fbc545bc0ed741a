use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Account, Place, Product, Transaction};
use crate::dao::BaseObject;
use crate::enums::OrderState;

/// A placed order and its line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseObject,
    pub account: Option<Box<Account>>,
    pub items: Vec<OrderItem>,
    pub place: Option<Box<Place>>,
    pub state: OrderState,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub transaction: Option<Box<Transaction>>,
}

impl Order {
    /// Append `item`, pointing its `order_id` at this order.
    pub fn add_item(&mut self, mut item: OrderItem) {
        item.order_id.clone_from(&self.base.id);
        self.items.push(item);
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

crate::impl_dao!(Order, "order", |this, r| {
    r.read("account", &mut this.account);
    r.read("items", &mut this.items);
    r.read("place", &mut this.place);
    r.read("state", &mut this.state);
    r.read("subtotal", &mut this.subtotal);
    r.read("tax", &mut this.tax);
    r.read("total", &mut this.total);
    r.read("transaction", &mut this.transaction);
});

/// One line of an order. `order_id` refers back to the owning [`Order`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(flatten)]
    pub base: BaseObject,
    pub account: Option<Box<Account>>,
    pub order_id: String,
    pub place: Option<Box<Place>>,
    pub product: Option<Box<Product>>,
    pub quantity: u64,
}

crate::impl_dao!(OrderItem, "order_item", |this, r| {
    r.read("account", &mut this.account);
    r.read_reference("orderId", "order", &mut this.order_id);
    r.read("place", &mut this.place);
    r.read("product", &mut this.product);
    r.read("quantity", &mut this.quantity);
});
