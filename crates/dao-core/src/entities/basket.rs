use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Account, Place, Product};
use crate::dao::BaseObject;

/// A shopping basket before it becomes an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Basket {
    #[serde(flatten)]
    pub base: BaseObject,
    pub account: Option<Box<Account>>,
    pub items: Vec<BasketItem>,
    pub place: Option<Box<Place>>,
}

impl Basket {
    /// Append `item`, pointing its `basket_id` at this basket.
    pub fn add_item(&mut self, mut item: BasketItem) {
        item.basket_id.clone_from(&self.base.id);
        self.items.push(item);
    }
}

crate::impl_dao!(Basket, "basket", |this, r| {
    r.read("account", &mut this.account);
    r.read("items", &mut this.items);
    r.read("place", &mut this.place);
});

/// One line of a basket. `basket_id` refers back to the owning [`Basket`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BasketItem {
    #[serde(flatten)]
    pub base: BaseObject,
    pub account: Option<Box<Account>>,
    pub basket_id: String,
    pub place: Option<Box<Place>>,
    pub product: Option<Box<Product>>,
    pub quantity: u64,
}

crate::impl_dao!(BasketItem, "basket_item", |this, r| {
    r.read("account", &mut this.account);
    r.read_reference("basketId", "basket", &mut this.basket_id);
    r.read("place", &mut this.place);
    r.read("product", &mut this.product);
    r.read("quantity", &mut this.quantity);
});
