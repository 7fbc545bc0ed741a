use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Place;
use crate::dao::BaseObject;

/// A node in the place hierarchy (district, region, ...). `parent_id` is empty
/// for a root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Section {
    #[serde(flatten)]
    pub base: BaseObject,
    pub children: Vec<Section>,
    pub name: String,
    pub parent_id: String,
    pub places: Vec<Place>,
    pub pricing_tier_id: String,
}

impl Section {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }

    /// Append `child`, pointing its `parent_id` at this section.
    pub fn add_child(&mut self, mut child: Self) {
        child.parent_id.clone_from(&self.base.id);
        self.children.push(child);
    }

    /// Depth-first search of this subtree for `id`.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.base.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Places in this section and every descendant.
    #[must_use]
    pub fn all_places(&self) -> Vec<&Place> {
        let mut places: Vec<&Place> = self.places.iter().collect();
        for child in &self.children {
            places.extend(child.all_places());
        }
        places
    }
}

crate::impl_dao!(Section, "section", |this, r| {
    r.read("children", &mut this.children);
    r.read("name", &mut this.name);
    r.read_reference("parentId", "parent", &mut this.parent_id);
    r.read("places", &mut this.places);
    r.read("pricingTierId", &mut this.pricing_tier_id);
});
