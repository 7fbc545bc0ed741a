use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Place;
use crate::dao::BaseObject;
use crate::types::LocalizedString;

/// A named group of places. `region_id` refers back to the owning
/// [`Region`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct District {
    #[serde(flatten)]
    pub base: BaseObject,
    pub name: LocalizedString,
    pub places: Vec<Place>,
    pub region_id: String,
}

crate::impl_dao!(District, "district", |this, r| {
    r.read("centers", &mut this.places);
    r.read("places", &mut this.places);
    r.read("name", &mut this.name);
    r.read_reference("regionId", "region", &mut this.region_id);
});

/// The top of the place hierarchy: regions own districts, districts own
/// places.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Region {
    #[serde(flatten)]
    pub base: BaseObject,
    pub districts: Vec<District>,
    pub name: LocalizedString,
}

impl Region {
    /// Append `district`, pointing its `region_id` at this region.
    pub fn add_district(&mut self, mut district: District) {
        district.region_id.clone_from(&self.base.id);
        self.districts.push(district);
    }

    #[must_use]
    pub fn district(&self, id: &str) -> Option<&District> {
        self.districts.iter().find(|district| district.base.id == id)
    }

    /// Places across every district, in district order.
    #[must_use]
    pub fn all_places(&self) -> Vec<&Place> {
        self.districts
            .iter()
            .flat_map(|district| district.places.iter())
            .collect()
    }
}

crate::impl_dao!(Region, "region", |this, r| {
    r.read("districts", &mut this.districts);
    r.read("name", &mut this.name);
});
