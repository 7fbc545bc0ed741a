use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::enums::BeaconDistance;

/// A proximity beacon and its last reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Beacon {
    #[serde(flatten)]
    pub base: BaseObject,
    /// Estimated distance in metres.
    pub accuracy: f64,
    pub code: String,
    pub distance: BeaconDistance,
    pub major: u32,
    pub minor: u32,
    pub name: String,
    pub range: String,
    pub rssi: i64,
}

crate::impl_dao!(Beacon, "beacon", |this, r| {
    r.read("accuracy", &mut this.accuracy);
    r.read("code", &mut this.code);
    r.read("distance", &mut this.distance);
    r.read("major", &mut this.major);
    r.read("minor", &mut this.minor);
    r.read("name", &mut this.name);
    r.read("range", &mut this.range);
    r.read("rssi", &mut this.rssi);
});
