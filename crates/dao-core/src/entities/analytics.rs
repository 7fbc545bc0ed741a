use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::types::AnalyticsNumbers;

/// A titled series of per-platform figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(flatten)]
    pub base: BaseObject,
    pub title: String,
    pub subtitle: String,
    pub data: Vec<AnalyticsNumbers>,
}

crate::impl_dao!(AnalyticsData, "analytics_data", |this, r| {
    r.read("title", &mut this.title);
    r.read("subtitle", &mut this.subtitle);
    r.read("data", &mut this.data);
});
