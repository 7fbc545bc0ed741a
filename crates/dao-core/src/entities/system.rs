use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dao::BaseObject;
use crate::enums::SystemState;
use crate::types::{AnalyticsNumbers, LocalizedString};

/// A point-in-time health reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemStatus {
    #[serde(flatten)]
    pub base: BaseObject,
    pub failure_codes: BTreeMap<String, AnalyticsNumbers>,
    pub failure_rate: AnalyticsNumbers,
    pub state: SystemState,
    pub state_override: SystemState,
    pub total_points: AnalyticsNumbers,
}

impl SystemStatus {
    /// The override when set, else the measured state.
    #[must_use]
    pub fn effective_state(&self) -> SystemState {
        if self.state_override == SystemState::None {
            self.state
        } else {
            self.state_override
        }
    }
}

crate::impl_dao!(SystemStatus, "system_status", |this, r| {
    r.read("failureCodes", &mut this.failure_codes);
    r.read("failureRate", &mut this.failure_rate);
    r.read("state", &mut this.state);
    r.read("stateOverride", &mut this.state_override);
    r.read("totalPoints", &mut this.total_points);
});

/// Accessors that read through the current status, falling back to a
/// default reading when none is recorded.
macro_rules! current_state_accessors {
    ($ty:ty) => {
        impl $ty {
            #[must_use]
            pub fn state(&self) -> SystemState {
                self.current_state.as_ref().map_or_else(SystemState::default, |s| s.state)
            }

            #[must_use]
            pub fn state_override(&self) -> SystemState {
                self.current_state
                    .as_ref()
                    .map_or(SystemState::None, |s| s.state_override)
            }

            #[must_use]
            pub fn failure_rate(&self) -> AnalyticsNumbers {
                self.current_state
                    .as_ref()
                    .map(|s| s.failure_rate)
                    .unwrap_or_default()
            }

            #[must_use]
            pub fn total_points(&self) -> AnalyticsNumbers {
                self.current_state
                    .as_ref()
                    .map(|s| s.total_points)
                    .unwrap_or_default()
            }

            #[must_use]
            pub fn failure_codes(&self) -> BTreeMap<String, AnalyticsNumbers> {
                self.current_state
                    .as_ref()
                    .map(|s| s.failure_codes.clone())
                    .unwrap_or_default()
            }
        }
    };
}

/// A monitored service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct System {
    #[serde(flatten)]
    pub base: BaseObject,
    pub current_state: Option<Box<SystemStatus>>,
    pub end_points: Vec<SystemEndPoint>,
    pub history_state: Vec<SystemStatus>,
    pub message: LocalizedString,
    pub name: LocalizedString,
}

current_state_accessors!(System);

impl System {
    /// Append `end_point`, pointing its `system_id` at this system.
    pub fn add_end_point(&mut self, mut end_point: SystemEndPoint) {
        end_point.system_id.clone_from(&self.base.id);
        self.end_points.push(end_point);
    }
}

crate::impl_dao!(System, "system", |this, r| {
    r.read("currentState", &mut this.current_state);
    r.read("endPoints", &mut this.end_points);
    r.read("historyState", &mut this.history_state);
    r.read("message", &mut this.message);
    r.read("name", &mut this.name);
});

/// One monitored endpoint of a [`System`]. `system_id` refers back to the
/// owning system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemEndPoint {
    #[serde(flatten)]
    pub base: BaseObject,
    pub current_state: Option<Box<SystemStatus>>,
    pub history_state: Vec<SystemStatus>,
    pub name: LocalizedString,
    pub system_id: String,
}

current_state_accessors!(SystemEndPoint);

crate::impl_dao!(SystemEndPoint, "system_end_point", |this, r| {
    r.read("currentState", &mut this.current_state);
    r.read("historyState", &mut this.history_state);
    r.read("name", &mut this.name);
    r.read_reference("systemId", "system", &mut this.system_id);
});
