use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::User;
use crate::dao::BaseObject;
use crate::enums::UserRole;

/// A pending change awaiting review. Carries only the base fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangeRequest {
    #[serde(flatten)]
    pub base: BaseObject,
}

crate::impl_dao!(ChangeRequest, "change_request");

/// A request to move a user to a different role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserChangeRequest {
    #[serde(flatten)]
    pub base: BaseObject,
    pub user: Option<Box<User>>,
    pub requested_role: UserRole,
}

crate::impl_dao!(UserChangeRequest, "user_change_request", |this, r| {
    r.read("user", &mut this.user);
    r.read("requestedRole", &mut this.requested_role);
});
