use strum::IntoStaticStr;

use crate::model::{Role, User};
use crate::mvi::Intent;

#[derive(Debug, Clone, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum AdminIntent {
    /// Grant `role` to `username`. Every dispatch calls the backend.
    SetRole { username: String, role: Role },
    /// Fetch the users holding `role`. Only the latest request is honored.
    GetUsersByRole { role: Role },
    UserRolesReceived { user_roles: Vec<User> },
}

impl Intent for AdminIntent {
    fn name(&self) -> &'static str {
        self.into()
    }
}
