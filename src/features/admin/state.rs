use serde::Serialize;

use crate::model::User;
use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminState {
    /// Users holding the role last asked for.
    pub user_roles: Vec<User>,
}

impl SliceState for AdminState {}
