use crate::mvi::Reducer;

use super::intent::AdminIntent;
use super::state::AdminState;

pub struct AdminReducer;

impl Reducer for AdminReducer {
    type State = AdminState;
    type Intent = AdminIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AdminIntent::UserRolesReceived { user_roles } => AdminState { user_roles },
            AdminIntent::SetRole { .. } | AdminIntent::GetUsersByRole { .. } => state,
        }
    }
}
