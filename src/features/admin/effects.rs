use crate::effects::{EffectContext, Policy};
use crate::model::Role;

use super::intent::AdminIntent;

pub(crate) fn policy(intent: &AdminIntent) -> Option<Policy> {
    match intent {
        AdminIntent::SetRole { .. } => Some(Policy::Every),
        AdminIntent::GetUsersByRole { .. } => Some(Policy::Latest),
        AdminIntent::UserRolesReceived { .. } => None,
    }
}

pub(crate) async fn run(intent: AdminIntent, ctx: EffectContext) {
    match intent {
        AdminIntent::SetRole { username, role } => set_role(&ctx, &username, role).await,
        AdminIntent::GetUsersByRole { role } => get_users_by_role(&ctx, role).await,
        AdminIntent::UserRolesReceived { .. } => {}
    }
}

async fn set_role(ctx: &EffectContext, username: &str, role: Role) {
    match ctx.api().set_role(username, role).await {
        Ok(()) => ctx.success(format!("set {} as {} successfully", username, role)),
        Err(err) => ctx.fail(&err),
    }
}

async fn get_users_by_role(ctx: &EffectContext, role: Role) {
    match ctx.api().fetch_users_by_role(role).await {
        Ok(user_roles) => ctx.put(AdminIntent::UserRolesReceived { user_roles }),
        Err(err) => ctx.fail(&err),
    }
}
