use async_trait::async_trait;

use super::ApiResult;
use crate::model::{Role, User};

#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn set_role(&self, username: &str, role: Role) -> ApiResult<()>;
    async fn fetch_users_by_role(&self, role: Role) -> ApiResult<Vec<User>>;
}
