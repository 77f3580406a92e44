use serde::{Deserialize, Serialize};

use super::User;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharableLink {
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<i64>,
}

/// Who a project item is shared with: individual users and public links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectItemSharables {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub links: Vec<SharableLink>,
}
