use async_trait::async_trait;
use serde::Serialize;

use super::ApiResult;
use crate::model::{Content, ProjectItemSharables, ReminderSetting, Revision, SharableLink, Task};

/// Body of a task creation request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub name: String,
    pub assignees: Vec<String>,
    pub reminder_setting: ReminderSetting,
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<String>,
}

/// Partial update of a task. Absent fields are left alone by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchTask {
    pub timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_setting: Option<ReminderSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<String>,
}

/// Share a task with a user, a group, or through a public link.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group: Option<i64>,
    pub generate_link: bool,
    /// Link lifetime in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn fetch_tasks(&self, project_id: i64) -> ApiResult<Vec<Task>>;
    async fn fetch_completed_tasks(
        &self,
        project_id: i64,
        page_no: u32,
        page_size: u32,
    ) -> ApiResult<Vec<Task>>;
    async fn get_task(&self, task_id: i64) -> ApiResult<Task>;
    async fn get_completed_task(&self, task_id: i64) -> ApiResult<Task>;
    async fn create_task(&self, project_id: i64, task: &CreateTask) -> ApiResult<Task>;
    async fn put_tasks(&self, project_id: i64, tasks: &[Task]) -> ApiResult<()>;
    /// Returns the tasks left in the project.
    async fn delete_task(&self, task_id: i64) -> ApiResult<Vec<Task>>;
    async fn delete_completed_task(&self, task_id: i64) -> ApiResult<()>;
    async fn patch_task(&self, task_id: i64, patch: &PatchTask) -> ApiResult<Task>;
    /// Returns the completed task.
    async fn complete_task(&self, task_id: i64, date_time: Option<&str>) -> ApiResult<Task>;
    async fn uncomplete_task(&self, task_id: i64) -> ApiResult<()>;
    async fn set_task_labels(&self, task_id: i64, labels: &[i64]) -> ApiResult<Task>;
    async fn move_task(&self, task_id: i64, target_project: i64) -> ApiResult<()>;
    /// Returns the generated link when `share.generate_link` is set.
    async fn share_task(&self, task_id: i64, share: &ShareTask)
        -> ApiResult<Option<SharableLink>>;
    async fn get_task_sharables(&self, task_id: i64) -> ApiResult<ProjectItemSharables>;
    async fn revoke_task_sharable(
        &self,
        task_id: i64,
        user: Option<&str>,
        link: Option<&str>,
    ) -> ApiResult<()>;
    async fn get_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>>;
    async fn get_completed_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>>;
    async fn get_content_revision(
        &self,
        task_id: i64,
        content_id: i64,
        revision_id: i64,
    ) -> ApiResult<Revision>;
    async fn add_task_content(&self, task_id: i64, text: &str) -> ApiResult<Content>;
    async fn delete_task_content(&self, task_id: i64, content_id: i64) -> ApiResult<()>;
    async fn patch_task_content(&self, task_id: i64, content_id: i64, text: &str)
        -> ApiResult<Content>;
}
