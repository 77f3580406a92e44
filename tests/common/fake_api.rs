//! Scripted stand-in for the backend.
//!
//! Each API method pops the next scripted answer queued under its name. An
//! unscripted call succeeds immediately with the type's default value.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use bujo::api::{
    AdminApi, ApiError, ApiResult, CreateTask, NoteApi, PatchTask, ShareTask, TaskApi,
};
use bujo::model::{Content, Note, ProjectItemSharables, Revision, Role, SharableLink, Task, User};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

struct Scripted {
    delay: Duration,
    result: Result<serde_json::Value, ApiError>,
}

/// A recorded call: method name plus its arguments rendered with `Debug`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub args: String,
}

#[derive(Default)]
pub struct FakeApi {
    scripts: Mutex<HashMap<&'static str, VecDeque<Scripted>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &'static str, value: impl Serialize) {
        self.respond_after(method, Duration::ZERO, value);
    }

    pub fn respond_after(&self, method: &'static str, delay: Duration, value: impl Serialize) {
        let value = serde_json::to_value(value).expect("scripted value serializes");
        self.push(method, delay, Ok(value));
    }

    pub fn fail(&self, method: &'static str, err: ApiError) {
        self.fail_after(method, Duration::ZERO, err);
    }

    pub fn fail_after(&self, method: &'static str, delay: Duration, err: ApiError) {
        self.push(method, delay, Err(err));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    fn push(&self, method: &'static str, delay: Duration, result: Result<serde_json::Value, ApiError>) {
        self.scripts
            .lock()
            .entry(method)
            .or_default()
            .push_back(Scripted { delay, result });
    }

    async fn answer<T>(&self, method: &'static str, args: String) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        self.calls.lock().push(Call { method, args });
        let next = self
            .scripts
            .lock()
            .get_mut(method)
            .and_then(|queue| queue.pop_front());

        let Some(scripted) = next else {
            return Ok(T::default());
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted
            .result
            .map(|value| serde_json::from_value(value).expect("scripted value matches return type"))
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn fetch_tasks(&self, project_id: i64) -> ApiResult<Vec<Task>> {
        self.answer("fetch_tasks", format!("{:?}", project_id)).await
    }

    async fn fetch_completed_tasks(
        &self,
        project_id: i64,
        page_no: u32,
        page_size: u32,
    ) -> ApiResult<Vec<Task>> {
        self.answer(
            "fetch_completed_tasks",
            format!("{:?}", (project_id, page_no, page_size)),
        )
        .await
    }

    async fn get_task(&self, task_id: i64) -> ApiResult<Task> {
        self.answer("get_task", format!("{:?}", task_id)).await
    }

    async fn get_completed_task(&self, task_id: i64) -> ApiResult<Task> {
        self.answer("get_completed_task", format!("{:?}", task_id)).await
    }

    async fn create_task(&self, project_id: i64, task: &CreateTask) -> ApiResult<Task> {
        self.answer("create_task", format!("{:?}", (project_id, &task.name)))
            .await
    }

    async fn put_tasks(&self, project_id: i64, tasks: &[Task]) -> ApiResult<()> {
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        self.answer("put_tasks", format!("{:?}", (project_id, ids))).await
    }

    async fn delete_task(&self, task_id: i64) -> ApiResult<Vec<Task>> {
        self.answer("delete_task", format!("{:?}", task_id)).await
    }

    async fn delete_completed_task(&self, task_id: i64) -> ApiResult<()> {
        self.answer("delete_completed_task", format!("{:?}", task_id))
            .await
    }

    async fn patch_task(&self, task_id: i64, patch: &PatchTask) -> ApiResult<Task> {
        self.answer("patch_task", format!("{:?}", (task_id, &patch.name)))
            .await
    }

    async fn complete_task(&self, task_id: i64, date_time: Option<&str>) -> ApiResult<Task> {
        self.answer("complete_task", format!("{:?}", (task_id, date_time)))
            .await
    }

    async fn uncomplete_task(&self, task_id: i64) -> ApiResult<()> {
        self.answer("uncomplete_task", format!("{:?}", task_id)).await
    }

    async fn set_task_labels(&self, task_id: i64, labels: &[i64]) -> ApiResult<Task> {
        self.answer("set_task_labels", format!("{:?}", (task_id, labels)))
            .await
    }

    async fn move_task(&self, task_id: i64, target_project: i64) -> ApiResult<()> {
        self.answer("move_task", format!("{:?}", (task_id, target_project)))
            .await
    }

    async fn share_task(
        &self,
        task_id: i64,
        share: &ShareTask,
    ) -> ApiResult<Option<SharableLink>> {
        self.answer("share_task", format!("{:?}", (task_id, share.generate_link)))
            .await
    }

    async fn get_task_sharables(&self, task_id: i64) -> ApiResult<ProjectItemSharables> {
        self.answer("get_task_sharables", format!("{:?}", task_id)).await
    }

    async fn revoke_task_sharable(
        &self,
        task_id: i64,
        user: Option<&str>,
        link: Option<&str>,
    ) -> ApiResult<()> {
        self.answer("revoke_task_sharable", format!("{:?}", (task_id, user, link)))
            .await
    }

    async fn get_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>> {
        self.answer("get_task_contents", format!("{:?}", task_id)).await
    }

    async fn get_completed_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>> {
        self.answer("get_completed_task_contents", format!("{:?}", task_id))
            .await
    }

    async fn get_content_revision(
        &self,
        task_id: i64,
        content_id: i64,
        revision_id: i64,
    ) -> ApiResult<Revision> {
        self.answer(
            "get_content_revision",
            format!("{:?}", (task_id, content_id, revision_id)),
        )
        .await
    }

    async fn add_task_content(&self, task_id: i64, text: &str) -> ApiResult<Content> {
        self.answer("add_task_content", format!("{:?}", (task_id, text)))
            .await
    }

    async fn delete_task_content(&self, task_id: i64, content_id: i64) -> ApiResult<()> {
        self.answer("delete_task_content", format!("{:?}", (task_id, content_id)))
            .await
    }

    async fn patch_task_content(
        &self,
        task_id: i64,
        content_id: i64,
        text: &str,
    ) -> ApiResult<Content> {
        self.answer(
            "patch_task_content",
            format!("{:?}", (task_id, content_id, text)),
        )
        .await
    }
}

#[async_trait]
impl NoteApi for FakeApi {
    async fn fetch_notes(&self, project_id: i64) -> ApiResult<Vec<Note>> {
        self.answer("fetch_notes", format!("{:?}", project_id)).await
    }

    async fn get_note(&self, note_id: i64) -> ApiResult<Note> {
        self.answer("get_note", format!("{:?}", note_id)).await
    }

    async fn create_note(&self, project_id: i64, name: &str) -> ApiResult<Note> {
        self.answer("create_note", format!("{:?}", (project_id, name)))
            .await
    }

    async fn delete_note(&self, note_id: i64) -> ApiResult<Vec<Note>> {
        self.answer("delete_note", format!("{:?}", note_id)).await
    }

    async fn patch_note(&self, note_id: i64, name: &str) -> ApiResult<Note> {
        self.answer("patch_note", format!("{:?}", (note_id, name))).await
    }

    async fn move_note(&self, note_id: i64, target_project: i64) -> ApiResult<()> {
        self.answer("move_note", format!("{:?}", (note_id, target_project)))
            .await
    }

    async fn set_note_labels(&self, note_id: i64, labels: &[i64]) -> ApiResult<Note> {
        self.answer("set_note_labels", format!("{:?}", (note_id, labels)))
            .await
    }

    async fn get_note_contents(&self, note_id: i64) -> ApiResult<Vec<Content>> {
        self.answer("get_note_contents", format!("{:?}", note_id)).await
    }
}

#[async_trait]
impl AdminApi for FakeApi {
    async fn set_role(&self, username: &str, role: Role) -> ApiResult<()> {
        self.answer("set_role", format!("{:?}", (username, role))).await
    }

    async fn fetch_users_by_role(&self, role: Role) -> ApiResult<Vec<User>> {
        self.answer("fetch_users_by_role", format!("{:?}", role)).await
    }
}
