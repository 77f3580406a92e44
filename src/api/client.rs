//! REST implementation of the API traits.

use std::error::Error as _;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::{AdminApi, ApiError, ApiResult, CreateTask, NoteApi, PatchTask, ShareTask, TaskApi};
use crate::config::ApiConfig;
use crate::model::{Content, Note, ProjectItemSharables, Revision, Role, SharableLink, Task, User};

/// HTTP client for the backend REST API.
///
/// Every request carries a fresh `X-Request-Id` and, when configured,
/// a bearer token.
pub struct ApiClient {
    client: Client,
    base_url: String,
    root: Url,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::transport(&config.base_url, describe(&e)))?;

        let root = Url::parse(&config.base_url)
            .map_err(|e| ApiError::transport(&config.base_url, e.to_string()))?;

        Ok(Self {
            client,
            root,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins raw path segments into `/a/b/c`, percent-encoding each segment
    /// so user-supplied values cannot change the route.
    fn path(&self, segments: &[&str]) -> String {
        let mut url = self.root.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments.iter().copied());
        }
        url.path().to_string()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(%method, path, request_id, "api request");

        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header("X-Request-Id", request_id);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the raw body of a successful response.
    async fn execute(&self, builder: RequestBuilder, path: &str) -> ApiResult<String> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::transport(path, describe(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(path, describe(&e)))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        Ok(body)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.execute(self.request(Method::GET, path), path).await?;
        decode(path, &body)
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = self
            .execute(self.request(method, path).json(body), path)
            .await?;
        decode(path, &body)
    }

    async fn send_unit<B>(&self, method: Method, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute(self.request(method, path).json(body), path)
            .await
            .map(|_| ())
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.execute(self.request(Method::DELETE, path), path).await?;
        decode(path, &body)
    }

    async fn delete_unit(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path), path)
            .await
            .map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Flattens a reqwest error and its causes into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Picks the most useful text out of an error response body.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("unknown error").to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl TaskApi for ApiClient {
    async fn fetch_tasks(&self, project_id: i64) -> ApiResult<Vec<Task>> {
        self.get(&format!("/api/projects/{}/tasks", project_id)).await
    }

    async fn fetch_completed_tasks(
        &self,
        project_id: i64,
        page_no: u32,
        page_size: u32,
    ) -> ApiResult<Vec<Task>> {
        self.get(&format!(
            "/api/projects/{}/completedTasks?pageNo={}&pageSize={}",
            project_id, page_no, page_size
        ))
        .await
    }

    async fn get_task(&self, task_id: i64) -> ApiResult<Task> {
        self.get(&format!("/api/tasks/{}", task_id)).await
    }

    async fn get_completed_task(&self, task_id: i64) -> ApiResult<Task> {
        self.get(&format!("/api/completedTasks/{}", task_id)).await
    }

    async fn create_task(&self, project_id: i64, task: &CreateTask) -> ApiResult<Task> {
        let path = format!("/api/projects/{}/tasks", project_id);
        self.send(Method::POST, &path, task).await
    }

    async fn put_tasks(&self, project_id: i64, tasks: &[Task]) -> ApiResult<()> {
        let path = format!("/api/projects/{}/tasks", project_id);
        self.send_unit(Method::PUT, &path, tasks).await
    }

    async fn delete_task(&self, task_id: i64) -> ApiResult<Vec<Task>> {
        self.delete(&format!("/api/tasks/{}", task_id)).await
    }

    async fn delete_completed_task(&self, task_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/api/completedTasks/{}", task_id))
            .await
    }

    async fn patch_task(&self, task_id: i64, patch: &PatchTask) -> ApiResult<Task> {
        let path = format!("/api/tasks/{}", task_id);
        self.send(Method::PATCH, &path, patch).await
    }

    async fn complete_task(&self, task_id: i64, date_time: Option<&str>) -> ApiResult<Task> {
        let path = format!("/api/tasks/{}/complete", task_id);
        let body = serde_json::json!({ "dateTime": date_time });
        self.send(Method::POST, &path, &body).await
    }

    async fn uncomplete_task(&self, task_id: i64) -> ApiResult<()> {
        let path = format!("/api/completedTasks/{}/uncomplete", task_id);
        self.send_unit(Method::POST, &path, &serde_json::json!({}))
            .await
    }

    async fn set_task_labels(&self, task_id: i64, labels: &[i64]) -> ApiResult<Task> {
        let path = format!("/api/tasks/{}/setLabels", task_id);
        self.send(Method::PUT, &path, labels).await
    }

    async fn move_task(&self, task_id: i64, target_project: i64) -> ApiResult<()> {
        let path = format!("/api/tasks/{}/move", task_id);
        let body = serde_json::json!({ "targetProject": target_project });
        self.send_unit(Method::POST, &path, &body).await
    }

    async fn share_task(
        &self,
        task_id: i64,
        share: &ShareTask,
    ) -> ApiResult<Option<SharableLink>> {
        let path = format!("/api/tasks/{}/share", task_id);
        let body = self
            .execute(self.request(Method::POST, &path).json(share), &path)
            .await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        decode(&path, &body).map(Some)
    }

    async fn get_task_sharables(&self, task_id: i64) -> ApiResult<ProjectItemSharables> {
        self.get(&format!("/api/tasks/{}/sharables", task_id)).await
    }

    async fn revoke_task_sharable(
        &self,
        task_id: i64,
        user: Option<&str>,
        link: Option<&str>,
    ) -> ApiResult<()> {
        let path = format!("/api/tasks/{}/revokeSharable", task_id);
        let body = serde_json::json!({ "user": user, "link": link });
        self.send_unit(Method::POST, &path, &body).await
    }

    async fn get_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>> {
        self.get(&format!("/api/tasks/{}/contents", task_id)).await
    }

    async fn get_completed_task_contents(&self, task_id: i64) -> ApiResult<Vec<Content>> {
        self.get(&format!("/api/completedTasks/{}/contents", task_id))
            .await
    }

    async fn get_content_revision(
        &self,
        task_id: i64,
        content_id: i64,
        revision_id: i64,
    ) -> ApiResult<Revision> {
        self.get(&format!(
            "/api/tasks/{}/contents/{}/revisions/{}",
            task_id, content_id, revision_id
        ))
        .await
    }

    async fn add_task_content(&self, task_id: i64, text: &str) -> ApiResult<Content> {
        let path = format!("/api/tasks/{}/addContent", task_id);
        self.send(Method::POST, &path, &serde_json::json!({ "text": text }))
            .await
    }

    async fn delete_task_content(&self, task_id: i64, content_id: i64) -> ApiResult<()> {
        self.delete_unit(&format!("/api/tasks/{}/contents/{}", task_id, content_id))
            .await
    }

    async fn patch_task_content(
        &self,
        task_id: i64,
        content_id: i64,
        text: &str,
    ) -> ApiResult<Content> {
        let path = format!("/api/tasks/{}/contents/{}", task_id, content_id);
        self.send(Method::PATCH, &path, &serde_json::json!({ "text": text }))
            .await
    }
}

#[async_trait]
impl NoteApi for ApiClient {
    async fn fetch_notes(&self, project_id: i64) -> ApiResult<Vec<Note>> {
        self.get(&format!("/api/projects/{}/notes", project_id)).await
    }

    async fn get_note(&self, note_id: i64) -> ApiResult<Note> {
        self.get(&format!("/api/notes/{}", note_id)).await
    }

    async fn create_note(&self, project_id: i64, name: &str) -> ApiResult<Note> {
        let path = format!("/api/projects/{}/notes", project_id);
        self.send(Method::POST, &path, &serde_json::json!({ "name": name }))
            .await
    }

    async fn delete_note(&self, note_id: i64) -> ApiResult<Vec<Note>> {
        self.delete(&format!("/api/notes/{}", note_id)).await
    }

    async fn patch_note(&self, note_id: i64, name: &str) -> ApiResult<Note> {
        let path = format!("/api/notes/{}", note_id);
        self.send(Method::PATCH, &path, &serde_json::json!({ "name": name }))
            .await
    }

    async fn move_note(&self, note_id: i64, target_project: i64) -> ApiResult<()> {
        let path = format!("/api/notes/{}/move", note_id);
        let body = serde_json::json!({ "targetProject": target_project });
        self.send_unit(Method::POST, &path, &body).await
    }

    async fn set_note_labels(&self, note_id: i64, labels: &[i64]) -> ApiResult<Note> {
        let path = format!("/api/notes/{}/setLabels", note_id);
        self.send(Method::PUT, &path, labels).await
    }

    async fn get_note_contents(&self, note_id: i64) -> ApiResult<Vec<Content>> {
        self.get(&format!("/api/notes/{}/contents", note_id)).await
    }
}

#[async_trait]
impl AdminApi for ApiClient {
    async fn set_role(&self, username: &str, role: Role) -> ApiResult<()> {
        let path = self.path(&["api", "users", username, "setRole"]);
        self.send_unit(Method::POST, &path, &serde_json::json!({ "role": role }))
            .await
    }

    async fn fetch_users_by_role(&self, role: Role) -> ApiResult<Vec<User>> {
        self.get(&format!("/api/users?role={}", role)).await
    }
}
