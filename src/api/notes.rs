use async_trait::async_trait;

use super::ApiResult;
use crate::model::{Content, Note};

#[async_trait]
pub trait NoteApi: Send + Sync {
    async fn fetch_notes(&self, project_id: i64) -> ApiResult<Vec<Note>>;
    async fn get_note(&self, note_id: i64) -> ApiResult<Note>;
    async fn create_note(&self, project_id: i64, name: &str) -> ApiResult<Note>;
    /// Deletes the note and its sub notes, returning the notes left in the project.
    async fn delete_note(&self, note_id: i64) -> ApiResult<Vec<Note>>;
    async fn patch_note(&self, note_id: i64, name: &str) -> ApiResult<Note>;
    async fn move_note(&self, note_id: i64, target_project: i64) -> ApiResult<()>;
    async fn set_note_labels(&self, note_id: i64, labels: &[i64]) -> ApiResult<Note>;
    async fn get_note_contents(&self, note_id: i64) -> ApiResult<Vec<Content>>;
}
