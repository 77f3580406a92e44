use serde::Serialize;

use crate::model::{Content, SharableLink, Task, User};
use crate::mvi::SliceState;

/// Task slice: the project's task list, the task being viewed, its contents,
/// sharing metadata and completed-task pagination.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskState {
    pub add_task_visible: bool,
    pub contents: Vec<Content>,
    pub task: Option<Task>,
    pub tasks: Vec<Task>,
    pub completed_tasks: Vec<Task>,
    pub shared_users: Vec<User>,
    pub shared_links: Vec<SharableLink>,
    pub shared_link: String,
    pub loading_completed_task: bool,
    /// Next completed-task page to fetch.
    pub completed_task_no: u32,
}

impl SliceState for TaskState {}
