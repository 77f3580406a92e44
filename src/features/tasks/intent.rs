use strum::IntoStaticStr;

use crate::api::{CreateTask, PatchTask, ShareTask};
use crate::model::{Content, ProjectItemSharables, Task};
use crate::mvi::Intent;
use crate::navigation::Navigation;

/// Intents of the task slice.
///
/// `*Received` and `Update*` flag variants carry results and replace state
/// fields. The remaining variants request an external call and leave the
/// state alone.
#[derive(Debug, Clone, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum TaskIntent {
    TasksReceived {
        tasks: Vec<Task>,
    },
    TaskReceived {
        task: Option<Task>,
    },
    UpdateCompletedTaskNo {
        completed_task_no: u32,
    },
    UpdateLoadingCompletedTask {
        loading: bool,
    },
    SharablesReceived(ProjectItemSharables),
    SharedLinkReceived {
        link: String,
    },
    UpdateAddTaskVisible {
        visible: bool,
    },
    CompletedTasksReceived {
        tasks: Vec<Task>,
    },
    ContentsReceived {
        contents: Vec<Content>,
    },
    /// An effect failed. Observers may react; state does not change.
    ApiErrorReceived {
        error: String,
    },

    UpdateTasks {
        project_id: i64,
    },
    /// Fetch one page of completed tasks. Page 0 replaces the list, later
    /// pages append to it.
    UpdateCompletedTasks {
        project_id: i64,
        page_no: u32,
        page_size: u32,
    },
    Create {
        project_id: i64,
        task: CreateTask,
    },
    /// Persist a reordered task list.
    Put {
        project_id: i64,
        tasks: Vec<Task>,
    },
    Get {
        task_id: i64,
    },
    GetCompleted {
        task_id: i64,
    },
    Delete {
        task_id: i64,
    },
    DeleteCompleted {
        task_id: i64,
    },
    Patch {
        task_id: i64,
        patch: PatchTask,
    },
    Complete {
        task_id: i64,
        date_time: Option<String>,
    },
    Uncomplete {
        task_id: i64,
    },
    SetLabels {
        task_id: i64,
        labels: Vec<i64>,
    },
    Move {
        task_id: i64,
        target_project: i64,
        navigation: Navigation,
    },
    Share {
        task_id: i64,
        share: ShareTask,
    },
    GetSharables {
        task_id: i64,
    },
    RevokeSharable {
        task_id: i64,
        user: Option<String>,
        link: Option<String>,
    },
    UpdateContents {
        task_id: i64,
    },
    UpdateCompletedContents {
        task_id: i64,
    },
    UpdateContentRevision {
        task_id: i64,
        content_id: i64,
        revision_id: i64,
    },
    CreateContent {
        task_id: i64,
        text: String,
    },
    DeleteContent {
        task_id: i64,
        content_id: i64,
    },
    PatchContent {
        task_id: i64,
        content_id: i64,
        text: String,
    },
}

impl Intent for TaskIntent {
    fn name(&self) -> &'static str {
        self.into()
    }
}
