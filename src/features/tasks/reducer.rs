use crate::mvi::Reducer;

use super::intent::TaskIntent;
use super::state::TaskState;

pub struct TaskReducer;

impl Reducer for TaskReducer {
    type State = TaskState;
    type Intent = TaskIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TaskIntent::TasksReceived { tasks } => TaskState { tasks, ..state },
            TaskIntent::TaskReceived { task } => TaskState { task, ..state },
            TaskIntent::UpdateCompletedTaskNo { completed_task_no } => TaskState {
                completed_task_no,
                ..state
            },
            TaskIntent::UpdateLoadingCompletedTask { loading } => TaskState {
                loading_completed_task: loading,
                ..state
            },
            TaskIntent::SharablesReceived(sharables) => TaskState {
                shared_users: sharables.users,
                shared_links: sharables.links,
                ..state
            },
            TaskIntent::SharedLinkReceived { link } => TaskState {
                shared_link: link,
                ..state
            },
            TaskIntent::UpdateAddTaskVisible { visible } => TaskState {
                add_task_visible: visible,
                ..state
            },
            TaskIntent::CompletedTasksReceived { tasks } => TaskState {
                completed_tasks: tasks,
                ..state
            },
            TaskIntent::ContentsReceived { contents } => TaskState { contents, ..state },

            // Requests: handled by effects only
            TaskIntent::ApiErrorReceived { .. }
            | TaskIntent::UpdateTasks { .. }
            | TaskIntent::UpdateCompletedTasks { .. }
            | TaskIntent::Create { .. }
            | TaskIntent::Put { .. }
            | TaskIntent::Get { .. }
            | TaskIntent::GetCompleted { .. }
            | TaskIntent::Delete { .. }
            | TaskIntent::DeleteCompleted { .. }
            | TaskIntent::Patch { .. }
            | TaskIntent::Complete { .. }
            | TaskIntent::Uncomplete { .. }
            | TaskIntent::SetLabels { .. }
            | TaskIntent::Move { .. }
            | TaskIntent::Share { .. }
            | TaskIntent::GetSharables { .. }
            | TaskIntent::RevokeSharable { .. }
            | TaskIntent::UpdateContents { .. }
            | TaskIntent::UpdateCompletedContents { .. }
            | TaskIntent::UpdateContentRevision { .. }
            | TaskIntent::CreateContent { .. }
            | TaskIntent::DeleteContent { .. }
            | TaskIntent::PatchContent { .. } => state,
        }
    }
}
