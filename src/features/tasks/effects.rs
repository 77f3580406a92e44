//! External calls behind task request intents.

use crate::api::{ApiResult, CreateTask, PatchTask, ShareTask};
use crate::effects::{EffectContext, Policy};
use crate::model::{Content, Revision, Task};
use crate::navigation::Navigation;

use super::intent::TaskIntent;

pub(crate) fn policy(intent: &TaskIntent) -> Option<Policy> {
    match intent {
        TaskIntent::UpdateTasks { .. }
        | TaskIntent::UpdateCompletedTasks { .. }
        | TaskIntent::Get { .. }
        | TaskIntent::GetCompleted { .. }
        | TaskIntent::GetSharables { .. }
        | TaskIntent::UpdateContents { .. }
        | TaskIntent::UpdateCompletedContents { .. }
        | TaskIntent::UpdateContentRevision { .. } => Some(Policy::Latest),

        TaskIntent::Create { .. }
        | TaskIntent::Put { .. }
        | TaskIntent::Delete { .. }
        | TaskIntent::DeleteCompleted { .. }
        | TaskIntent::Patch { .. }
        | TaskIntent::Complete { .. }
        | TaskIntent::Uncomplete { .. }
        | TaskIntent::SetLabels { .. }
        | TaskIntent::Move { .. }
        | TaskIntent::Share { .. }
        | TaskIntent::RevokeSharable { .. }
        | TaskIntent::CreateContent { .. }
        | TaskIntent::DeleteContent { .. }
        | TaskIntent::PatchContent { .. } => Some(Policy::Every),

        TaskIntent::TasksReceived { .. }
        | TaskIntent::TaskReceived { .. }
        | TaskIntent::UpdateCompletedTaskNo { .. }
        | TaskIntent::UpdateLoadingCompletedTask { .. }
        | TaskIntent::SharablesReceived(_)
        | TaskIntent::SharedLinkReceived { .. }
        | TaskIntent::UpdateAddTaskVisible { .. }
        | TaskIntent::CompletedTasksReceived { .. }
        | TaskIntent::ContentsReceived { .. }
        | TaskIntent::ApiErrorReceived { .. } => None,
    }
}

pub(crate) async fn run(intent: TaskIntent, ctx: EffectContext) {
    let result = match intent {
        TaskIntent::UpdateTasks { project_id } => update_tasks(&ctx, project_id).await,
        TaskIntent::UpdateCompletedTasks {
            project_id,
            page_no,
            page_size,
        } => update_completed_tasks(&ctx, project_id, page_no, page_size).await,
        TaskIntent::Get { task_id } => get_task(&ctx, task_id).await,
        TaskIntent::GetCompleted { task_id } => get_completed_task(&ctx, task_id).await,
        TaskIntent::Create { project_id, task } => create_task(&ctx, project_id, &task).await,
        TaskIntent::Put { project_id, tasks } => put_tasks(&ctx, project_id, tasks).await,
        TaskIntent::Delete { task_id } => delete_task(&ctx, task_id).await,
        TaskIntent::DeleteCompleted { task_id } => delete_completed_task(&ctx, task_id).await,
        TaskIntent::Patch { task_id, patch } => patch_task(&ctx, task_id, &patch).await,
        TaskIntent::Complete { task_id, date_time } => {
            complete_task(&ctx, task_id, date_time.as_deref()).await
        }
        TaskIntent::Uncomplete { task_id } => uncomplete_task(&ctx, task_id).await,
        TaskIntent::SetLabels { task_id, labels } => set_labels(&ctx, task_id, &labels).await,
        TaskIntent::Move {
            task_id,
            target_project,
            navigation,
        } => move_task(&ctx, task_id, target_project, &navigation).await,
        TaskIntent::Share { task_id, share } => share_task(&ctx, task_id, &share).await,
        TaskIntent::GetSharables { task_id } => get_sharables(&ctx, task_id).await,
        TaskIntent::RevokeSharable {
            task_id,
            user,
            link,
        } => revoke_sharable(&ctx, task_id, user.as_deref(), link.as_deref()).await,
        TaskIntent::UpdateContents { task_id } => update_contents(&ctx, task_id).await,
        TaskIntent::UpdateCompletedContents { task_id } => {
            let contents = ctx.api().get_completed_task_contents(task_id).await;
            contents.map(|contents| ctx.put(TaskIntent::ContentsReceived { contents }))
        }
        TaskIntent::UpdateContentRevision {
            task_id,
            content_id,
            revision_id,
        } => update_content_revision(&ctx, task_id, content_id, revision_id).await,
        TaskIntent::CreateContent { task_id, text } => {
            match ctx.api().add_task_content(task_id, &text).await {
                Ok(_) => update_contents(&ctx, task_id).await,
                Err(err) => Err(err),
            }
        }
        TaskIntent::DeleteContent {
            task_id,
            content_id,
        } => match ctx.api().delete_task_content(task_id, content_id).await {
            Ok(()) => update_contents(&ctx, task_id).await,
            Err(err) => Err(err),
        },
        TaskIntent::PatchContent {
            task_id,
            content_id,
            text,
        } => match ctx.api().patch_task_content(task_id, content_id, &text).await {
            Ok(_) => update_contents(&ctx, task_id).await,
            Err(err) => Err(err),
        },
        TaskIntent::TasksReceived { .. }
        | TaskIntent::TaskReceived { .. }
        | TaskIntent::UpdateCompletedTaskNo { .. }
        | TaskIntent::UpdateLoadingCompletedTask { .. }
        | TaskIntent::SharablesReceived(_)
        | TaskIntent::SharedLinkReceived { .. }
        | TaskIntent::UpdateAddTaskVisible { .. }
        | TaskIntent::CompletedTasksReceived { .. }
        | TaskIntent::ContentsReceived { .. }
        | TaskIntent::ApiErrorReceived { .. } => Ok(()),
    };

    if let Err(err) = result {
        ctx.put(TaskIntent::ApiErrorReceived {
            error: err.to_string(),
        });
        ctx.fail(&err);
    }
}

async fn update_tasks(ctx: &EffectContext, project_id: i64) -> ApiResult<()> {
    let tasks = ctx.api().fetch_tasks(project_id).await?;
    ctx.put(TaskIntent::TasksReceived { tasks });
    Ok(())
}

async fn update_completed_tasks(
    ctx: &EffectContext,
    project_id: i64,
    page_no: u32,
    page_size: u32,
) -> ApiResult<()> {
    ctx.put(TaskIntent::UpdateLoadingCompletedTask { loading: true });

    let page = ctx
        .api()
        .fetch_completed_tasks(project_id, page_no, page_size)
        .await;
    let result = page.map(|page| {
        let mut tasks = if page_no == 0 {
            Vec::new()
        } else {
            ctx.select(|s| s.tasks.completed_tasks.clone())
        };
        tasks.extend(page);
        ctx.put(TaskIntent::CompletedTasksReceived { tasks });
        ctx.put(TaskIntent::UpdateCompletedTaskNo {
            completed_task_no: page_no.saturating_add(1),
        });
    });

    ctx.put(TaskIntent::UpdateLoadingCompletedTask { loading: false });
    result
}

async fn get_task(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    let task = ctx.api().get_task(task_id).await?;
    ctx.put(TaskIntent::TaskReceived { task: Some(task) });
    Ok(())
}

async fn get_completed_task(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    let task = ctx.api().get_completed_task(task_id).await?;
    ctx.put(TaskIntent::TaskReceived { task: Some(task) });
    Ok(())
}

async fn create_task(ctx: &EffectContext, project_id: i64, task: &CreateTask) -> ApiResult<()> {
    ctx.api().create_task(project_id, task).await?;
    let tasks = ctx.api().fetch_tasks(project_id).await?;
    ctx.put(TaskIntent::TasksReceived { tasks });
    ctx.put(TaskIntent::UpdateAddTaskVisible { visible: false });
    Ok(())
}

async fn put_tasks(ctx: &EffectContext, project_id: i64, tasks: Vec<Task>) -> ApiResult<()> {
    ctx.api().put_tasks(project_id, &tasks).await?;
    ctx.put(TaskIntent::TasksReceived { tasks });
    Ok(())
}

async fn delete_task(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    let tasks = ctx.api().delete_task(task_id).await?;
    ctx.put(TaskIntent::TasksReceived { tasks });
    clear_current_task(ctx, task_id);
    Ok(())
}

async fn delete_completed_task(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    ctx.api().delete_completed_task(task_id).await?;
    let tasks = ctx.select(|s| remove_task(&s.tasks.completed_tasks, task_id));
    ctx.put(TaskIntent::CompletedTasksReceived { tasks });
    clear_current_task(ctx, task_id);
    Ok(())
}

async fn patch_task(ctx: &EffectContext, task_id: i64, patch: &PatchTask) -> ApiResult<()> {
    let task = ctx.api().patch_task(task_id, patch).await?;
    let tasks = ctx.select(|s| replace_task(&s.tasks.tasks, &task));
    ctx.put(TaskIntent::TasksReceived { tasks });
    ctx.put(TaskIntent::TaskReceived { task: Some(task) });
    Ok(())
}

async fn complete_task(
    ctx: &EffectContext,
    task_id: i64,
    date_time: Option<&str>,
) -> ApiResult<()> {
    ctx.api().complete_task(task_id, date_time).await?;
    let tasks = ctx.select(|s| remove_task(&s.tasks.tasks, task_id));
    ctx.put(TaskIntent::TasksReceived { tasks });
    clear_current_task(ctx, task_id);
    Ok(())
}

async fn uncomplete_task(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    ctx.api().uncomplete_task(task_id).await?;
    let tasks = ctx.select(|s| remove_task(&s.tasks.completed_tasks, task_id));
    ctx.put(TaskIntent::CompletedTasksReceived { tasks });
    clear_current_task(ctx, task_id);
    Ok(())
}

async fn set_labels(ctx: &EffectContext, task_id: i64, labels: &[i64]) -> ApiResult<()> {
    let task = ctx.api().set_task_labels(task_id, labels).await?;
    let tasks = ctx.select(|s| replace_task(&s.tasks.tasks, &task));
    ctx.put(TaskIntent::TasksReceived { tasks });
    ctx.put(TaskIntent::TaskReceived { task: Some(task) });
    Ok(())
}

async fn move_task(
    ctx: &EffectContext,
    task_id: i64,
    target_project: i64,
    navigation: &Navigation,
) -> ApiResult<()> {
    ctx.api().move_task(task_id, target_project).await?;
    ctx.success("Task moved successfully");
    ctx.navigate(navigation, &format!("/projects/{}", target_project));
    Ok(())
}

async fn share_task(ctx: &EffectContext, task_id: i64, share: &ShareTask) -> ApiResult<()> {
    let link = ctx.api().share_task(task_id, share).await?;
    match link {
        Some(link) if share.generate_link => {
            ctx.put(TaskIntent::SharedLinkReceived { link: link.link });
            Ok(())
        }
        _ => {
            ctx.success("Task shared successfully");
            get_sharables(ctx, task_id).await
        }
    }
}

async fn get_sharables(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    let sharables = ctx.api().get_task_sharables(task_id).await?;
    ctx.put(TaskIntent::SharablesReceived(sharables));
    Ok(())
}

async fn revoke_sharable(
    ctx: &EffectContext,
    task_id: i64,
    user: Option<&str>,
    link: Option<&str>,
) -> ApiResult<()> {
    ctx.api().revoke_task_sharable(task_id, user, link).await?;
    get_sharables(ctx, task_id).await
}

async fn update_contents(ctx: &EffectContext, task_id: i64) -> ApiResult<()> {
    let contents = ctx.api().get_task_contents(task_id).await?;
    ctx.put(TaskIntent::ContentsReceived { contents });
    Ok(())
}

async fn update_content_revision(
    ctx: &EffectContext,
    task_id: i64,
    content_id: i64,
    revision_id: i64,
) -> ApiResult<()> {
    let revision = ctx
        .api()
        .get_content_revision(task_id, content_id, revision_id)
        .await?;
    let contents = ctx.select(|s| with_revision(&s.tasks.contents, content_id, revision));
    ctx.put(TaskIntent::ContentsReceived { contents });
    Ok(())
}

fn clear_current_task(ctx: &EffectContext, task_id: i64) {
    let viewing = ctx.select(|s| s.tasks.task.as_ref().map(|t| t.id) == Some(task_id));
    if viewing {
        ctx.put(TaskIntent::TaskReceived { task: None });
    }
}

/// Copy of `tasks` with `task` swapped in wherever its id appears.
fn replace_task(tasks: &[Task], task: &Task) -> Vec<Task> {
    tasks
        .iter()
        .map(|t| {
            if t.id == task.id {
                task.clone()
            } else {
                Task {
                    sub_tasks: replace_task(&t.sub_tasks, task),
                    ..t.clone()
                }
            }
        })
        .collect()
}

/// Copy of `tasks` without `task_id`, searching sub tasks too.
fn remove_task(tasks: &[Task], task_id: i64) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.id != task_id)
        .map(|t| Task {
            sub_tasks: remove_task(&t.sub_tasks, task_id),
            ..t.clone()
        })
        .collect()
}

/// Caches the fetched revision text on the matching content.
fn with_revision(contents: &[Content], content_id: i64, revision: Revision) -> Vec<Content> {
    let mut contents = contents.to_vec();
    if let Some(content) = contents.iter_mut().find(|c| c.id == content_id) {
        match content.revisions.iter_mut().find(|r| r.id == revision.id) {
            Some(existing) => *existing = revision,
            None => content.revisions.push(revision),
        }
    }
    contents
}
