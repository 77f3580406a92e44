use crate::api::ApiResult;
use crate::effects::{EffectContext, Policy};
use crate::model::Note;
use crate::navigation::Navigation;

use super::intent::NoteIntent;

pub(crate) fn policy(intent: &NoteIntent) -> Option<Policy> {
    match intent {
        NoteIntent::UpdateNotes { .. } | NoteIntent::Get { .. } | NoteIntent::UpdateContents { .. } => {
            Some(Policy::Latest)
        }
        NoteIntent::Create { .. }
        | NoteIntent::Delete { .. }
        | NoteIntent::Patch { .. }
        | NoteIntent::Move { .. }
        | NoteIntent::SetLabels { .. } => Some(Policy::Every),
        NoteIntent::NotesReceived { .. }
        | NoteIntent::NoteReceived { .. }
        | NoteIntent::ContentsReceived { .. }
        | NoteIntent::UpdateAddNoteVisible { .. } => None,
    }
}

pub(crate) async fn run(intent: NoteIntent, ctx: EffectContext) {
    let result = match intent {
        NoteIntent::UpdateNotes { project_id } => update_notes(&ctx, project_id).await,
        NoteIntent::Get { note_id } => get_note(&ctx, note_id).await,
        NoteIntent::Create { project_id, name } => create_note(&ctx, project_id, &name).await,
        NoteIntent::Delete { note_id } => delete_note(&ctx, note_id).await,
        NoteIntent::Patch { note_id, name } => patch_note(&ctx, note_id, &name).await,
        NoteIntent::Move {
            note_id,
            target_project,
            navigation,
        } => move_note(&ctx, note_id, target_project, &navigation).await,
        NoteIntent::SetLabels { note_id, labels } => set_labels(&ctx, note_id, &labels).await,
        NoteIntent::UpdateContents { note_id } => update_contents(&ctx, note_id).await,
        NoteIntent::NotesReceived { .. }
        | NoteIntent::NoteReceived { .. }
        | NoteIntent::ContentsReceived { .. }
        | NoteIntent::UpdateAddNoteVisible { .. } => Ok(()),
    };

    if let Err(err) = result {
        ctx.fail(&err);
    }
}

async fn update_notes(ctx: &EffectContext, project_id: i64) -> ApiResult<()> {
    let notes = ctx.api().fetch_notes(project_id).await?;
    ctx.put(NoteIntent::NotesReceived { notes });
    Ok(())
}

async fn get_note(ctx: &EffectContext, note_id: i64) -> ApiResult<()> {
    let note = ctx.api().get_note(note_id).await?;
    ctx.put(NoteIntent::NoteReceived { note: Some(note) });
    Ok(())
}

async fn create_note(ctx: &EffectContext, project_id: i64, name: &str) -> ApiResult<()> {
    ctx.api().create_note(project_id, name).await?;
    update_notes(ctx, project_id).await?;
    ctx.put(NoteIntent::UpdateAddNoteVisible { visible: false });
    Ok(())
}

async fn delete_note(ctx: &EffectContext, note_id: i64) -> ApiResult<()> {
    let notes = ctx.api().delete_note(note_id).await?;
    ctx.put(NoteIntent::NotesReceived { notes });

    let viewing = ctx.select(|s| s.notes.note.as_ref().map(|n| n.id) == Some(note_id));
    if viewing {
        ctx.put(NoteIntent::NoteReceived { note: None });
    }
    Ok(())
}

async fn patch_note(ctx: &EffectContext, note_id: i64, name: &str) -> ApiResult<()> {
    let note = ctx.api().patch_note(note_id, name).await?;
    let notes = ctx.select(|s| replace_note(&s.notes.notes, &note));
    ctx.put(NoteIntent::NotesReceived { notes });
    ctx.put(NoteIntent::NoteReceived { note: Some(note) });
    Ok(())
}

async fn move_note(
    ctx: &EffectContext,
    note_id: i64,
    target_project: i64,
    navigation: &Navigation,
) -> ApiResult<()> {
    ctx.api().move_note(note_id, target_project).await?;
    ctx.success("Note moved successfully");
    ctx.navigate(navigation, &format!("/projects/{}", target_project));
    Ok(())
}

async fn set_labels(ctx: &EffectContext, note_id: i64, labels: &[i64]) -> ApiResult<()> {
    let note = ctx.api().set_note_labels(note_id, labels).await?;
    ctx.put(NoteIntent::NoteReceived { note: Some(note) });
    Ok(())
}

async fn update_contents(ctx: &EffectContext, note_id: i64) -> ApiResult<()> {
    let contents = ctx.api().get_note_contents(note_id).await?;
    ctx.put(NoteIntent::ContentsReceived { contents });
    Ok(())
}

fn replace_note(notes: &[Note], note: &Note) -> Vec<Note> {
    notes
        .iter()
        .map(|n| {
            if n.id == note.id {
                note.clone()
            } else {
                Note {
                    sub_notes: replace_note(&n.sub_notes, note),
                    ..n.clone()
                }
            }
        })
        .collect()
}
