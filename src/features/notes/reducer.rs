use crate::mvi::Reducer;

use super::intent::NoteIntent;
use super::state::NoteState;

pub struct NoteReducer;

impl Reducer for NoteReducer {
    type State = NoteState;
    type Intent = NoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NoteIntent::NotesReceived { notes } => NoteState { notes, ..state },
            NoteIntent::NoteReceived { note } => NoteState { note, ..state },
            NoteIntent::ContentsReceived { contents } => NoteState { contents, ..state },
            NoteIntent::UpdateAddNoteVisible { visible } => NoteState {
                add_note_visible: visible,
                ..state
            },
            NoteIntent::UpdateNotes { .. }
            | NoteIntent::Get { .. }
            | NoteIntent::Create { .. }
            | NoteIntent::Delete { .. }
            | NoteIntent::Patch { .. }
            | NoteIntent::Move { .. }
            | NoteIntent::SetLabels { .. }
            | NoteIntent::UpdateContents { .. } => state,
        }
    }
}
