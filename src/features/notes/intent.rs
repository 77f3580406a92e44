use strum::IntoStaticStr;

use crate::model::{Content, Note};
use crate::mvi::Intent;
use crate::navigation::Navigation;

#[derive(Debug, Clone, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum NoteIntent {
    NotesReceived { notes: Vec<Note> },
    NoteReceived { note: Option<Note> },
    ContentsReceived { contents: Vec<Content> },
    UpdateAddNoteVisible { visible: bool },

    UpdateNotes { project_id: i64 },
    Get { note_id: i64 },
    Create { project_id: i64, name: String },
    /// Also deletes the note's sub notes.
    Delete { note_id: i64 },
    Patch { note_id: i64, name: String },
    Move {
        note_id: i64,
        target_project: i64,
        navigation: Navigation,
    },
    SetLabels { note_id: i64, labels: Vec<i64> },
    UpdateContents { note_id: i64 },
}

impl Intent for NoteIntent {
    fn name(&self) -> &'static str {
        self.into()
    }
}
