use serde::Serialize;

use crate::model::{Content, Note};
use crate::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteState {
    pub add_note_visible: bool,
    pub notes: Vec<Note>,
    pub note: Option<Note>,
    pub contents: Vec<Content>,
}

impl SliceState for NoteState {}
