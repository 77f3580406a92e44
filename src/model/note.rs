use serde::{Deserialize, Serialize};

use super::Label;

/// A note inside a project. Deleting a note also deletes its sub notes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub project_id: i64,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub sub_notes: Vec<Note>,
}
