use std::fmt;

use serde::Serialize;

use crate::features::admin::{AdminIntent, AdminReducer, AdminState};
use crate::features::notes::{NoteIntent, NoteReducer, NoteState};
use crate::features::tasks::{TaskIntent, TaskReducer, TaskState};
use crate::mvi::{Intent, Reducer, SliceState};

/// The whole state tree. Each field is owned by its slice reducer.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AppState {
    pub tasks: TaskState,
    pub notes: NoteState,
    pub admin: AdminState,
}

impl SliceState for AppState {}

/// Any intent understood by the store.
#[derive(Debug, Clone)]
pub enum AppIntent {
    Tasks(TaskIntent),
    Notes(NoteIntent),
    Admin(AdminIntent),
}

impl AppIntent {
    pub fn tag(&self) -> IntentTag {
        match self {
            AppIntent::Tasks(intent) => IntentTag::new("task", intent.name()),
            AppIntent::Notes(intent) => IntentTag::new("note", intent.name()),
            AppIntent::Admin(intent) => IntentTag::new("admin", intent.name()),
        }
    }
}

impl Intent for AppIntent {
    fn name(&self) -> &'static str {
        self.tag().name
    }
}

impl From<TaskIntent> for AppIntent {
    fn from(intent: TaskIntent) -> Self {
        AppIntent::Tasks(intent)
    }
}

impl From<NoteIntent> for AppIntent {
    fn from(intent: NoteIntent) -> Self {
        AppIntent::Notes(intent)
    }
}

impl From<AdminIntent> for AppIntent {
    fn from(intent: AdminIntent) -> Self {
        AppIntent::Admin(intent)
    }
}

/// Slice name plus intent name, e.g. `admin/getUsersByRole`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntentTag {
    pub slice: &'static str,
    pub name: &'static str,
}

impl IntentTag {
    pub const fn new(slice: &'static str, name: &'static str) -> Self {
        Self { slice, name }
    }
}

impl fmt::Display for IntentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.slice, self.name)
    }
}

/// Routes each intent to the reducer of its slice. Other slices are
/// returned untouched.
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AppIntent::Tasks(intent) => AppState {
                tasks: TaskReducer::reduce(state.tasks, intent),
                ..state
            },
            AppIntent::Notes(intent) => AppState {
                notes: NoteReducer::reduce(state.notes, intent),
                ..state
            },
            AppIntent::Admin(intent) => AppState {
                admin: AdminReducer::reduce(state.admin, intent),
                ..state
            },
        }
    }
}
