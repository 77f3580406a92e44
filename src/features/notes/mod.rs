mod effects;
mod intent;
mod reducer;
mod state;

pub(crate) use effects::{policy, run};
pub use intent::NoteIntent;
pub use reducer::NoteReducer;
pub use state::NoteState;
