mod effects;
mod intent;
mod reducer;
mod state;

pub(crate) use effects::{policy, run};
pub use intent::TaskIntent;
pub use reducer::TaskReducer;
pub use state::TaskState;
