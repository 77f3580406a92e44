mod effects;
mod intent;
mod reducer;
mod state;

pub(crate) use effects::{policy, run};
pub use intent::AdminIntent;
pub use reducer::AdminReducer;
pub use state::AdminState;
