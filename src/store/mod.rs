//! The single state tree and the loop that feeds intents into it.

mod activity;
mod app;
mod dispatcher;
mod handle;
mod runtime;

pub use activity::{Activity, ActivityGuard};
pub use app::{AppIntent, AppReducer, AppState, IntentTag};
pub use dispatcher::Dispatcher;
pub use handle::Store;
pub use runtime::Runtime;
