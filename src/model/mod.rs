//! Records exchanged with the backend and held in state slices.

mod content;
mod note;
mod sharing;
mod task;
mod user;

pub use content::{Content, Revision};
pub use note::Note;
pub use sharing::{ProjectItemSharables, SharableLink};
pub use task::{Label, ReminderSetting, Task};
pub use user::{Role, User};
