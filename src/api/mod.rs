//! External call boundary.
//!
//! Effects talk to the backend exclusively through these traits so the
//! pipeline can run against the real REST API ([`ApiClient`]) or a scripted
//! stand-in.

mod admin;
mod client;
mod error;
mod notes;
mod tasks;

pub use admin::AdminApi;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use notes::NoteApi;
pub use tasks::{CreateTask, PatchTask, ShareTask, TaskApi};

/// Everything the effect runner may call.
pub trait BujoApi: TaskApi + NoteApi + AdminApi {}

impl<T: TaskApi + NoteApi + AdminApi + ?Sized> BujoApi for T {}
