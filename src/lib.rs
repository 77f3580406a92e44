//! Client-side state synchronization for a bullet-journal style task and
//! note manager.
//!
//! Views dispatch intents into a single [`store::Store`]. Request intents are
//! picked up by the [`effects::EffectRunner`], which calls the backend through
//! [`api`] and dispatches the results back as new intents.

pub mod api;
pub mod config;
pub mod effects;
pub mod features;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod navigation;
pub mod notify;
pub mod store;
