//! State slices, one per domain area.
//!
//! Each feature follows the same layout:
//! - `state.rs` - slice record
//! - `intent.rs` - closed set of intents for the slice
//! - `reducer.rs` - pure state transitions
//! - `effects.rs` - external calls triggered by request intents

pub mod admin;
pub mod notes;
pub mod tasks;
