//! Model-View-Intent primitives shared by every state slice.
//!
//! ```text
//! Intent ──→ Reducer ──→ SliceState ──→ subscribers
//!    ↑            │
//!    └── Effects ←┘ (async intents only)
//! ```
//!
//! - **SliceState**: plain record owned by exactly one reducer
//! - **Intent**: closed set of requested changes for that slice
//! - **Reducer**: pure function folding an intent into a new state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
