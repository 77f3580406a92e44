//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. It never panics,
/// and intents it does not care about return the state untouched.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
