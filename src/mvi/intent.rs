//! Base trait for intents (user gestures and effect results).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (delete, edit, move)
/// - Requests for an external call, picked up by the effect runner
/// - Results of external calls, folded into state by a reducer
///
/// Every intent exposes a stable camelCase name used as its tag.
pub trait Intent: Clone + std::fmt::Debug + Send + 'static {
    /// Stable name of the variant, e.g. `tasksReceived`.
    fn name(&self) -> &'static str;
}
