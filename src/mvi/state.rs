//! Base trait for state slices.

/// Marker trait for state slices.
///
/// Slices should be:
/// - Cheap to clone (subscribers get snapshots)
/// - Comparable (PartialEq decides whether subscribers are woken)
/// - Defaultable (the initial state of the session)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
