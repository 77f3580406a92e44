use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::mvi::Reducer;

use super::app::{AppIntent, AppReducer, AppState};

const OBSERVER_CAPACITY: usize = 256;

struct StoreInner {
    state: watch::Sender<AppState>,
    applied: broadcast::Sender<AppIntent>,
}

/// Handle to the single state tree.
///
/// Cloning is cheap; all clones share the same state. The state only changes
/// through [`Store::apply`], which runs the reducer atomically.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        let (applied, _) = broadcast::channel(OBSERVER_CAPACITY);
        Self {
            inner: Arc::new(StoreInner { state, applied }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Receiver woken whenever an intent changed the state.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Receiver of every intent applied from now on, in order.
    pub fn observe(&self) -> broadcast::Receiver<AppIntent> {
        self.inner.applied.subscribe()
    }

    /// Applies `intent` and returns whether the state changed.
    pub fn apply(&self, intent: AppIntent) -> bool {
        let tag = intent.tag();
        let observed = (self.inner.applied.receiver_count() > 0).then(|| intent.clone());

        let changed = self.inner.state.send_if_modified(|state| {
            let next = AppReducer::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
        tracing::debug!(intent = %tag, changed, "applied intent");

        if let Some(intent) = observed {
            // No receivers left is fine.
            let _ = self.inner.applied.send(intent);
        }
        changed
    }
}
