use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{AppIntent, IntentTag};

/// How concurrent intents with the same tag are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Run every invocation to completion.
    Every,
    /// Only the most recent invocation may emit anything.
    Latest,
}

/// Per-tag counter bumped each time a latest-wins invocation starts.
#[derive(Debug, Default)]
pub(crate) struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    /// Starts a new generation, making every earlier one stale.
    pub fn advance(&self) -> Generation {
        let value = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Generation {
            counter: Some(self.current.clone()),
            value,
        }
    }
}

/// Generation counters of every latest-wins tag, shared by all dispatchers of
/// one session.
#[derive(Clone, Default)]
pub(crate) struct Generations {
    counters: Arc<Mutex<HashMap<IntentTag, GenerationCounter>>>,
}

impl Generations {
    /// Stamps a freshly dispatched intent. A latest-wins intent starts a new
    /// generation for its tag right away, so anything the previous invocation
    /// emits from now on is dropped, even while this intent is still queued.
    pub fn stamp(&self, intent: &AppIntent) -> Generation {
        match super::policy(intent) {
            Some(Policy::Latest) => self.counters.lock().entry(intent.tag()).or_default().advance(),
            Some(Policy::Every) | None => Generation::untracked(),
        }
    }
}

/// The generation an invocation was started with.
#[derive(Debug, Clone)]
pub struct Generation {
    counter: Option<Arc<AtomicU64>>,
    value: u64,
}

impl Generation {
    /// A generation that never goes stale, for run-every effects.
    pub fn untracked() -> Self {
        Self {
            counter: None,
            value: 0,
        }
    }

    pub fn is_current(&self) -> bool {
        match &self.counter {
            Some(counter) => counter.load(Ordering::SeqCst) == self.value,
            None => true,
        }
    }
}
