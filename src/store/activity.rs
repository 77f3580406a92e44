use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Default)]
struct ActivityInner {
    pending: AtomicUsize,
    idle: Notify,
}

/// Counts queued intents and running effects.
///
/// Work is registered with [`Activity::begin`] and released when the returned
/// guard drops, including when an effect is aborted.
#[derive(Clone, Default)]
pub struct Activity {
    inner: Arc<ActivityInner>,
}

impl Activity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> ActivityGuard {
        self.inner.pending.fetch_add(1, Ordering::SeqCst);
        ActivityGuard {
            inner: self.inner.clone(),
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.pending.load(Ordering::SeqCst)
    }

    /// Resolves once nothing is queued or running.
    pub async fn settled(&self) {
        loop {
            let notified = self.inner.idle.notified();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Releases one unit of work on drop.
pub struct ActivityGuard {
    inner: Arc<ActivityInner>,
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        if self.inner.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.idle.notify_waiters();
        }
    }
}
