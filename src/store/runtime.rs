use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::effects::{EffectRunner, Env};

use super::activity::Activity;
use super::app::{AppIntent, AppState};
use super::dispatcher::{Dispatcher, Queued};
use super::handle::Store;

/// Wires store, dispatcher and effect runner together for one session.
///
/// The dispatch loop runs until the runtime is shut down or dropped. The
/// runner holds a dispatcher of its own, so the queue never closes by itself.
pub struct Runtime {
    store: Store,
    dispatcher: Dispatcher,
    activity: Activity,
    driver: JoinHandle<()>,
}

impl Runtime {
    /// Starts a session with an empty state. Must be called inside a tokio
    /// runtime.
    pub fn start(env: Env) -> Self {
        Self::with_state(env, AppState::default())
    }

    pub fn with_state(env: Env, initial: AppState) -> Self {
        let activity = Activity::new();
        let store = Store::new(initial);
        let (dispatcher, rx) = Dispatcher::channel(activity.clone());
        let runner = EffectRunner::new(env, store.clone(), dispatcher.clone(), activity.clone());
        let driver = tokio::spawn(drive(rx, store.clone(), runner));

        Self {
            store,
            dispatcher,
            activity,
            driver,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        self.dispatcher.dispatch(intent);
    }

    /// Resolves once every dispatched intent was applied and every effect it
    /// triggered has finished.
    pub async fn settled(&self) {
        self.activity.settled().await;
    }

    /// Stops the dispatch loop. Queued intents are dropped and every effect
    /// still in flight is aborted together with the runner that owns it.
    pub fn shutdown(self) {
        tracing::debug!(pending = self.activity.pending(), "shutting down store");
        self.driver.abort();
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn drive(mut rx: mpsc::UnboundedReceiver<Queued>, store: Store, mut runner: EffectRunner) {
    while let Some((intent, generation, _queued)) = rx.recv().await {
        store.apply(intent.clone());
        runner.handle(&intent, generation);
    }
}
