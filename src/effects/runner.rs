use std::collections::HashMap;

use tokio::task::{AbortHandle, JoinSet};

use crate::store::{Activity, AppIntent, Dispatcher, IntentTag, Store};

use super::{EffectContext, Env, Generation, Policy};

/// Spawns one task per effect and enforces the latest-wins policy.
///
/// Owned by the dispatch loop, so intents reach it in dispatch order and
/// after the reducer has applied them. Dropping the runner aborts every
/// effect still running.
pub struct EffectRunner {
    env: Env,
    store: Store,
    dispatcher: Dispatcher,
    activity: Activity,
    tasks: JoinSet<()>,
    latest: HashMap<IntentTag, AbortHandle>,
}

impl EffectRunner {
    pub fn new(env: Env, store: Store, dispatcher: Dispatcher, activity: Activity) -> Self {
        Self {
            env,
            store,
            dispatcher,
            activity,
            tasks: JoinSet::new(),
            latest: HashMap::new(),
        }
    }

    /// Starts the effect of `intent`, if it has one. `generation` is the one
    /// the intent was stamped with when it was dispatched.
    pub fn handle(&mut self, intent: &AppIntent, generation: Generation) {
        self.reap();

        let Some(policy) = super::policy(intent) else {
            return;
        };
        let tag = intent.tag();
        if !generation.is_current() {
            tracing::trace!(intent = %tag, "skipping intent superseded while queued");
            return;
        }
        if policy == Policy::Latest {
            self.supersede(tag);
        }

        let ctx = EffectContext::new(
            self.env.clone(),
            self.store.clone(),
            self.dispatcher.clone(),
            generation,
            tag,
        );
        let guard = self.activity.begin();
        let effect = super::run(intent.clone(), ctx);
        let handle = self.tasks.spawn(async move {
            let _guard = guard;
            effect.await;
        });

        tracing::debug!(intent = %tag, ?policy, "effect started");
        if policy == Policy::Latest {
            self.latest.insert(tag, handle);
        }
    }

    fn supersede(&mut self, tag: IntentTag) {
        if let Some(previous) = self.latest.remove(&tag) {
            if !previous.is_finished() {
                tracing::debug!(intent = %tag, "superseding pending effect");
                previous.abort();
            }
        }
    }

    fn reap(&mut self) {
        while let Some(result) = self.tasks.try_join_next() {
            if let Err(err) = result {
                if err.is_panic() {
                    tracing::error!(error = %err, "effect panicked");
                }
            }
        }
    }
}
