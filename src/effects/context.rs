use std::sync::Arc;

use crate::api::{ApiError, BujoApi};
use crate::navigation::Navigation;
use crate::notify::{Notification, Notifier};
use crate::store::{AppIntent, AppState, Dispatcher, IntentTag, Store};

use super::Generation;

/// Collaborators shared by every effect.
#[derive(Clone)]
pub struct Env {
    pub api: Arc<dyn BujoApi>,
    pub notifier: Arc<dyn Notifier>,
}

impl Env {
    pub fn new(api: Arc<dyn BujoApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }
}

/// Handle given to one effect invocation.
///
/// Everything an effect emits goes through here and is dropped once the
/// invocation has been superseded.
pub struct EffectContext {
    env: Env,
    store: Store,
    dispatcher: Dispatcher,
    generation: Generation,
    tag: IntentTag,
}

impl EffectContext {
    pub(crate) fn new(
        env: Env,
        store: Store,
        dispatcher: Dispatcher,
        generation: Generation,
        tag: IntentTag,
    ) -> Self {
        Self {
            env,
            store,
            dispatcher,
            generation,
            tag,
        }
    }

    pub fn api(&self) -> &dyn BujoApi {
        self.env.api.as_ref()
    }

    pub fn tag(&self) -> IntentTag {
        self.tag
    }

    /// Reads the current state. Other intents may have been applied since the
    /// effect started.
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.store.select(f)
    }

    pub fn is_current(&self) -> bool {
        self.generation.is_current()
    }

    fn gate(&self, output: &'static str) -> bool {
        if self.is_current() {
            return true;
        }
        tracing::trace!(intent = %self.tag, output, "dropping output of superseded effect");
        false
    }

    /// Dispatches a follow-up intent.
    pub fn put(&self, intent: impl Into<AppIntent>) {
        if self.gate("intent") {
            self.dispatcher.dispatch(intent);
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        if self.gate("notification") {
            self.env.notifier.notify(Notification::success(text));
        }
    }

    /// Reports a failed external call as `<name> Error Received: <error>`.
    pub fn fail(&self, err: &ApiError) {
        if self.gate("notification") {
            tracing::warn!(intent = %self.tag, error = %err, "effect failed");
            self.env.notifier.notify(Notification::error(format!(
                "{} Error Received: {}",
                self.tag.name, err
            )));
        }
    }

    pub fn navigate(&self, navigation: &Navigation, route: &str) {
        if self.gate("navigation") {
            navigation.push(route);
        }
    }
}
