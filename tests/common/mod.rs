//! Shared test utilities: a scripted API, a mock HTTP backend and sample data.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use std::sync::Arc;

use bujo::effects::Env;
use bujo::model::{Note, Task, User};
use bujo::navigation::{Navigation, RouteLog};
use bujo::notify::NotificationLog;
use bujo::store::{AppIntent, AppState, Runtime};
use tokio::sync::broadcast;

pub use fake_api::FakeApi;

/// A running session wired to a [`FakeApi`] and in-memory boundaries.
pub struct Harness {
    pub runtime: Runtime,
    pub api: Arc<FakeApi>,
    pub notifications: Arc<NotificationLog>,
    pub routes: Arc<RouteLog>,
}

impl Harness {
    pub fn start() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(initial: AppState) -> Self {
        let api = Arc::new(FakeApi::new());
        let notifications = Arc::new(NotificationLog::new());
        let routes = Arc::new(RouteLog::new());
        let env = Env::new(api.clone(), notifications.clone());
        Self {
            runtime: Runtime::with_state(env, initial),
            api,
            notifications,
            routes,
        }
    }

    pub fn navigation(&self) -> Navigation {
        Navigation::new(self.routes.clone())
    }

    pub fn state(&self) -> AppState {
        self.runtime.store().state()
    }
}

/// Everything the observer received so far.
pub fn drain(observer: &mut broadcast::Receiver<AppIntent>) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    while let Ok(intent) = observer.try_recv() {
        intents.push(intent);
    }
    intents
}

/// Names of the observed intents, in order.
pub fn names(intents: &[AppIntent]) -> Vec<String> {
    intents.iter().map(|i| i.tag().to_string()).collect()
}

pub fn task(id: i64, name: &str) -> Task {
    Task {
        id,
        name: name.to_string(),
        owner: "alice".to_string(),
        project_id: 1,
        timezone: "UTC".to_string(),
        ..Task::default()
    }
}

pub fn note(id: i64, name: &str) -> Note {
    Note {
        id,
        name: name.to_string(),
        owner: "alice".to_string(),
        project_id: 1,
        ..Note::default()
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        ..User::default()
    }
}
