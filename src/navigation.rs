//! Navigation boundary.
//!
//! Some intents (moving an item to another project) carry a navigation handle
//! so the effect can redirect the view once the mutation succeeded. The handle
//! is passed through intents untouched.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Something that can change the current route of the view.
pub trait Navigator: Send + Sync {
    fn push(&self, route: &str);
}

/// Clonable handle to a [`Navigator`], carried inside intents.
#[derive(Clone)]
pub struct Navigation {
    navigator: Arc<dyn Navigator>,
}

impl Navigation {
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// A handle that goes nowhere. Routes are only logged.
    pub fn detached() -> Self {
        Self::new(Arc::new(Detached))
    }

    pub fn push(&self, route: &str) {
        self.navigator.push(route);
    }
}

impl fmt::Debug for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Navigation")
    }
}

struct Detached;

impl Navigator for Detached {
    fn push(&self, route: &str) {
        tracing::debug!(route, "navigation requested without a view");
    }
}

/// In-memory navigator remembering every pushed route.
#[derive(Default)]
pub struct RouteLog {
    routes: Mutex<Vec<String>>,
}

impl RouteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.routes.lock().last().cloned()
    }
}

impl Navigator for RouteLog {
    fn push(&self, route: &str) {
        self.routes.lock().push(route.to_string());
    }
}
