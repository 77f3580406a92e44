//! Notification boundary: transient, text-only messages shown to the user.

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }
}

/// Surfaces notifications to the user. Must not block.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints notifications to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => eprintln!("✓ {}", notification.text),
            Level::Error => eprintln!("✗ {}", notification.text),
        }
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.lock().clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .iter()
            .filter(|n| n.level == Level::Error)
            .cloned()
            .collect()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries.lock().push(notification);
    }
}
