// Matrix Tools Hub - app/notify.rs
//
// Notification centre: stacked, auto-dismissing banners.
// Pure state; rendering lives in ui/panels/notifications.rs.

use crate::util::constants;
use std::time::{Duration, Instant};

/// Visual style of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// One banner currently on screen.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created: Instant,
}

impl Notification {
    fn new(message: String, kind: NotificationKind) -> Self {
        Self {
            message,
            kind,
            created: Instant::now(),
        }
    }

    fn expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created) >= lifetime
    }
}

/// Holds the visible notification stack.
///
/// Notifications expire `lifetime` after creation or on manual dismissal;
/// the stack is capped, evicting the oldest first.
#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    lifetime: Duration,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        tracing::debug!(kind = ?kind, message = %message, "Notification");
        self.items.push(Notification::new(message, kind));
        if self.items.len() > constants::MAX_NOTIFICATIONS {
            let overflow = self.items.len() - constants::MAX_NOTIFICATIONS;
            self.items.drain(..overflow);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(message, NotificationKind::Info);
    }

    /// Manual close of the banner at `index`.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Drop banners older than the configured lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items.retain(|n| !n.expired(now, lifetime));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
