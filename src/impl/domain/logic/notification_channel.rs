use std::time::Duration;

use tokio::time::Instant;

use crate::entities::Notification;

#[derive(Debug)]
struct ActiveNotification {
    notification: Notification,
    expires_at: Instant,
}

/// Holds at most one toast. A new toast replaces the current one at once, and
/// each toast expires `duration` after it was shown.
#[derive(Debug)]
pub(crate) struct NotificationChannel {
    duration: Duration,
    active: Option<ActiveNotification>,
}

impl NotificationChannel {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub(crate) fn show(&mut self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            message = %notification.message,
            "showing notification"
        );
        self.active = Some(ActiveNotification {
            notification,
            expires_at: Instant::now() + self.duration,
        });
    }

    /// The visible toast, if it has not yet expired.
    pub(crate) fn current(&self) -> Option<&Notification> {
        self.active
            .as_ref()
            .filter(|a| Instant::now() < a.expires_at)
            .map(|a| &a.notification)
    }

    /// Time left before the visible toast dismisses itself.
    pub(crate) fn remaining(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|a| a.expires_at.saturating_duration_since(Instant::now()))
            .filter(|d| !d.is_zero())
    }

    pub(crate) fn dismiss(&mut self) {
        self.active = None;
    }
}
