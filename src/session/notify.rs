//! Toast notifications with a fixed lifetime

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default toast lifetime
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    items: VecDeque<Notification>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            ttl,
        }
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into(), Instant::now());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into(), Instant::now());
    }

    pub fn push(&mut self, kind: NotificationKind, message: String, shown_at: Instant) {
        self.items.push_back(Notification {
            kind,
            message,
            shown_at,
        });
    }

    /// Drop toasts older than the lifetime
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items
            .retain(|n| now.saturating_duration_since(n.shown_at) < ttl);
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.items
            .iter()
            .rev()
            .find(|n| n.kind == NotificationKind::Error)
            .map(|n| n.message.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_after_ttl() {
        let mut toasts = Notifications::default();
        let t0 = Instant::now();
        toasts.push(NotificationKind::Error, "boom".to_string(), t0);
        toasts.push(NotificationKind::Success, "ok".to_string(), t0 + Duration::from_secs(3));

        toasts.expire(t0 + Duration::from_secs(4));
        assert_eq!(toasts.len(), 2);

        toasts.expire(t0 + Duration::from_secs(5));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().unwrap().message, "ok");
        assert_eq!(toasts.last_error(), None);
    }
}
