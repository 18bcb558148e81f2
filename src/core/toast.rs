use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

/// A short-lived notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Notifications waiting to be shown, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: VecDeque<Toast>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.toasts.push_back(Toast {
            message: message.into(),
            expires_at: now + self.ttl,
        });
    }

    /// Drop expired notifications and return the ones still visible.
    pub fn active(&mut self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.retain(|toast| !toast.is_expired(now));
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
