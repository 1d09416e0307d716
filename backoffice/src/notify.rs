//! Process-wide transient notifications.
//!
//! Screens report the outcome of mutating operations here instead of
//! touching any global presentation state. The queue has an explicit
//! lifecycle: push, auto-expire after a duration, drain.
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Cloneable sender handed to every screen.
#[derive(Clone, Debug)]
pub struct NotificationHandle {
    tx: mpsc::UnboundedSender<Notification>,
    default_duration: Duration,
}

impl NotificationHandle {
    pub fn push<S: Into<String>>(&self, level: Level, message: S, duration: Duration) {
        let notification = Notification {
            level,
            message: message.into(),
            expires_at: Instant::now() + duration,
        };
        self.tx
            .send(notification)
            .unwrap_or_else(|e| error!("Error {e} received when sending notification"));
    }
    pub fn success<S: Into<String>>(&self, message: S) {
        self.push(Level::Success, message, self.default_duration)
    }
    pub fn error<S: Into<String>>(&self, message: S) {
        self.push(Level::Error, message, self.default_duration)
    }
    pub fn info<S: Into<String>>(&self, message: S) {
        self.push(Level::Info, message, self.default_duration)
    }
}

/// Receiving end, owned by whatever renders notifications.
pub struct NotificationQueue {
    rx: mpsc::UnboundedReceiver<Notification>,
    entries: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new(default_duration: Duration) -> (Self, NotificationHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                rx,
                entries: VecDeque::new(),
            },
            NotificationHandle {
                tx,
                default_duration,
            },
        )
    }
    /// Pull newly pushed notifications in and drop expired ones.
    pub fn tick(&mut self) {
        while let Ok(notification) = self.rx.try_recv() {
            self.entries.push_back(notification);
        }
        let now = Instant::now();
        self.entries.retain(|n| !n.is_expired(now));
    }
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
