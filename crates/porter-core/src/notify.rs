//! Notification boundary.
//!
//! The session core never owns toast state. It emits `(kind, message)` pairs
//! through a [`NotificationSink`] the host application injects, and consumes
//! no return value.

/// Whether a notification reports success or an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing notification produced by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notification {
    pub const fn success(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message,
        }
    }
}

/// External collaborator that surfaces success/error toasts.
///
/// Fire-and-forget: implementations must not block and their failures are
/// invisible to the core.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}
