//! Session transition events and their notification mapping.
//!
//! Each lifecycle operation describes its outcome as a [`SessionEvent`]; a
//! pure mapping decides which user-facing notification, if any, that outcome
//! produces. Keeping the mapping out of the state machine keeps both halves
//! independently testable.

use porter_core::Notification;

/// Outcome of a session store lifecycle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Interactive login established a session.
    LoggedIn,
    /// A previous session was restored from the profile store.
    AutoLoggedIn,
    /// Interactive login failed (provider error or incomplete bundle).
    LoginFailed,
    /// The session was cleared.
    LoggedOut,
    /// Restoration found nothing to restore. Intentionally silent: the
    /// absence of a stored profile is not an error.
    RestoreSkipped,
}

impl SessionEvent {
    /// The notification this outcome surfaces, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::LoggedIn => Some(Notification::success("Successfully logged in")),
            Self::AutoLoggedIn => Some(Notification::success("Automatically logged in")),
            Self::LoginFailed => Some(Notification::error("Could not log in!")),
            Self::LoggedOut => Some(Notification::success("Logged out")),
            Self::RestoreSkipped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use porter_core::NotificationKind;

    #[test]
    fn success_events_notify_success() {
        for event in [
            SessionEvent::LoggedIn,
            SessionEvent::AutoLoggedIn,
            SessionEvent::LoggedOut,
        ] {
            let n = event.notification().unwrap();
            assert_eq!(n.kind, NotificationKind::Success);
        }
    }

    #[test]
    fn failed_login_notifies_error() {
        let n = SessionEvent::LoginFailed.notification().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Could not log in!");
    }

    #[test]
    fn skipped_restore_is_silent() {
        assert!(SessionEvent::RestoreSkipped.notification().is_none());
    }

    #[test]
    fn messages() {
        assert_eq!(
            SessionEvent::LoggedIn.notification().unwrap().message,
            "Successfully logged in"
        );
        assert_eq!(
            SessionEvent::AutoLoggedIn.notification().unwrap().message,
            "Automatically logged in"
        );
        assert_eq!(
            SessionEvent::LoggedOut.notification().unwrap().message,
            "Logged out"
        );
    }
}
