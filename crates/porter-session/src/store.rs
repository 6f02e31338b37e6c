//! The session store state machine.
//!
//! A single owned instance holds the `uid` + `UserData` pair for the
//! lifetime of the application. The pair is committed together: at no point
//! can an external reader observe a non-null uid alongside a null profile.
//! Mutations serialize on one write lock, held across the suspension points
//! of the lifecycle operations, so at most one of `login` / `auto_login` /
//! `logout` is in flight at a time. Readers never take that lock — they read
//! the last snapshot published through a watch channel, which stays
//! consistent (if possibly stale) while a mutation is suspended.

use std::fmt;
use std::sync::Arc;

use porter_core::{AuthError, Navigator, NotificationSink, SessionLogger, UserData};
use tokio::sync::{watch, RwLock};

use crate::events::SessionEvent;
use crate::options::SessionOptions;
use crate::profile::ProfileService;
use crate::provider::IdentityProvider;

/// The session state, owned exclusively by the store.
#[derive(Debug, Default)]
struct SessionState {
    uid: Option<String>,
    user_data: Option<UserData>,
}

/// A consistent copy of the session state at some commit point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Provider-issued session identifier; `None` means no session.
    pub uid: Option<String>,
    /// Profile paired with `uid`.
    pub user_data: Option<UserData>,
}

impl SessionSnapshot {
    /// Derived authentication predicate. Never stored, always recomputed.
    pub fn is_authenticated(&self) -> bool {
        self.uid.is_some() && self.user_data.is_some()
    }
}

/// A cheap, clonable reader over the session state.
///
/// Reading never suspends and never blocks a mutation: the watch channel
/// hands out the last committed snapshot.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<SessionSnapshot>,
}

impl SessionWatch {
    /// The last committed snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.rx.borrow().clone()
    }

    /// Synchronous read of the derived authentication predicate.
    pub fn is_authenticated(&self) -> bool {
        self.rx.borrow().is_authenticated()
    }

    /// Wait until the next commit is published.
    pub async fn changed(&mut self) {
        let _ = self.rx.changed().await;
    }
}

/// The session store handle. Clones share one state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<SessionState>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
    provider: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileService>,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    logger: SessionLogger,
    options: SessionOptions,
}

impl SessionStore {
    /// Create a store with no session and the given collaborators.
    pub fn new(
        options: SessionOptions,
        provider: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileService>,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (snapshot_tx, _) = watch::channel(SessionSnapshot::default());
        let logger = SessionLogger::new(options.logger.clone());
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(SessionState::default()),
                snapshot_tx,
                provider,
                profiles,
                notifier,
                navigator,
                logger,
                options,
            }),
        }
    }

    // ─── Reads ──────────────────────────────────────────────────────

    /// The last committed snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot_tx.borrow().clone()
    }

    /// Derived authentication predicate over the last committed snapshot.
    pub fn is_authenticated(&self) -> bool {
        self.inner.snapshot_tx.borrow().is_authenticated()
    }

    /// Subscribe to state commits.
    pub fn watch(&self) -> SessionWatch {
        SessionWatch {
            rx: self.inner.snapshot_tx.subscribe(),
        }
    }

    // ─── Raw commits ────────────────────────────────────────────────

    /// Replace the session identifier.
    ///
    /// The lifecycle operations are the only callers that keep the
    /// uid/profile pair consistent; use them unless wiring display state by
    /// hand.
    pub async fn set_uid(&self, uid: Option<String>) {
        let mut state = self.inner.state.write().await;
        state.uid = uid;
        self.publish(&state);
    }

    /// Replace the profile record.
    pub async fn set_user_data(&self, user_data: Option<UserData>) {
        let mut state = self.inner.state.write().await;
        state.user_data = user_data;
        self.publish(&state);
    }

    // ─── Lifecycle operations ───────────────────────────────────────

    /// Interactive login.
    ///
    /// Runs the provider's sign-in flow, validates the returned bundle,
    /// commits profile-then-uid as one snapshot, submits the profile for
    /// backend validation (outcome logged, never consulted), and notifies.
    /// On failure the prior state is untouched and a single error
    /// notification is emitted.
    pub async fn login(&self) -> Result<(), AuthError> {
        let inner = &self.inner;
        let mut state = inner.state.write().await;

        let bundle = match inner.provider.authenticate_interactive().await {
            Ok(bundle) => bundle,
            Err(err) => {
                inner
                    .logger
                    .error(&format!("interactive sign-in failed: {err:#}"));
                self.emit(SessionEvent::LoginFailed);
                return Err(AuthError::Provider(err.to_string()));
            }
        };

        let (uid, user_data) = match bundle.into_session() {
            Ok(parts) => parts,
            Err(err) => {
                inner
                    .logger
                    .error("provider returned an incomplete credential bundle");
                self.emit(SessionEvent::LoginFailed);
                return Err(err);
            }
        };

        // Profile before identifier: a reader that can see the uid can
        // always see the profile that goes with it.
        state.user_data = Some(user_data.clone());
        state.uid = Some(uid);
        self.publish(&state);
        inner.logger.info(&format!(
            "session established for @{}",
            user_data.handle
        ));

        if let Err(err) = inner.profiles.validate(&user_data).await {
            inner
                .logger
                .warn(&format!("post-login validation call failed: {err}"));
        }

        self.emit(SessionEvent::LoggedIn);
        Ok(())
    }

    /// Restore a previous session from the profile store.
    ///
    /// Silent when no record exists: the absence of a stored profile means
    /// there is no prior session, not that something went wrong. A lookup
    /// transport failure is treated the same way for the user — logged,
    /// state unchanged — but is reported to the caller.
    pub async fn auto_login(&self, external_uid: &str) -> Result<(), AuthError> {
        let inner = &self.inner;
        let mut state = inner.state.write().await;

        match inner.profiles.fetch(external_uid).await {
            Ok(Some(user_data)) => {
                state.user_data = Some(user_data);
                state.uid = Some(external_uid.to_string());
                self.publish(&state);
                inner
                    .logger
                    .info(&format!("session restored for uid {external_uid}"));
                self.emit(SessionEvent::AutoLoggedIn);
                Ok(())
            }
            Ok(None) => {
                inner
                    .logger
                    .debug(&format!("no stored profile for uid {external_uid}"));
                self.emit(SessionEvent::RestoreSkipped);
                Ok(())
            }
            Err(err) => {
                inner
                    .logger
                    .warn(&format!("session restore lookup failed: {err}"));
                self.emit(SessionEvent::RestoreSkipped);
                Err(AuthError::RemoteLookup(err.to_string()))
            }
        }
    }

    /// End the session.
    ///
    /// Provider sign-out is best-effort; the local reset happens no matter
    /// what. Unconditional: logging out while already logged out still
    /// notifies and navigates home.
    pub async fn logout(&self) {
        let inner = &self.inner;
        let mut state = inner.state.write().await;

        if let Err(err) = inner.provider.sign_out().await {
            let err = AuthError::SignOut(err.to_string());
            inner.logger.warn(&err.to_string());
        }

        // uid and profile are cleared together so the pairing invariant
        // holds in every observable state.
        state.uid = None;
        state.user_data = None;
        self.publish(&state);
        inner.logger.info("session cleared");

        self.emit(SessionEvent::LoggedOut);
        inner.navigator.push(&inner.options.home_path);
    }

    // ─── Internals ──────────────────────────────────────────────────

    /// Publish the current state as one atomic snapshot.
    fn publish(&self, state: &SessionState) {
        self.inner.snapshot_tx.send_replace(SessionSnapshot {
            uid: state.uid.clone(),
            user_data: state.user_data.clone(),
        });
    }

    /// Forward an outcome's notification, if it has one, to the sink.
    fn emit(&self, event: SessionEvent) {
        if let Some(notification) = event.notification() {
            self.inner
                .notifier
                .notify(notification.kind, notification.message);
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("SessionStore")
            .field("uid", &snapshot.uid)
            .field("authenticated", &snapshot.is_authenticated())
            .finish()
    }
}
