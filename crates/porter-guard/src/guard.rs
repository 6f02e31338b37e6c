//! The navigation guard itself.

use std::sync::Arc;

use porter_core::{Navigator, NotificationKind, NotificationSink};
use porter_session::SessionWatch;

use crate::route::RouteDescriptor;

/// Outcome of a guarded transition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The transition proceeds to its target.
    Allowed,
    /// The transition was rerouted.
    Redirected { to: String },
}

/// External collaborator that applies the document/page title.
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

/// Guard configuration.
#[derive(Debug, Clone)]
pub struct GuardOptions {
    /// Where unauthorized attempts are sent (default: `/`).
    pub home_path: String,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            home_path: "/".to_string(),
        }
    }
}

/// Intercepts route transitions and gates protected routes on the session
/// store's authentication predicate.
///
/// Runs synchronously: the decision is made against the store's last
/// committed snapshot, never waiting on an in-flight login or restore.
pub struct NavigationGuard {
    session: SessionWatch,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    titles: Arc<dyn TitleSink>,
    options: GuardOptions,
}

impl NavigationGuard {
    pub fn new(
        session: SessionWatch,
        notifier: Arc<dyn NotificationSink>,
        navigator: Arc<dyn Navigator>,
        titles: Arc<dyn TitleSink>,
        options: GuardOptions,
    ) -> Self {
        Self {
            session,
            notifier,
            navigator,
            titles,
            options,
        }
    }

    /// Run the guard for one transition attempt.
    ///
    /// The title is applied first, unconditionally; the redirect, when one
    /// happens, comes after it.
    pub fn check(&self, route: &RouteDescriptor) -> Decision {
        self.titles.set_title(&route.title);

        if route.requires_auth && !self.session.is_authenticated() {
            self.notifier
                .notify(NotificationKind::Error, "Please log in");
            self.navigator.push(&self.options.home_path);
            return Decision::Redirected {
                to: self.options.home_path.clone(),
            };
        }

        Decision::Allowed
    }
}

impl std::fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("home_path", &self.options.home_path)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}
