//! Navigation guard integration tests.
//!
//! A shared event log records title and navigation side effects in order,
//! so the tests can assert the title is applied before any redirect.

use std::sync::{Arc, Mutex};

use porter_core::logger::LoggerConfig;
use porter_core::{
    CredentialBundle, Navigator, NotificationKind, NotificationSink, ProviderProfile,
};
use porter_guard::{Decision, GuardOptions, NavigationGuard, RouteDescriptor, TitleSink};
use porter_session::{
    MemoryProfileService, SessionOptions, SessionStore, StaticIdentityProvider,
};

// ── Fakes ───────────────────────────────────────────────────────

type EventLog = Arc<Mutex<Vec<String>>>;

struct LoggedTitles(EventLog);

impl TitleSink for LoggedTitles {
    fn set_title(&self, title: &str) {
        self.0.lock().unwrap().push(format!("title:{title}"));
    }
}

struct LoggedNavigator(EventLog);

impl Navigator for LoggedNavigator {
    fn push(&self, path: &str) {
        self.0.lock().unwrap().push(format!("push:{path}"));
    }
}

#[derive(Default)]
struct RecordingSink {
    notes: Mutex<Vec<(NotificationKind, String)>>,
}

impl RecordingSink {
    fn notes(&self) -> Vec<(NotificationKind, String)> {
        self.notes.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.notes.lock().unwrap().push((kind, message.to_string()));
    }
}

// ── Helpers ─────────────────────────────────────────────────────

fn bundle() -> CredentialBundle {
    CredentialBundle::new(
        "u1",
        ProviderProfile::new("a", "Bob", "bob", "42"),
        "tok",
    )
}

struct Harness {
    store: SessionStore,
    guard: NavigationGuard,
    sink: Arc<RecordingSink>,
    events: EventLog,
}

fn harness() -> Harness {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::new(RecordingSink::default());
    let navigator = Arc::new(LoggedNavigator(events.clone()));

    let store = SessionStore::new(
        SessionOptions {
            logger: LoggerConfig {
                disabled: true,
                ..Default::default()
            },
            ..Default::default()
        },
        Arc::new(StaticIdentityProvider::new(bundle())),
        Arc::new(MemoryProfileService::new()),
        sink.clone(),
        navigator.clone(),
    );

    let guard = NavigationGuard::new(
        store.watch(),
        sink.clone(),
        navigator,
        Arc::new(LoggedTitles(events.clone())),
        GuardOptions::default(),
    );

    Harness {
        store,
        guard,
        sink,
        events,
    }
}

fn events(h: &Harness) -> Vec<String> {
    h.events.lock().unwrap().clone()
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_protected_route_redirects_home() {
    let h = harness();
    let route = RouteDescriptor::new("/profile", "Profile").protected();

    let decision = h.guard.check(&route);

    assert_eq!(decision, Decision::Redirected { to: "/".into() });
    assert_eq!(
        h.sink.notes(),
        vec![(NotificationKind::Error, "Please log in".to_string())]
    );
    // The title was applied before the redirect happened.
    assert_eq!(
        events(&h),
        vec!["title:Profile".to_string(), "push:/".to_string()]
    );
}

#[tokio::test]
async fn public_route_is_allowed_regardless_of_auth_state() {
    let h = harness();
    let route = RouteDescriptor::new("/", "Home");

    assert_eq!(h.guard.check(&route), Decision::Allowed);

    h.store.login().await.unwrap();
    assert_eq!(h.guard.check(&route), Decision::Allowed);

    // No redirect was pushed in either state.
    assert!(events(&h).iter().all(|e| e.starts_with("title:")));
}

#[tokio::test]
async fn authenticated_session_passes_the_protected_gate() {
    let h = harness();
    h.store.login().await.unwrap();

    let route = RouteDescriptor::new("/profile", "Profile").protected();
    let decision = h.guard.check(&route);

    assert_eq!(decision, Decision::Allowed);
    assert_eq!(events(&h), vec!["title:Profile".to_string()]);
    // Only the login notification, nothing from the guard.
    assert_eq!(h.sink.notes().len(), 1);
}

#[tokio::test]
async fn guard_tracks_logout() {
    let h = harness();
    let route = RouteDescriptor::new("/profile", "Profile").protected();

    h.store.login().await.unwrap();
    assert_eq!(h.guard.check(&route), Decision::Allowed);

    h.store.logout().await;
    assert_eq!(
        h.guard.check(&route),
        Decision::Redirected { to: "/".into() }
    );
}

#[tokio::test]
async fn title_is_set_on_every_attempt() {
    let h = harness();
    let protected = RouteDescriptor::new("/profile", "Profile").protected();
    let public = RouteDescriptor::new("/", "Home");

    h.guard.check(&protected);
    h.guard.check(&public);

    let titles: Vec<String> = events(&h)
        .into_iter()
        .filter(|e| e.starts_with("title:"))
        .collect();
    assert_eq!(titles, vec!["title:Profile", "title:Home"]);
}

#[tokio::test]
async fn custom_home_path_is_used_for_redirects() {
    let events: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::new(RecordingSink::default());
    let navigator = Arc::new(LoggedNavigator(events.clone()));
    let store = SessionStore::new(
        SessionOptions {
            logger: LoggerConfig {
                disabled: true,
                ..Default::default()
            },
            ..Default::default()
        },
        Arc::new(StaticIdentityProvider::new(bundle())),
        Arc::new(MemoryProfileService::new()),
        sink.clone(),
        navigator.clone(),
    );
    let guard = NavigationGuard::new(
        store.watch(),
        sink,
        navigator,
        Arc::new(LoggedTitles(events.clone())),
        GuardOptions {
            home_path: "/welcome".into(),
        },
    );

    let decision = guard.check(&RouteDescriptor::new("/profile", "Profile").protected());
    assert_eq!(
        decision,
        Decision::Redirected {
            to: "/welcome".into()
        }
    );
    assert_eq!(
        events.lock().unwrap().last(),
        Some(&"push:/welcome".to_string())
    );
}
