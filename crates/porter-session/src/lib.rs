//! # porter-session
//!
//! The session store: a single owned instance holding the current identity
//! (`uid` + [`UserData`](porter_core::UserData)) with an enumerated set of
//! mutation entry points — interactive [`login`](SessionStore::login),
//! [`auto_login`](SessionStore::auto_login) restoration, and
//! [`logout`](SessionStore::logout) — and a derived `is_authenticated`
//! predicate the rest of the application reads.
//!
//! The identity provider, the remote profile service, the notification sink,
//! and the router are injected as capabilities, so the state machine itself
//! stays substitutable and testable.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use porter_core::{NotificationKind, NotificationSink, Navigator};
//! use porter_session::{
//!     HttpProfileOptions, HttpProfileService, SessionOptions, SessionStore,
//!     StaticIdentityProvider,
//! };
//! use porter_core::{CredentialBundle, ProviderProfile};
//!
//! struct Toasts;
//! impl NotificationSink for Toasts {
//!     fn notify(&self, _kind: NotificationKind, message: &str) {
//!         println!("{message}");
//!     }
//! }
//!
//! struct Router;
//! impl Navigator for Router {
//!     fn push(&self, path: &str) {
//!         println!("-> {path}");
//!     }
//! }
//!
//! # async fn example() -> Result<(), porter_core::AuthError> {
//! let provider = Arc::new(StaticIdentityProvider::new(CredentialBundle::new(
//!     "u1",
//!     ProviderProfile::new("https://example.com/a.png", "Bob", "bob", "42"),
//!     "tok",
//! )));
//! let profiles = Arc::new(HttpProfileService::new(HttpProfileOptions {
//!     base_url: "https://my-app.com".into(),
//!     ..Default::default()
//! }));
//!
//! let store = SessionStore::new(
//!     SessionOptions::default(),
//!     provider,
//!     profiles,
//!     Arc::new(Toasts),
//!     Arc::new(Router),
//! );
//!
//! store.login().await?;
//! assert!(store.is_authenticated());
//! # Ok(())
//! # }
//! ```

mod events;
mod options;
mod profile;
mod provider;
mod store;

pub use events::SessionEvent;
pub use options::SessionOptions;
pub use profile::{
    HttpProfileOptions, HttpProfileService, MemoryProfileService, ProfileError, ProfileService,
};
pub use provider::{IdentityProvider, StaticIdentityProvider};
pub use store::{SessionSnapshot, SessionStore, SessionWatch};
