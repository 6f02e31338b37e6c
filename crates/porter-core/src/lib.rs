#![doc = include_str!("../README.md")]

pub mod error;
pub mod logger;
pub mod navigate;
pub mod notify;
pub mod types;

// Re-exports for convenience
pub use error::AuthError;
pub use logger::{LogHandler, LogLevel, LoggerConfig, SessionLogger};
pub use navigate::Navigator;
pub use notify::{Notification, NotificationKind, NotificationSink};
pub use types::{CredentialBundle, ProviderCredential, ProviderProfile, UserData};
