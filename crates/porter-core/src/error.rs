//! The session core's error taxonomy.
//!
//! Every failure here degrades to "the user remains (or becomes)
//! unauthenticated" plus, where the operation calls for it, a single
//! notification. None of them is fatal to the host application, and none of
//! them triggers an automatic retry.

/// Errors produced by the session store's lifecycle operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    /// The interactive sign-in flow errored or was cancelled. The adapter's
    /// internal detail is opaque; only the rendered message survives.
    #[error("interactive sign-in failed: {0}")]
    Provider(String),

    /// The provider returned a bundle with a missing or empty session
    /// identifier, profile, or credential.
    #[error("provider returned an incomplete credential bundle")]
    EmptyCredentials,

    /// The stored-profile lookup during session restoration failed in
    /// transit. Treated as "no session to restore": logged, never surfaced
    /// to the user.
    #[error("stored profile lookup failed: {0}")]
    RemoteLookup(String),

    /// Provider sign-out failed. Best-effort: never surfaced and never
    /// blocks the local state reset.
    #[error("provider sign-out failed: {0}")]
    SignOut(String),
}

impl AuthError {
    /// Returns `true` if the interactive sign-in flow itself failed.
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    /// Returns `true` if the provider's bundle was incomplete.
    pub fn is_empty_credentials(&self) -> bool {
        matches!(self, Self::EmptyCredentials)
    }

    /// Returns `true` if a stored-profile lookup failed.
    pub fn is_remote_lookup(&self) -> bool {
        matches!(self, Self::RemoteLookup(_))
    }

    /// Returns `true` if provider sign-out failed.
    pub fn is_sign_out(&self) -> bool {
        matches!(self, Self::SignOut(_))
    }
}
