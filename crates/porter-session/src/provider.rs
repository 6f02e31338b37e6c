//! Identity provider capability.
//!
//! Wraps a third-party OAuth popup/redirect flow. The flow itself runs
//! outside this core; the adapter only hands back a
//! [`CredentialBundle`](porter_core::CredentialBundle) or an opaque error.

use async_trait::async_trait;
use porter_core::CredentialBundle;

/// The interactive OAuth capability injected into the session store.
///
/// User cancellation, provider errors, and network failures all collapse
/// into the opaque `anyhow::Error`; the store maps them to a single
/// `AuthError::Provider` category.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug {
    /// Begin the provider-hosted interactive sign-in flow and wait for its
    /// outcome.
    async fn authenticate_interactive(&self) -> anyhow::Result<CredentialBundle>;

    /// End the provider-side session. Best-effort; the store never
    /// propagates a failure from here.
    async fn sign_out(&self) -> anyhow::Result<()>;
}

/// An in-process provider that returns a fixed bundle.
///
/// Useful for development against a canned account and for wiring tests
/// without a real provider.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    bundle: CredentialBundle,
}

impl StaticIdentityProvider {
    pub fn new(bundle: CredentialBundle) -> Self {
        Self { bundle }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn authenticate_interactive(&self) -> anyhow::Result<CredentialBundle> {
        Ok(self.bundle.clone())
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
