//! Profile and credential types shared across the session core.
//!
//! `UserData` is the normalized profile record the session store owns and the
//! remote profile service persists. `CredentialBundle` is the shape an
//! identity provider hands back after an interactive sign-in; every field is
//! optional at the wire level so a partial response is detectable rather than
//! a deserialization failure.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AuthError;

// ─── UserData ───────────────────────────────────────────────────────

/// Normalized profile record for the signed-in user.
///
/// Immutable once constructed. Serializes with camelCase field names, which
/// is the wire shape of both the profile store and the post-login validation
/// payload.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Avatar URL from the provider profile.
    pub profile_image: String,
    /// Display name.
    pub name: String,
    /// Provider-assigned unique short name.
    pub handle: String,
    /// Provider-assigned identifier, distinct from the session uid.
    pub id: String,
    /// Opaque bearer token scoped to the provider. Sensitive: redacted from
    /// `Debug` output and never written through the logger.
    pub access_token: String,
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("profile_image", &self.profile_image)
            .field("name", &self.name)
            .field("handle", &self.handle)
            .field("id", &self.id)
            .field("access_token", &"[redacted]")
            .finish()
    }
}

// ─── Credential bundle ──────────────────────────────────────────────

/// An identity provider's response to a successful interactive sign-in.
///
/// All three parts are optional on the wire: providers under error
/// conditions have been observed returning partial payloads, and a missing
/// part must surface as [`AuthError::EmptyCredentials`] rather than a decode
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialBundle {
    /// Provider-issued session identifier. Becomes the session uid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Profile fields for the signed-in account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProviderProfile>,
    /// The credential granted by the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<ProviderCredential>,
}

/// Profile fields as the provider reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Some providers report this as a JSON number, others as a string.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    pub id: Option<String>,
}

/// The credential part of a bundle.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredential {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredential")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

impl CredentialBundle {
    /// Build a complete bundle. Mostly useful for in-process providers and
    /// tests.
    pub fn new(
        session_id: impl Into<String>,
        profile: ProviderProfile,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            session_id: Some(session_id.into()),
            profile: Some(profile),
            credential: Some(ProviderCredential {
                access_token: Some(access_token.into()),
            }),
        }
    }

    /// Split the bundle into the session uid and the normalized `UserData`.
    ///
    /// Fails with [`AuthError::EmptyCredentials`] if the session identifier,
    /// the profile, the credential, or any profile field is missing or
    /// empty. This is the single place where a provider response is
    /// validated.
    pub fn into_session(self) -> Result<(String, UserData), AuthError> {
        let uid = self
            .session_id
            .filter(|s| !s.is_empty())
            .ok_or(AuthError::EmptyCredentials)?;
        let profile = self.profile.ok_or(AuthError::EmptyCredentials)?;
        let access_token = self
            .credential
            .and_then(|c| c.access_token)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::EmptyCredentials)?;

        let user_data = UserData {
            profile_image: profile.avatar_url.ok_or(AuthError::EmptyCredentials)?,
            name: profile.display_name.ok_or(AuthError::EmptyCredentials)?,
            handle: profile.handle.ok_or(AuthError::EmptyCredentials)?,
            id: profile.id.ok_or(AuthError::EmptyCredentials)?,
            access_token,
        };
        Ok((uid, user_data))
    }
}

impl ProviderProfile {
    pub fn new(
        avatar_url: impl Into<String>,
        display_name: impl Into<String>,
        handle: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            avatar_url: Some(avatar_url.into()),
            display_name: Some(display_name.into()),
            handle: Some(handle.into()),
            id: Some(id.into()),
        }
    }
}

/// Accept a string or a bare number for an identifier field.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number for identifier, got {other}"
        ))),
    }
}
