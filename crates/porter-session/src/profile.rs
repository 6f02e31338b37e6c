//! Remote profile service capability.
//!
//! Two calls: a lookup by session uid used when restoring a previous
//! session, and a post-login validation call whose payload is
//! `{"userData": {…}}` and whose response the state machine never consults.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use porter_core::UserData;

/// Errors from the remote profile service.
///
/// "No record" is not an error — the lookup returns `Ok(None)` for that.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    /// Network-level failure (DNS, connection refused, timeout, TLS).
    #[error("profile service unreachable: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("profile service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not decode into the expected shape.
    #[error("profile service response did not decode: {0}")]
    Decode(String),
}

/// The remote profile store and validation endpoint.
#[async_trait]
pub trait ProfileService: Send + Sync + std::fmt::Debug {
    /// Look up a stored profile by session uid. `Ok(None)` means no record
    /// exists for that uid.
    async fn fetch(&self, uid: &str) -> Result<Option<UserData>, ProfileError>;

    /// Submit a freshly established profile for backend validation. The
    /// caller ignores the outcome beyond logging it.
    async fn validate(&self, user_data: &UserData) -> Result<(), ProfileError>;
}

// ─── HTTP implementation ────────────────────────────────────────────

/// Configuration for [`HttpProfileService`].
#[derive(Debug, Clone)]
pub struct HttpProfileOptions {
    /// Base URL of the backend (e.g. `https://my-app.com`).
    pub base_url: String,

    /// Path prefix for the profile endpoints (default: `/api`).
    pub base_path: String,

    /// HTTP request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl Default for HttpProfileOptions {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            base_path: "/api".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP-backed profile service.
///
/// `GET {base}/users/{uid}` for lookups (404 means no record) and
/// `POST {base}/validate` for the post-login validation call.
#[derive(Debug, Clone)]
pub struct HttpProfileService {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProfileService {
    pub fn new(options: HttpProfileOptions) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(options.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let base_url = format!(
            "{}{}",
            options.base_url.trim_end_matches('/'),
            options.base_path
        );

        Self { http, base_url }
    }

    /// Get the full base URL (base_url + base_path).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Extract a service error from a non-success response.
    async fn status_error(resp: reqwest::Response) -> ProfileError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| truncate(&body, 200));
        ProfileError::Status { status, message }
    }
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn fetch(&self, uid: &str) -> Result<Option<UserData>, ProfileError> {
        let resp = self
            .http
            .get(self.url(&format!("/users/{uid}")))
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        let data = resp
            .json::<UserData>()
            .await
            .map_err(|e| ProfileError::Decode(e.to_string()))?;
        Ok(Some(data))
    }

    async fn validate(&self, user_data: &UserData) -> Result<(), ProfileError> {
        let resp = self
            .http
            .post(self.url("/validate"))
            .json(&serde_json::json!({ "userData": user_data }))
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        Ok(())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max])
    } else {
        s.to_string()
    }
}

// ─── In-memory implementation ───────────────────────────────────────

/// An in-memory profile service backed by a `HashMap`.
///
/// Useful for development and tests. Validation calls are recorded so a
/// caller can assert they were issued.
#[derive(Debug, Default)]
pub struct MemoryProfileService {
    records: Mutex<HashMap<String, UserData>>,
    validated: Mutex<Vec<UserData>>,
}

impl MemoryProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a profile record under the given uid.
    pub fn insert(&self, uid: impl Into<String>, data: UserData) {
        self.records.lock().unwrap().insert(uid.into(), data);
    }

    /// The profiles submitted for validation, in call order.
    pub fn validated(&self) -> Vec<UserData> {
        self.validated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileService for MemoryProfileService {
    async fn fetch(&self, uid: &str) -> Result<Option<UserData>, ProfileError> {
        Ok(self.records.lock().unwrap().get(uid).cloned())
    }

    async fn validate(&self, user_data: &UserData) -> Result<(), ProfileError> {
        self.validated.lock().unwrap().push(user_data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(handle: &str) -> UserData {
        UserData {
            profile_image: "a".into(),
            name: "Bob".into(),
            handle: handle.into(),
            id: "42".into(),
            access_token: "tok".into(),
        }
    }

    #[test]
    fn http_options_defaults() {
        let opts = HttpProfileOptions::default();
        assert_eq!(opts.base_path, "/api");
        assert_eq!(opts.timeout_secs, 30);
    }

    #[test]
    fn http_url_building() {
        let service = HttpProfileService::new(HttpProfileOptions {
            base_url: "https://example.com".into(),
            ..Default::default()
        });
        assert_eq!(service.base_url(), "https://example.com/api");
        assert_eq!(service.url("/users/u1"), "https://example.com/api/users/u1");
        assert_eq!(service.url("/validate"), "https://example.com/api/validate");
    }

    #[test]
    fn http_trailing_slash_normalized() {
        let service = HttpProfileService::new(HttpProfileOptions {
            base_url: "https://example.com/".into(),
            ..Default::default()
        });
        assert_eq!(service.base_url(), "https://example.com/api");
    }

    #[test]
    fn http_custom_base_path() {
        let service = HttpProfileService::new(HttpProfileOptions {
            base_url: "https://example.com".into(),
            base_path: "/profiles/v2".into(),
            ..Default::default()
        });
        assert_eq!(service.base_url(), "https://example.com/profiles/v2");
    }

    #[test]
    fn truncate_long_bodies() {
        let long = "x".repeat(300);
        let out = truncate(&long, 200);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));
        assert_eq!(truncate("short", 200), "short");
    }

    #[tokio::test]
    async fn memory_fetch_and_validate() {
        let service = MemoryProfileService::new();
        assert!(service.fetch("u1").await.unwrap().is_none());

        service.insert("u1", user("bob"));
        let fetched = service.fetch("u1").await.unwrap().unwrap();
        assert_eq!(fetched.handle, "bob");

        service.validate(&fetched).await.unwrap();
        assert_eq!(service.validated().len(), 1);
    }

    #[test]
    fn error_display() {
        let err = ProfileError::Status {
            status: 503,
            message: "maintenance".into(),
        };
        assert_eq!(
            err.to_string(),
            "profile service returned 503: maintenance"
        );
        assert!(ProfileError::Network("refused".into())
            .to_string()
            .contains("refused"));
    }
}
