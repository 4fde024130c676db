//! REST client for the mindwell backend.
//!
//! One async method per backend operation, grouped by domain in the
//! submodules. Every request reads the bearer token synchronously from the
//! [`TokenStore`] and attaches `Authorization: Bearer <token>` when one is
//! present. Non-2xx responses become [`ApiError::Status`]. There is no
//! retry, queuing or idempotency key.

mod analytics;
mod auth;
mod chat;
mod community;
mod crisis;
mod goals;
mod mood;
mod notifications;
mod personalization;
mod therapy;

pub use chat::DEFAULT_HISTORY_LIMIT;

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::traits::{Headers, HttpClient, Response, TokenStore};

/// Maximum number of body bytes echoed into an error message.
const MAX_ERROR_BODY: usize = 200;

/// Client for the backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL without trailing slash, e.g. `http://localhost:8000/api`
    base_url: String,
    http: Arc<dyn HttpClient>,
    tokens: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.tokens.has_token())
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token storage shared with the auth store.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request headers, including the bearer token when one is stored.
    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(token) = self.tokens.token() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
        serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(&self.url(path), &self.headers()).await?;
        parse_json(path, response)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!("POST {}", path);
        let body = Self::encode(body)?;
        let response = self
            .http
            .post(&self.url(path), &body, &self.headers())
            .await?;
        parse_json(path, response)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!("PUT {}", path);
        let body = Self::encode(body)?;
        let response = self
            .http
            .put(&self.url(path), &body, &self.headers())
            .await?;
        parse_json(path, response)
    }

    /// PUT whose response body is ignored.
    pub(crate) async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        tracing::debug!("PUT {}", path);
        let body = Self::encode(body)?;
        let response = self
            .http
            .put(&self.url(path), &body, &self.headers())
            .await?;
        ensure_success(path, &response)
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        tracing::debug!("POST {}", path);
        let body = Self::encode(body)?;
        let response = self
            .http
            .post(&self.url(path), &body, &self.headers())
            .await?;
        ensure_success(path, &response)
    }
}

/// Percent-encode a path segment or query value.
pub(crate) fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn ensure_success(path: &str, response: &Response) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }
    let message = error_message(&response.body);
    tracing::warn!("{} failed with HTTP {}: {}", path, response.status, message);
    Err(ApiError::Status {
        status: response.status,
        message,
    })
}

fn parse_json<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    ensure_success(path, &response)?;
    response.json::<T>().map_err(|e| {
        let text = String::from_utf8_lossy(&response.body);
        ApiError::Decode(format!(
            "{}: {}. Response: {}",
            path,
            e,
            truncate(&text, MAX_ERROR_BODY)
        ))
    })
}

/// Pull a human-readable message out of an error body.
///
/// Prefers a JSON `message` or `error` field, falling back to the raw text.
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        "Unknown error".to_string()
    } else {
        truncate(text, MAX_ERROR_BODY).to_string()
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
