//! Shared HTTP client for the back-office REST API.
//!
//! Every authenticated endpoint implementation goes through this client so
//! bearer attachment and the refresh-and-replay handling of 401 responses
//! live in one place.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::multipart::Part;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use backoffice_core::constants::{AUTH_ENDPOINT, DEFAULT_API_BASE_URL};
use backoffice_core::errors::{Error, HttpError, Result};
use backoffice_core::session::{RefreshRequest, TokenPair, TokenStore};
use backoffice_core::uploads::ImageUpload;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::new(DEFAULT_API_BASE_URL)
    }
}

/// HTTP client with token persistence and single-flight session refresh.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    // Serializes refresh attempts so concurrent 401s produce one refresh.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Unexpected(format!("failed to initialize HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            base_url: config.base_url,
            tokens,
            refresh_gate: tokio::sync::Mutex::new(()),
        })
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .send_with_retry(|| Ok(self.http.get(self.url(path))))
            .await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send_with_retry(|| Ok(self.http.post(self.url(path)).json(body)))
            .await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .send_with_retry(|| Ok(self.http.put(self.url(path)).json(body)))
            .await?;
        Self::parse_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .send_with_retry(|| Ok(self.http.delete(self.url(path))))
            .await?;
        Self::expect_success(response).await
    }

    /// Sends a multipart request, rebuilding the form for a replay since a
    /// [`reqwest::multipart::Form`] is consumed on send.
    pub(crate) async fn send_multipart<T, F>(
        &self,
        method: Method,
        path: &str,
        form: F,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> Result<reqwest::multipart::Form>,
    {
        let response = self
            .send_with_retry(|| Ok(self.http.request(method.clone(), self.url(path)).multipart(form()?)))
            .await?;
        Self::parse_json(response).await
    }

    /// Sends an authenticated request, refreshing the session and replaying
    /// once if the server answers 401. A 401 on the replay means the session
    /// is gone for good.
    pub(crate) async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> Result<RequestBuilder>,
    {
        let response = self.send_once(build()?).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let stale_access = self.tokens.get()?.map(|pair| pair.access_token);
        self.refresh_session(stale_access.as_deref()).await?;

        let retried = self.send_once(build()?).await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            warn!("request rejected again after refresh");
            return Err(Error::SessionExpired);
        }
        Ok(retried)
    }

    async fn send_once(&self, builder: RequestBuilder) -> Result<Response> {
        let builder = match self.tokens.get()? {
            Some(pair) => builder.bearer_auth(pair.access_token),
            None => builder,
        };
        builder
            .send()
            .await
            .map_err(|e| Error::Http(HttpError::Transport(e.to_string())))
    }

    /// Rotates the stored token pair through `POST /auth/refresh`.
    ///
    /// Callers pass the access token their rejected request used. If the
    /// stored token has already moved past it, another task refreshed while
    /// this one waited at the gate and no request is made. A failed refresh
    /// leaves the stored tokens untouched.
    pub(crate) async fn refresh_session(&self, stale_access: Option<&str>) -> Result<()> {
        let _guard = self.refresh_gate.lock().await;

        let current = self.tokens.get()?;
        if !needs_refresh(current.as_ref(), stale_access) {
            debug!("session already refreshed by a concurrent request");
            return Ok(());
        }
        let current = current.ok_or(Error::SessionExpired)?;

        debug!("refreshing session tokens");
        let body = RefreshRequest {
            refresh_token: current.refresh_token,
        };
        let response = self
            .http
            .post(self.url(&format!("{}/refresh", AUTH_ENDPOINT)))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(HttpError::Transport(e.to_string())))?;

        if !response.status().is_success() {
            warn!("token refresh rejected with HTTP {}", response.status());
            return Err(Error::SessionExpired);
        }

        let fresh: TokenPair = Self::parse_json(response).await?;
        self.tokens.set(&fresh)?;
        Ok(())
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(HttpError::Transport(e.to_string())))?;

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Http(HttpError::Decode(format!("{}: {}", e, truncate(&body)))))
    }

    pub(crate) async fn expect_success(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    pub(crate) fn image_part(image: &ImageUpload) -> Result<Part> {
        Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| Error::Unexpected(format!("invalid image content type: {}", e)))
    }
}

/// Whether this caller still has to perform the refresh, given the access
/// token its rejected request was sent with.
fn needs_refresh(current: Option<&TokenPair>, stale_access: Option<&str>) -> bool {
    match (current, stale_access) {
        // No stored session at all; force the SessionExpired path.
        (None, _) => true,
        // The stored token is the one that was just rejected.
        (Some(current), Some(stale)) => current.access_token == stale,
        // The request went out unauthenticated but a token exists now.
        (Some(_), None) => false,
    }
}

/// Maps a non-2xx response to an error, preferring the server's message.
fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                truncate(body)
            }
        });
    Error::Http(HttpError::Status {
        status: status.as_u16(),
        message,
    })
}

fn truncate(body: &str) -> String {
    body.chars().take(200).collect()
}
