//! The authenticated API client.
//!
//! [`ApiClient`] is the single entry point every endpoint group goes
//! through: it issues the HTTP call with the session cookie attached,
//! transparently recovers from an expired session with a single-flight
//! refresh-and-retry, and normalizes every failure into
//! [`ClientError`].

use std::sync::Arc;

use futures::FutureExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::{
    AuthApi, ClassificationApi, ConnectionsApi, DashboardApi, HealthApi, MessagesApi, SyncsApi,
    TasksApi,
};
use crate::config::ClientConfig;
use crate::error::{ClientError, classify_http_error};
use crate::paths;
use crate::refresh::RefreshGate;

/// Options for a single API request.
///
/// Defaults to a GET with no body and no extra headers; the session cookie
/// is always attached by the underlying client.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    body: Option<Value>,
    headers: Vec<(String, String)>,
    retry_on_401: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            retry_on_401: true,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// JSON body to send with the request.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a per-request header override.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Whether a 401 should trigger the refresh-and-retry path. Defaults to
    /// `true`; forced off for calls targeting the refresh endpoint itself.
    pub fn retry_on_401(mut self, retry: bool) -> Self {
        self.retry_on_401 = retry;
        self
    }
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
    refresh: RefreshGate,
}

/// Client for the composite inbox service.
///
/// Cheap to clone; clones share the HTTP connection pool, the cookie store
/// and the refresh gate.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    pub fn timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Option<std::time::Duration>) -> Self {
        self.config.connect_timeout = connect_timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: Option<S>) -> Self {
        self.config.user_agent = user_agent.map(|s| s.into());
        self
    }

    /// Add a default header applied to all requests.
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Use a custom `reqwest` client instead of building one. Takes
    /// precedence over the timeout/header settings; the caller is
    /// responsible for enabling a cookie store on it.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<ApiClient, ClientError> {
        let http = match self.http_client {
            Some(client) => client,
            None => build_http_client(&self.config)?,
        };
        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                http,
                config: self.config,
                refresh: RefreshGate::new(),
            }),
        })
    }
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ClientError> {
    let mut default_headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Config(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("invalid value for header {name:?}: {e}")))?;
        default_headers.insert(header_name, header_value);
    }

    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .default_headers(default_headers);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder
        .build()
        .map_err(|e| ClientError::Config(e.to_string()))
}

impl ApiClient {
    /// Create a client from an existing configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        ApiClientBuilder {
            config,
            http_client: None,
        }
        .build()
    }

    /// Returns a builder for the given base URL.
    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            config: ClientConfig::new(base_url),
            http_client: None,
        }
    }

    /// Build a client from `UNIBOX_API_URL` and friends.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Session and account-connection endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    /// Provider connection endpoints.
    pub fn connections(&self) -> ConnectionsApi<'_> {
        ConnectionsApi { client: self }
    }

    /// Synced message endpoints.
    pub fn messages(&self) -> MessagesApi<'_> {
        MessagesApi { client: self }
    }

    /// Sync job endpoints.
    pub fn syncs(&self) -> SyncsApi<'_> {
        SyncsApi { client: self }
    }

    /// Task endpoints on the actions service.
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi { client: self }
    }

    /// Classification, brief and generated-task endpoints.
    pub fn classification(&self) -> ClassificationApi<'_> {
        ClassificationApi { client: self }
    }

    /// Aggregated dashboard endpoint.
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi { client: self }
    }

    /// Liveness probe endpoint.
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi { client: self }
    }

    /// Issue a request against the composite service.
    ///
    /// On a 401 (for any path except the refresh endpoint) the client joins
    /// or starts the single-flight session refresh and then re-issues the
    /// original request exactly once. The retried attempt never refreshes
    /// again; if it fails, that failure is final. If the refresh itself
    /// fails, the original 401 error is returned and the refresh failure is
    /// only logged.
    pub async fn request_json(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value, ClientError> {
        // The refresh endpoint is exempt: retrying it through itself would
        // recurse.
        let allow_refresh = options.retry_on_401 && path != paths::AUTH_REFRESH;

        match self.attempt(path, &options).await {
            Err(original) if original.is_unauthorized() && allow_refresh => {
                match self.refresh_session().await {
                    Ok(()) => self.attempt(path, &options).await,
                    Err(refresh_error) => {
                        warn!(
                            path,
                            error = %refresh_error,
                            "session refresh failed; surfacing the original error"
                        );
                        Err(original)
                    }
                }
            }
            result => result,
        }
    }

    /// Join or start the single-flight refresh call.
    async fn refresh_session(&self) -> Result<(), ClientError> {
        let client = self.clone();
        self.inner
            .refresh
            .run(move || {
                async move {
                    debug!("session expired; refreshing");
                    client
                        .attempt(
                            paths::AUTH_REFRESH,
                            &RequestOptions::new().method(Method::POST),
                        )
                        .await?;
                    debug!("session refreshed");
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    /// One attempt on the wire: no refresh, no retry.
    async fn attempt(&self, path: &str, options: &RequestOptions) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.inner.config.base_url, path);
        let request_id = Uuid::new_v4();
        debug!(%request_id, method = %options.method, %url, "sending request");

        let mut request = self.inner.http.request(options.method.clone(), &url);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Http(format!("request to {url} failed: {e}")))?;
        let status = response.status();
        debug!(%request_id, status = status.as_u16(), "response received");

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            // Read the body once as text; classification attempts the JSON
            // parse on the captured string.
            let body = response.text().await.unwrap_or_default();
            return Err(classify_http_error(status, &body, retry_after));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Http(format!("failed to read response from {url}: {e}")))?;
        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text)
            .map_err(|e| ClientError::Json(format!("invalid json from {url}: {e}")))
    }

    // Verb helpers for the endpoint groups.

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new()).await
    }

    pub(crate) async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new().method(Method::POST).body(body))
            .await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new().method(Method::POST))
            .await
    }

    pub(crate) async fn put(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new().method(Method::PUT).body(body))
            .await
    }

    pub(crate) async fn patch(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new().method(Method::PATCH).body(body))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Value, ClientError> {
        self.request_json(path, RequestOptions::new().method(Method::DELETE))
            .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.config.base_url)
            .finish_non_exhaustive()
    }
}
