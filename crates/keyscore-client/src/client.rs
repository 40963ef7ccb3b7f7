//! Main keysco.re API client implementation.

use crate::api::*;
use crate::config::ClientConfig;
use crate::download::Download;
use keyscore_core::{KeyscoreError, Result};
use reqwest::{Client as HttpClient, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Main keysco.re API client
///
/// Cheap to clone; clones share one connection pool. The client holds no
/// per-call state, so a single instance can serve concurrent requests.
#[derive(Clone)]
pub struct KeyscoreClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

/// Body of a non-2xx response
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

impl KeyscoreClient {
    /// Create a client with default settings and no API key
    pub fn new() -> Result<Self> {
        KeyscoreClientBuilder::new().build()
    }

    /// Create a client with the given API key using default settings
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        KeyscoreClientBuilder::new().api_key(api_key).build()
    }

    /// Create a client configured from `KEYSCORE_API_KEY` / `KEYSCORE_BASE_URL`
    pub fn from_env() -> Result<Self> {
        KeyscoreClientBuilder::from_config(ClientConfig::from_env()).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> KeyscoreClientBuilder {
        KeyscoreClientBuilder::new()
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Access count endpoints
    #[must_use]
    pub fn count(&self) -> CountApi<'_> {
        CountApi::new(self)
    }

    /// Access hash and IP lookup endpoints
    #[must_use]
    pub fn lookup(&self) -> LookupApi<'_> {
        LookupApi::new(self)
    }

    /// Access the search endpoint
    #[must_use]
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Access machine info and download endpoints
    #[must_use]
    pub fn machine(&self) -> MachineApi<'_> {
        MachineApi::new(self)
    }

    /// Access health and source listing endpoints
    #[must_use]
    pub fn service(&self) -> ServiceApi<'_> {
        ServiceApi::new(self)
    }

    /// Perform a GET request and decode the JSON response
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let request = self.build_request::<()>(Method::GET, path, query, None)?;
        self.execute_json(request).await
    }

    /// Perform a POST request with JSON body and decode the JSON response
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.build_request(Method::POST, path, &[], Some(body))?;
        self.execute_json(request).await
    }

    /// Perform a GET request and hand back the body as a stream
    pub(crate) async fn get_raw(&self, path: &str, query: &[(&str, &str)]) -> Result<Download> {
        let request = self.build_request::<()>(Method::GET, path, query, None)?;
        self.execute_raw(request).await
    }

    /// Build a request: base URL + path, encoded query, optional JSON body,
    /// bearer auth when an API key is configured
    pub(crate) fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<Request> {
        let mut url = Url::parse(&format!("{}{}", self.inner.base_url, path))
            .map_err(KeyscoreError::request)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut builder = self.inner.http.request(method, url);

        if let Some(body) = body {
            builder = builder.json(body);
        }

        if let Some(key) = &self.inner.api_key {
            builder = builder.bearer_auth(key);
        }

        builder.build().map_err(KeyscoreError::request)
    }

    /// Execute a request and decode the JSON response body
    pub(crate) async fn execute_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await.map_err(KeyscoreError::http)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request and return the live body stream with its metadata
    pub(crate) async fn execute_raw(&self, request: Request) -> Result<Download> {
        let response = self.send(request).await?;
        Ok(Download::from_response(response))
    }

    /// Send a request, turning non-2xx responses into [`KeyscoreError::Api`]
    #[instrument(skip_all, fields(method = %request.method(), path = %request.url().path()))]
    async fn send(&self, request: Request) -> Result<Response> {
        debug!(url = %request.url(), "sending request");

        let response = self
            .inner
            .http
            .execute(request)
            .await
            .map_err(KeyscoreError::http)?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::api_error(status.as_u16(), response).await)
        }
    }

    /// Convert an error response to a [`KeyscoreError::Api`].
    /// The message is taken from a `{"error": "..."}` body when there is one.
    async fn api_error(status: u16, response: Response) -> KeyscoreError {
        let body = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_default();

        KeyscoreError::Api { status, message }
    }
}

impl fmt::Debug for KeyscoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyscoreClient")
            .field("base_url", &self.inner.base_url)
            .field("api_key", &self.inner.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a [`KeyscoreClient`]
pub struct KeyscoreClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    user_agent: String,
    http: Option<HttpClient>,
}

impl Default for KeyscoreClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyscoreClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Create a builder starting from a loaded configuration
    #[must_use]
    pub fn from_config(config: ClientConfig) -> Self {
        let timeout = config.timeout();
        Self {
            base_url: config.base_url,
            api_key: config.api_key,
            timeout,
            user_agent: config.user_agent,
            http: None,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key sent as a bearer token
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout of the default HTTP client.
    /// The timeout covers the whole exchange, including streamed download bodies.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header of the default HTTP client
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS settings, custom timeouts).
    /// Timeout and user agent settings on this builder are then ignored.
    #[must_use]
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<KeyscoreClient> {
        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder()
                .timeout(self.timeout)
                .user_agent(&self.user_agent)
                .gzip(true)
                .build()
                .map_err(|e| KeyscoreError::Config(e.to_string()))?,
        };

        Ok(KeyscoreClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key.filter(|k| !k.is_empty()),
                base_url: self.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use serde_json::json;
    use std::collections::HashMap;

    fn client(api_key: Option<&str>) -> KeyscoreClient {
        let mut builder = KeyscoreClient::builder().base_url("https://api.example.test/");
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = client(None);
        assert_eq!(client.base_url(), "https://api.example.test");
        let request = client
            .build_request::<()>(Method::GET, "/health", &[], None)
            .unwrap();
        assert_eq!(request.url().as_str(), "https://api.example.test/health");
    }

    #[test]
    fn test_query_is_url_encoded() {
        let request = client(None)
            .build_request::<()>(
                Method::GET,
                "/download",
                &[("uuid", "abc-123"), ("file", "Browsers/Chrome Cookies.txt")],
                None,
            )
            .unwrap();
        assert_eq!(request.url().path(), "/download");
        let pairs: Vec<(String, String)> = request.url().query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("uuid".to_string(), "abc-123".to_string()),
                ("file".to_string(), "Browsers/Chrome Cookies.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_bearer_header_only_with_key() {
        let with_key = client(Some("secret"))
            .build_request::<()>(Method::GET, "/health", &[], None)
            .unwrap();
        assert_eq!(with_key.headers()[AUTHORIZATION], "Bearer secret");

        let without_key = client(None)
            .build_request::<()>(Method::GET, "/health", &[], None)
            .unwrap();
        assert!(without_key.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_empty_api_key_is_ignored() {
        let request = client(Some(""))
            .build_request::<()>(Method::GET, "/health", &[], None)
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let body = json!({"terms": ["x"]});
        let request = client(None)
            .build_request(Method::POST, "/hashlookup", &[], Some(&body))
            .unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let sent = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(serde_json::from_slice::<serde_json::Value>(sent).unwrap(), body);
    }

    #[test]
    fn test_unserializable_body_is_a_request_error() {
        // JSON object keys must be strings
        let body = HashMap::from([((1, 2), "pair")]);
        let err = client(None)
            .build_request(Method::POST, "/count", &[], Some(&body))
            .unwrap_err();
        assert!(matches!(err, KeyscoreError::Request(_)));
    }

    #[test]
    fn test_get_has_no_body_or_content_type() {
        let request = client(None)
            .build_request::<()>(Method::GET, "/sources", &[], None)
            .unwrap();
        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_malformed_base_url_is_a_request_error() {
        let client = KeyscoreClient::builder()
            .base_url("not a url")
            .build()
            .unwrap();
        let err = client
            .build_request::<()>(Method::GET, "/health", &[], None)
            .unwrap_err();
        assert!(matches!(err, KeyscoreError::Request(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", client(Some("secret")));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeyscoreClient>();
    }
}
