//! Client configuration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The keysco.re API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.keysco.re";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "KEYSCORE_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "KEYSCORE_BASE_URL";

/// Settings a [`KeyscoreClient`](crate::KeyscoreClient) is built from.
///
/// Every field has a default, so a config file only needs the values it
/// overrides:
///
/// ```rust
/// use keyscore_client::ClientConfig;
///
/// let config: ClientConfig = serde_json::from_str(r#"{"api_key": "secret"}"#).unwrap();
/// assert_eq!(config.base_url, "https://api.keysco.re");
/// assert_eq!(config.timeout_secs, 60);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,

    /// Bearer token sent with every request, if set
    pub api_key: Option<String>,

    /// Request timeout for the default HTTP client, in seconds
    pub timeout_secs: u64,

    /// User-Agent header for the default HTTP client
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("keyscore-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `KEYSCORE_API_KEY` and `KEYSCORE_BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            config.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            config.base_url = url;
        }
        config
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns true if requests will carry an Authorization header
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
