use thiserror::Error;

/// Result type alias for keysco.re operations
pub type Result<T> = std::result::Result<T, KeyscoreError>;

/// Boxed underlying cause carried by request and transport errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when using the keysco.re API
#[derive(Error, Debug)]
pub enum KeyscoreError {
    /// The request could not be constructed (body serialization, malformed URL).
    /// Raised before anything is sent.
    #[error("failed to build request: {0}")]
    Request(#[source] BoxError),

    /// Network-level failure: connection refused, timeout, DNS failure,
    /// or the body stream breaking mid-transfer
    #[error("HTTP request failed: {0}")]
    Http(#[source] BoxError),

    /// The API answered with a non-2xx status
    #[error("keysco.re API error: status={status}{}", message_suffix(.message))]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the `error` field of the response body, empty if absent
        message: String,
    },

    /// A 2xx response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Local I/O failure while writing a download to its destination
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The client could not be configured
    #[error("configuration error: {0}")]
    Config(String),
}

fn message_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" message={message:?}")
    }
}

impl KeyscoreError {
    /// Wrap a request construction failure
    pub fn request(err: impl Into<BoxError>) -> Self {
        Self::Request(err.into())
    }

    /// Wrap a transport failure
    pub fn http(err: impl Into<BoxError>) -> Self {
        Self::Http(err.into())
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the server-supplied message if this is an API error
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns true if the API rejected the credentials
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// Returns true if the API reported the resource as missing
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_message() {
        let err = KeyscoreError::Api {
            status: 403,
            message: "invalid key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "keysco.re API error: status=403 message=\"invalid key\""
        );
        assert!(err.is_auth_error());
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.message(), Some("invalid key"));
    }

    #[test]
    fn test_api_error_display_without_message() {
        let err = KeyscoreError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "keysco.re API error: status=502");
        assert!(!err.is_auth_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = KeyscoreError::http("connection refused");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.message(), None);
        assert!(std::error::Error::source(&err).is_some());
    }
}
