//! Error types for API operations.
//!
//! The taxonomy keeps three origins apart: network failures (timeout,
//! connection), error responses from the provider (API shape vs OAuth
//! shape, which are different wire formats from different endpoints), and
//! client-side failures (malformed responses, invalid caller input).
//!
//! The library never retries or suppresses an error; every failure is
//! returned to the immediate caller.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderMap;
use serde::Deserialize;
use thiserror::Error;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error returned by any library operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider did not respond within the configured timeout.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// The provider host could not be reached.
    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A non-2xx response whose body did not parse as a known error shape.
    #[error("unexpected response ({status}): {body}")]
    Transport { status: u16, body: String },

    /// A non-2xx response from a regular API endpoint.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A non-2xx response from an OAuth token endpoint.
    #[error(transparent)]
    OAuth(#[from] OAuthError),

    /// The response body was structurally unexpected (missing envelope
    /// keys, unknown discriminator, payload decode failure).
    #[error("malformed response: {0}")]
    Decode(String),

    /// A caller-supplied value violated a documented constraint. Raised
    /// before any network call is made.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl Error {
    /// Returns the provider request id, when the error carries one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => Some(&e.request_id),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// An application-level error response from the provider.
///
/// Decoded from the `{request_id, error: {type, message, provider_error}}`
/// wire shape that every non-OAuth endpoint uses for 4xx/5xx statuses.
#[derive(Debug, Error)]
pub struct ApiError {
    /// The provider's correlation token for this request.
    pub request_id: String,
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The provider's error category (e.g. "not_found", "invalid_request").
    pub error_type: String,
    /// Human-readable description of the error.
    pub message: String,
    /// Opaque error detail passed through from the underlying
    /// email/calendar provider (Google, Microsoft, IMAP, ...).
    pub provider_error: Option<serde_json::Value>,
    /// Response headers, for caller-side diagnostics such as rate-limit
    /// headers.
    pub headers: HeaderMap,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API error ({}) {}: {} [request_id: {}]",
            self.status_code, self.error_type, self.message, self.request_id
        )
    }
}

/// An error response from an OAuth token endpoint.
///
/// Token endpoints speak a different wire shape than the rest of the API;
/// this type is never folded into [`ApiError`].
#[derive(Debug, Error)]
pub struct OAuthError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// The OAuth error string (e.g. "invalid_grant").
    pub error: String,
    /// The provider's numeric error code.
    pub error_code: i64,
    /// Human-readable description of the error.
    pub error_description: String,
    /// Link to documentation about the error, if any.
    pub error_uri: Option<String>,
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OAuth error ({}) {}: {}",
            self.status_code, self.error, self.error_description
        )
    }
}

/// Wire shape of an application error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub request_id: String,
    pub error: ErrorBody,
}

/// The nested `error` object of an application error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    #[serde(default)]
    pub provider_error: Option<serde_json::Value>,
}

/// Wire shape of an OAuth token endpoint error body.
#[derive(Debug, Deserialize)]
pub(crate) struct OAuthErrorBody {
    pub error: String,
    #[serde(default)]
    pub error_code: i64,
    pub error_description: String,
    #[serde(default)]
    pub error_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display() {
        let err = ApiError {
            request_id: "req-1".into(),
            status_code: 404,
            error_type: "not_found".into(),
            message: "no such message".into(),
            provider_error: None,
            headers: HeaderMap::new(),
        };
        let display = format!("{}", err);
        assert!(display.contains("404"));
        assert!(display.contains("not_found"));
        assert!(display.contains("req-1"));
    }

    #[test]
    fn error_envelope_parses_provider_error() {
        let json = r#"{
            "request_id": "req-2",
            "error": {
                "type": "provider_error",
                "message": "upstream rejected the call",
                "provider_error": {"code": 403, "reason": "quotaExceeded"}
            }
        }"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.request_id, "req-2");
        assert_eq!(envelope.error.error_type, "provider_error");
        assert!(envelope.error.provider_error.is_some());
    }

    #[test]
    fn oauth_error_body_defaults() {
        let json = r#"{
            "error": "invalid_grant",
            "error_description": "authorization code expired"
        }"#;
        let body: OAuthErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "invalid_grant");
        assert_eq!(body.error_code, 0);
        assert!(body.error_uri.is_none());
    }

    #[test]
    fn request_id_surfaces_through_error() {
        let err = Error::Api(ApiError {
            request_id: "r1".into(),
            status_code: 404,
            error_type: "not_found".into(),
            message: "gone".into(),
            provider_error: None,
            headers: HeaderMap::new(),
        });
        assert_eq!(err.request_id(), Some("r1"));
        assert!(err.is_api());
        assert!(!err.is_timeout());
    }
}
