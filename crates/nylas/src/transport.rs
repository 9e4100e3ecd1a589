//! HTTP transport layer.
//!
//! This module turns a [`RequestSpec`] into an HTTP request with the
//! standard headers (bearer auth, user agent, content type) and turns the
//! response back into a parsed JSON document plus headers, normalizing
//! non-2xx statuses into the typed error hierarchy.
//!
//! Query parameters are serialized with deterministic rules regardless of
//! value shape:
//!
//! - scalar: `key=value`
//! - list: repeated `key=v1&key=v2` in list order
//! - map: repeated `key=k1:v1&key=k2:v2`, each entry URL-encoded
//!   individually
//!
//! Absent values are omitted entirely, never emitted as an empty string.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Error, ErrorEnvelope, OAuthError, OAuthErrorBody, Result};

/// User agent identifying this wrapper to the provider.
const USER_AGENT_VALUE: &str = concat!("nylas-rs/", env!("CARGO_PKG_VERSION"));

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A scalar string, serialized as `key=value`.
    String(String),
    /// A scalar integer, serialized as `key=value`.
    Int(i64),
    /// A scalar boolean, serialized as `key=true` / `key=false`.
    Bool(bool),
    /// A list, serialized as repeated `key=v1&key=v2` in list order.
    List(Vec<String>),
    /// A map, serialized as repeated `key=k:v` entries in insertion order.
    Map(Vec<(String, String)>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<(String, String)>> for QueryValue {
    fn from(value: Vec<(String, String)>) -> Self {
        Self::Map(value)
    }
}

/// Ordered query parameters for a request.
///
/// Insertion order is preserved all the way to the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query(Vec<(String, QueryValue)>);

impl Query {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Appends a parameter when the value is present; absent values are
    /// omitted from the query string entirely.
    pub fn with_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Appends a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serializes the parameters to a query string (without leading `?`).
    pub fn encode(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for (key, value) in &self.0 {
            let key = urlencoding::encode(key);
            match value {
                QueryValue::String(s) => {
                    parts.push(format!("{}={}", key, urlencoding::encode(s)));
                }
                QueryValue::Int(i) => parts.push(format!("{key}={i}")),
                QueryValue::Bool(b) => parts.push(format!("{key}={b}")),
                QueryValue::List(items) => {
                    for item in items {
                        parts.push(format!("{}={}", key, urlencoding::encode(item)));
                    }
                }
                QueryValue::Map(entries) => {
                    for (k, v) in entries {
                        parts.push(format!(
                            "{}={}:{}",
                            key,
                            urlencoding::encode(k),
                            urlencoding::encode(v)
                        ));
                    }
                }
            }
        }
        parts.join("&")
    }
}

/// Which error wire shape the endpoint speaks on non-2xx statuses.
///
/// OAuth token endpoints use a different error body than the rest of the
/// API; the shape is decided by which endpoint was called, never by
/// sniffing the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorShape {
    /// `{request_id, error: {type, message, provider_error?}}`
    #[default]
    Api,
    /// `{error, error_code, error_description, error_uri}`
    OAuth,
}

/// The request body of a [`RequestSpec`].
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    /// JSON document, written as UTF-8 without `\uXXXX` escaping.
    Json(Value),
    /// Pre-built multipart form (large attachment uploads).
    Multipart(reqwest::multipart::Form),
}

/// A fully described HTTP request, immutable once built.
#[derive(Debug)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Query,
    body: RequestBody,
    timeout: Option<Duration>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Overrides the client-level timeout for this call only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Issues HTTP requests against one API deployment.
///
/// A single transport may be shared across concurrent callers; it holds
/// no mutable state beyond the configuration set at construction.
#[derive(Debug)]
pub struct Transport {
    http: reqwest::Client,
    api_key: String,
    api_uri: String,
    timeout: Duration,
}

impl Transport {
    pub(crate) fn new(api_key: String, api_uri: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            api_key,
            api_uri: api_uri.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// The configured base URL, without trailing slash.
    pub(crate) fn api_uri(&self) -> &str {
        &self.api_uri
    }

    /// Executes a request and decodes the response body as JSON.
    pub(crate) async fn execute(&self, spec: RequestSpec) -> Result<(Value, HeaderMap)> {
        let url = self.url_for(&spec.path, &spec.query);
        let timeout = spec.timeout.unwrap_or(self.timeout);
        debug!(method = %spec.method, %url, "issuing request");

        let response = self.send(&url, timeout, spec).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| Error::Connection {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(decode_error_response(status, headers, &body, ErrorShape::Api));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("response is not valid JSON: {e}")))?;
        Ok((value, headers))
    }

    /// Executes a request against an OAuth token endpoint.
    pub(crate) async fn execute_oauth(&self, spec: RequestSpec) -> Result<(Value, HeaderMap)> {
        let url = self.url_for(&spec.path, &spec.query);
        let timeout = spec.timeout.unwrap_or(self.timeout);
        debug!(method = %spec.method, %url, "issuing token request");

        let response = self.send(&url, timeout, spec).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| Error::Connection {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(decode_error_response(
                status,
                headers,
                &body,
                ErrorShape::OAuth,
            ));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("response is not valid JSON: {e}")))?;
        Ok((value, headers))
    }

    /// Executes a request and returns the raw response for streaming
    /// consumption (binary attachment downloads). The caller owns the
    /// stream; dropping the [`Download`] closes it.
    pub(crate) async fn download(&self, spec: RequestSpec) -> Result<Download> {
        let url = self.url_for(&spec.path, &spec.query);
        let timeout = spec.timeout.unwrap_or(self.timeout);
        debug!(%url, "downloading");

        let response = self.send(&url, timeout, spec).await?;
        let status = response.status();

        if !status.is_success() {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error_response(status, headers, &body, ErrorShape::Api));
        }

        Ok(Download { inner: response })
    }

    async fn send(
        &self,
        url: &str,
        timeout: Duration,
        spec: RequestSpec,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .http
            .request(spec.method, url)
            .bearer_auth(&self.api_key)
            .header(USER_AGENT, USER_AGENT_VALUE)
            .timeout(timeout);

        request = match spec.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => {
                // to_vec writes non-ASCII text verbatim as UTF-8, which is
                // what the provider expects (no \uXXXX escaping).
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;
                request.header(CONTENT_TYPE, "application/json").body(bytes)
            }
            RequestBody::Multipart(form) => request.multipart(form),
        };

        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    url: url.to_string(),
                    timeout,
                }
            } else {
                Error::Connection {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }

    fn url_for(&self, path: &str, query: &Query) -> String {
        if query.is_empty() {
            format!("{}{}", self.api_uri, path)
        } else {
            format!("{}{}?{}", self.api_uri, path, query.encode())
        }
    }
}

/// A streaming download response.
///
/// The connection stays open until this value is dropped or fully read.
#[derive(Debug)]
pub struct Download {
    inner: reqwest::Response,
}

impl Download {
    /// Response headers (content type, content disposition, ...).
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Reads the next chunk of the body, or `None` at end of stream.
    pub async fn chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let url = self.inner.url().to_string();
        self.inner
            .chunk()
            .await
            .map(|chunk| chunk.map(|b| b.to_vec()))
            .map_err(|e| Error::Connection { url, source: e })
    }

    /// Reads the remainder of the body into memory.
    pub async fn bytes(self) -> Result<Vec<u8>> {
        let url = self.inner.url().to_string();
        self.inner
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::Connection { url, source: e })
    }
}

/// Decodes a non-2xx response body into the matching typed error.
///
/// When the body does not parse as the expected shape, the raw status and
/// body text are surfaced instead of being swallowed.
fn decode_error_response(
    status: StatusCode,
    headers: HeaderMap,
    body: &str,
    shape: ErrorShape,
) -> Error {
    match shape {
        ErrorShape::Api => match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Error::Api(ApiError {
                request_id: envelope.request_id,
                status_code: status.as_u16(),
                error_type: envelope.error.error_type,
                message: envelope.error.message,
                provider_error: envelope.error.provider_error,
                headers,
            }),
            Err(_) => Error::Transport {
                status: status.as_u16(),
                body: body.to_string(),
            },
        },
        ErrorShape::OAuth => match serde_json::from_str::<OAuthErrorBody>(body) {
            Ok(body) => Error::OAuth(OAuthError {
                status_code: status.as_u16(),
                error: body.error,
                error_code: body.error_code,
                error_description: body.error_description,
                error_uri: body.error_uri,
            }),
            Err(_) => Error::Transport {
                status: status.as_u16(),
                body: body.to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_scalar_list_and_map_rules() {
        let query = Query::new()
            .with("a", 1i64)
            .with("list", vec!["x".to_string(), "y".to_string()])
            .with(
                "map",
                vec![
                    ("k1".to_string(), "v1".to_string()),
                    ("k2".to_string(), "v2".to_string()),
                ],
            );
        assert_eq!(query.encode(), "a=1&list=x&list=y&map=k1:v1&map=k2:v2");
    }

    #[test]
    fn query_preserves_insertion_order() {
        let query = Query::new().with("z", "1").with("a", "2").with("m", "3");
        assert_eq!(query.encode(), "z=1&a=2&m=3");
    }

    #[test]
    fn query_url_encodes_values() {
        let query = Query::new().with("subject", "hello world & more");
        assert_eq!(query.encode(), "subject=hello%20world%20%26%20more");
    }

    #[test]
    fn query_map_entries_encoded_individually() {
        let query = Query::new().with(
            "metadata_pair",
            vec![("key one".to_string(), "value:with:colons".to_string())],
        );
        assert_eq!(
            query.encode(),
            "metadata_pair=key%20one:value%3Awith%3Acolons"
        );
    }

    #[test]
    fn absent_values_are_omitted() {
        let query = Query::new()
            .with_opt("present", Some("yes"))
            .with_opt::<&str>("absent", None);
        assert_eq!(query.encode(), "present=yes");
    }

    #[test]
    fn error_response_with_api_shape() {
        let body = r#"{
            "request_id": "r1",
            "error": {"type": "not_found", "message": "no such message"}
        }"#;
        let err = decode_error_response(
            StatusCode::NOT_FOUND,
            HeaderMap::new(),
            body,
            ErrorShape::Api,
        );
        match err {
            Error::Api(api) => {
                assert_eq!(api.request_id, "r1");
                assert_eq!(api.status_code, 404);
                assert_eq!(api.error_type, "not_found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn error_response_with_oauth_shape() {
        let body = r#"{
            "error": "invalid_grant",
            "error_code": 25002,
            "error_description": "code expired",
            "error_uri": "https://docs.example.com/errors"
        }"#;
        let err = decode_error_response(
            StatusCode::BAD_REQUEST,
            HeaderMap::new(),
            body,
            ErrorShape::OAuth,
        );
        match err {
            Error::OAuth(oauth) => {
                assert_eq!(oauth.error, "invalid_grant");
                assert_eq!(oauth.error_code, 25002);
                assert_eq!(oauth.status_code, 400);
            }
            other => panic!("expected OAuth error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_surfaces_raw_text() {
        let err = decode_error_response(
            StatusCode::BAD_GATEWAY,
            HeaderMap::new(),
            "<html>bad gateway</html>",
            ErrorShape::Api,
        );
        match err {
            Error::Transport { status, body } => {
                assert_eq!(status, 502);
                assert!(body.contains("bad gateway"));
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn timeout_is_a_distinct_error() {
        use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

        let server = MockServer::start().await;
        Mock::given(matchers::method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("{}", "application/json")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let transport = Transport::new(
            "test-key".into(),
            server.uri(),
            Duration::from_millis(50),
        );
        let err = transport
            .execute(RequestSpec::new(Method::GET, "/v3/grants/g/messages"))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn bearer_and_user_agent_headers_are_sent() {
        use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

        let server = MockServer::start().await;
        Mock::given(matchers::method("GET"))
            .and(matchers::header("authorization", "Bearer test-key"))
            .and(matchers::header(
                "user-agent",
                concat!("nylas-rs/", env!("CARGO_PKG_VERSION")),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": []}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("test-key".into(), server.uri(), Duration::from_secs(5));
        let (value, _headers) = transport
            .execute(RequestSpec::new(Method::GET, "/v3/grants/g/messages"))
            .await
            .unwrap();
        assert_eq!(value["request_id"], "r1");
    }
}
