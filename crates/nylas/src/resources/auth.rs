//! Hosted authentication and OAuth token endpoints.
//!
//! Two surfaces live here: URL builders for the hosted consent page
//! (plain and PKCE variants, RFC 7636), and the token endpoints that
//! exchange, refresh and revoke credentials. Token endpoints speak the
//! OAuth error shape on failure, not the standard API envelope, and
//! their success bodies are not enveloped either.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::transport::{Query, RequestSpec, Transport};

/// The PKCE code verifier length (in bytes, before base64 encoding).
const CODE_VERIFIER_LENGTH: usize = 32;

/// A PKCE verifier/challenge pair.
///
/// The challenge goes into the authorization URL; the verifier is kept
/// by the caller and presented at code exchange.
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    /// The code verifier (high-entropy random string).
    pub verifier: String,
    /// The code challenge (SHA-256 of the verifier, base64url encoded).
    pub challenge: String,
}

impl PkceChallenge {
    /// Generates a new random verifier and its challenge.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let bytes: Vec<u8> = (0..CODE_VERIFIER_LENGTH).map(|_| rng.random()).collect();
        let verifier = URL_SAFE_NO_PAD.encode(&bytes);
        let challenge = Self::compute_challenge(&verifier);
        Self {
            verifier,
            challenge,
        }
    }

    fn compute_challenge(verifier: &str) -> String {
        let digest = Sha256::digest(verifier.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }
}

/// Parameters of a hosted authentication URL.
#[derive(Debug, Clone)]
pub struct AuthUrlParams {
    pub client_id: String,
    pub redirect_uri: String,
    /// Provider scopes to request; empty means the connector defaults.
    pub scope: Vec<String>,
    /// Pre-fills the provider's login form with this address.
    pub login_hint: Option<String>,
    /// Opaque value echoed back on the redirect, for CSRF protection.
    pub state: Option<String>,
    /// Skips provider detection when set, e.g. "google".
    pub provider: Option<String>,
    pub access_type: Option<String>,
    pub prompt: Option<String>,
}

impl AuthUrlParams {
    pub fn new(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: Vec::new(),
            login_hint: None,
            state: None,
            provider: None,
            access_type: None,
            prompt: None,
        }
    }

    fn query(&self) -> Query {
        let scope = if self.scope.is_empty() {
            None
        } else {
            Some(self.scope.join(" "))
        };
        Query::new()
            .with("client_id", self.client_id.as_str())
            .with("redirect_uri", self.redirect_uri.as_str())
            .with("response_type", "code")
            .with_opt("scope", scope)
            .with_opt("login_hint", self.login_hint.clone())
            .with_opt("state", self.state.clone())
            .with_opt("provider", self.provider.clone())
            .with_opt("access_type", self.access_type.clone())
            .with_opt("prompt", self.prompt.clone())
    }
}

/// An authorization-code exchange request.
#[derive(Debug, Serialize)]
pub struct CodeExchangeRequest {
    pub client_id: String,
    /// Not required for public clients using PKCE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    pub code: String,
    pub redirect_uri: String,
    /// The PKCE verifier matching the challenge sent at authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
}

/// A refresh-token request.
#[derive(Debug, Serialize)]
pub struct TokenRefreshRequest {
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    pub refresh_token: String,
}

/// Tokens returned by the token endpoint.
///
/// Unlike the rest of the API this body is not wrapped in a
/// `{request_id, data}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeExchangeResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    /// The grant created or refreshed by this exchange.
    pub grant_id: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Hosted authentication flows.
#[derive(Debug)]
pub struct Auth<'c> {
    transport: &'c Transport,
}

impl<'c> Auth<'c> {
    pub(crate) fn new(transport: &'c Transport) -> Self {
        Self { transport }
    }

    /// Builds the hosted consent URL for the authorization-code flow.
    pub fn url_for_oauth2(&self, params: &AuthUrlParams) -> String {
        format!(
            "{}/v3/connect/auth?{}",
            self.transport.api_uri(),
            params.query().encode()
        )
    }

    /// Builds the hosted consent URL for the PKCE variant of the flow.
    pub fn url_for_oauth2_pkce(&self, params: &AuthUrlParams, pkce: &PkceChallenge) -> String {
        let query = params
            .query()
            .with("code_challenge", pkce.challenge.as_str())
            .with("code_challenge_method", "S256");
        format!(
            "{}/v3/connect/auth?{}",
            self.transport.api_uri(),
            query.encode()
        )
    }

    /// Exchanges an authorization code for tokens.
    pub async fn exchange_code_for_token(
        &self,
        request: &CodeExchangeRequest,
    ) -> Result<CodeExchangeResponse> {
        self.token_request(request, "authorization_code").await
    }

    /// Obtains a fresh access token from a refresh token.
    pub async fn refresh_access_token(
        &self,
        request: &TokenRefreshRequest,
    ) -> Result<CodeExchangeResponse> {
        self.token_request(request, "refresh_token").await
    }

    /// Revokes an access token.
    pub async fn revoke(&self, token: &str) -> Result<()> {
        self.transport
            .execute_oauth(
                RequestSpec::new(reqwest::Method::POST, "/v3/connect/revoke")
                    .query(Query::new().with("token", token)),
            )
            .await?;
        Ok(())
    }

    async fn token_request<B: Serialize>(
        &self,
        request: &B,
        grant_type: &str,
    ) -> Result<CodeExchangeResponse> {
        let mut body = serde_json::to_value(request)
            .map_err(|e| Error::Validation(format!("unserializable request body: {e}")))?;
        let Value::Object(ref mut fields) = body else {
            return Err(Error::Validation("token request is not an object".into()));
        };
        fields.insert("grant_type".into(), Value::String(grant_type.into()));

        let (value, _headers) = self
            .transport
            .execute_oauth(RequestSpec::new(reqwest::Method::POST, "/v3/connect/token").json(body))
            .await?;
        serde_json::from_value(value)
            .map_err(|e| Error::Decode(format!("malformed token response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::Error;

    use super::*;

    fn transport(uri: String) -> Transport {
        Transport::new("k".into(), uri, Duration::from_secs(5))
    }

    #[test]
    fn pkce_verifier_length() {
        let pkce = PkceChallenge::generate();
        // Base64 encoding of 32 bytes = 43 characters (no padding)
        assert_eq!(pkce.verifier.len(), 43);
    }

    #[test]
    fn pkce_challenge_is_deterministic() {
        let c1 = PkceChallenge::compute_challenge("test-verifier-string");
        let c2 = PkceChallenge::compute_challenge("test-verifier-string");
        assert_eq!(c1, c2);
    }

    #[test]
    fn pkce_challenge_differs_for_different_verifiers() {
        let p1 = PkceChallenge::generate();
        let p2 = PkceChallenge::generate();
        assert_ne!(p1.challenge, p2.challenge);
    }

    #[test]
    fn auth_url_format() {
        let transport = transport("https://api.us.nylas.com".into());
        let auth = Auth::new(&transport);
        let mut params = AuthUrlParams::new("client-1", "https://app.example.com/cb");
        params.scope = vec!["email.read_only".into(), "calendar".into()];
        params.state = Some("xyz".into());

        let url = auth.url_for_oauth2(&params);
        assert!(url.starts_with("https://api.us.nylas.com/v3/connect/auth?"));
        assert!(url.contains("client_id=client-1"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=email.read_only%20calendar"));
        assert!(url.contains("state=xyz"));
        assert!(!url.contains("login_hint"));
    }

    #[test]
    fn pkce_url_carries_challenge_and_method() {
        let transport = transport("https://api.eu.nylas.com".into());
        let auth = Auth::new(&transport);
        let params = AuthUrlParams::new("client-1", "https://app.example.com/cb");
        let pkce = PkceChallenge::generate();

        let url = auth.url_for_oauth2_pkce(&params, &pkce);
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains(&format!("code_challenge={}", pkce.challenge)));
    }

    #[tokio::test]
    async fn exchange_decodes_the_unenveloped_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/connect/token"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "access_token": "at-1",
                    "refresh_token": "rt-1",
                    "grant_id": "grant-1",
                    "expires_in": 3600,
                    "token_type": "Bearer"
                }"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(server.uri());
        let auth = Auth::new(&transport);
        let tokens = auth
            .exchange_code_for_token(&CodeExchangeRequest {
                client_id: "client-1".into(),
                client_secret: None,
                code: "code-1".into(),
                redirect_uri: "https://app.example.com/cb".into(),
                code_verifier: Some("verifier".into()),
            })
            .await
            .unwrap();
        assert_eq!(tokens.grant_id, "grant-1");
        assert_eq!(tokens.refresh_token.as_deref(), Some("rt-1"));

        // grant_type is injected into the wire body by the method.
        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["grant_type"], "authorization_code");
        assert_eq!(body["code_verifier"], "verifier");
    }

    #[tokio::test]
    async fn token_endpoint_failures_use_the_oauth_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/connect/token"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                r#"{
                    "error": "invalid_grant",
                    "error_code": 25002,
                    "error_description": "code expired",
                    "error_uri": "https://docs.example.com/errors"
                }"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let transport = transport(server.uri());
        let auth = Auth::new(&transport);
        let err = auth
            .refresh_access_token(&TokenRefreshRequest {
                client_id: "client-1".into(),
                client_secret: Some("secret".into()),
                refresh_token: "rt-1".into(),
            })
            .await
            .unwrap_err();
        match err {
            Error::OAuth(oauth) => {
                assert_eq!(oauth.error, "invalid_grant");
                assert_eq!(oauth.error_code, 25002);
            }
            other => panic!("expected OAuth error, got {other:?}"),
        }
    }
}
