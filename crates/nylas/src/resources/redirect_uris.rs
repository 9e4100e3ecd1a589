//! Redirect URIs resource (application-scoped).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::RedirectUri;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

/// A redirect URI registration; the same shape serves create and update.
#[derive(Debug, Serialize)]
pub struct CreateRedirectUriRequest {
    pub url: String,
    /// "web", "desktop", "js", "ios" or "android".
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// The application's registered OAuth redirect URIs.
#[derive(Debug)]
pub struct RedirectUris<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> RedirectUris<'c> {
    pub(crate) fn new(transport: &'c Transport) -> Self {
        Self {
            transport,
            scope: Scope::Application,
        }
    }

    pub async fn list(&self) -> Result<ListResponse<RedirectUri>> {
        base::list(
            self.transport,
            self.scope.path("applications/redirect-uris"),
            Query::new(),
        )
        .await
    }

    pub async fn find(&self, redirect_uri_id: &str) -> Result<Response<RedirectUri>> {
        base::find(
            self.transport,
            self.scope.item_path("applications/redirect-uris", redirect_uri_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(
        &self,
        request: &CreateRedirectUriRequest,
    ) -> Result<Response<RedirectUri>> {
        base::create(
            self.transport,
            self.scope.path("applications/redirect-uris"),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        redirect_uri_id: &str,
        request: &CreateRedirectUriRequest,
    ) -> Result<Response<RedirectUri>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("applications/redirect-uris", redirect_uri_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, redirect_uri_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("applications/redirect-uris", redirect_uri_id),
            Query::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn redirect_uris_live_under_applications() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/applications/redirect-uris"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": [
                    {"id": "uri-1", "url": "https://app.example.com/cb", "platform": "web"}
                ]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let uris = RedirectUris::new(&transport);
        let page = uris.list().await.unwrap();
        assert_eq!(page.data[0].platform, "web");
    }
}
