//! Grants resource (application-scoped).

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::Grant;
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

#[derive(Debug, Default, Serialize)]
pub struct UpdateGrantRequest {
    /// Replacement provider settings, passed through opaquely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<String>>,
}

/// The application's connected accounts.
///
/// Unlike the mail and calendar resources this one is not scoped under a
/// grant identifier; it manages the grants themselves.
#[derive(Debug)]
pub struct Grants<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Grants<'c> {
    pub(crate) fn new(transport: &'c Transport) -> Self {
        Self {
            transport,
            scope: Scope::Application,
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Grant>> {
        base::list(self.transport, self.scope.path("grants"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Grant>> {
        Paginator::new(self.transport, self.scope.path("grants"), filters, limit)
    }

    pub async fn find(&self, grant_id: &str) -> Result<Response<Grant>> {
        base::find(
            self.transport,
            self.scope.item_path("grants", grant_id),
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        grant_id: &str,
        request: &UpdateGrantRequest,
    ) -> Result<Response<Grant>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("grants", grant_id),
            request,
            Query::new(),
        )
        .await
    }

    /// Deletes a grant, disconnecting the account.
    pub async fn destroy(&self, grant_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("grants", grant_id),
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
    async fn grants_live_at_the_application_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/grants"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": [
                    {"id": "grant-1", "provider": "google", "grant_status": "valid"}
                ]}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let grants = Grants::new(&transport);
        let page = grants.list(Query::new()).await.unwrap();
        assert_eq!(page.data[0].provider, "google");
    }
}
