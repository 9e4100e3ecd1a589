//! Notetakers resource.

use serde::Serialize;

use crate::error::Result;
use crate::models::{MeetingSettings, Notetaker};
use crate::pagination::Paginator;
use crate::response::{ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

#[derive(Debug, Serialize)]
pub struct CreateNotetakerRequest {
    pub meeting_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the bot should join, Unix seconds. Absent means immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_settings: Option<MeetingSettings>,
}

impl CreateNotetakerRequest {
    pub fn new(meeting_link: impl Into<String>) -> Self {
        Self {
            meeting_link: meeting_link.into(),
            name: None,
            join_time: None,
            meeting_settings: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateNotetakerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_settings: Option<MeetingSettings>,
}

/// Notetaker bots of one connected account.
#[derive(Debug)]
pub struct Notetakers<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Notetakers<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Notetaker>> {
        base::list(self.transport, self.scope.path("notetakers"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Notetaker>> {
        Paginator::new(
            self.transport,
            self.scope.path("notetakers"),
            filters,
            limit,
        )
    }

    pub async fn find(&self, notetaker_id: &str) -> Result<Response<Notetaker>> {
        base::find(
            self.transport,
            self.scope.item_path("notetakers", notetaker_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: &CreateNotetakerRequest) -> Result<Response<Notetaker>> {
        base::create(
            self.transport,
            self.scope.path("notetakers"),
            request,
            Query::new(),
        )
        .await
    }

    /// Updates a scheduled bot. This resource patches fields in place
    /// instead of replacing the record.
    pub async fn update(
        &self,
        notetaker_id: &str,
        request: &UpdateNotetakerRequest,
    ) -> Result<Response<Notetaker>> {
        base::update(
            self.transport,
            UpdateMethod::Patch,
            self.scope.item_path("notetakers", notetaker_id),
            request,
            Query::new(),
        )
        .await
    }

    /// Cancels a scheduled bot. The endpoint returns the cancelled record
    /// rather than a bare acknowledgement.
    pub async fn cancel(&self, notetaker_id: &str) -> Result<Response<Notetaker>> {
        let path = format!(
            "{}/cancel",
            self.scope.item_path("notetakers", notetaker_id)
        );
        base::destroy_as(self.transport, path, Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(server: &MockServer) -> Transport {
        Transport::new("k".into(), server.uri(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn update_uses_patch() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/v3/grants/g/notetakers/nt-1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": {
                    "id": "nt-1", "meeting_link": "https://meet.example.com/abc",
                    "name": "Scribe"
                }}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let notetakers = Notetakers::new(&transport, "g");
        let response = notetakers
            .update(
                "nt-1",
                &UpdateNotetakerRequest {
                    name: Some("Scribe".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(response.data.name.as_deref(), Some("Scribe"));
    }

    #[tokio::test]
    async fn cancel_deletes_and_returns_the_record() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v3/grants/g/notetakers/nt-1/cancel"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r2", "data": {
                    "id": "nt-1", "meeting_link": "https://meet.example.com/abc",
                    "state": "cancelled"
                }}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let notetakers = Notetakers::new(&transport, "g");
        let response = notetakers.cancel("nt-1").await.unwrap();
        assert_eq!(response.data.state.as_deref(), Some("cancelled"));
    }
}
