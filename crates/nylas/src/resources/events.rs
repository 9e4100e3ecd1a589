//! Events resource.
//!
//! Every event operation runs against one calendar, so `calendar_id`
//! travels as a query parameter on each call rather than inside the body.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{Conferencing, Event, Participant, When};
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, RequestSpec, Transport};

use super::base::{self, Scope, UpdateMethod};

/// Fields of a new event.
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub when: When,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<Conferencing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateEventRequest {
    pub fn new(when: When) -> Self {
        Self {
            title: None,
            description: None,
            location: None,
            when,
            participants: Vec::new(),
            conferencing: None,
            busy: None,
            metadata: None,
        }
    }
}

/// Partial replacement of an event; absent fields keep their value.
#[derive(Debug, Default, Serialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<When>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<Participant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<Conferencing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// The caller's reply to an event invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

#[derive(Serialize)]
struct RsvpBody {
    status: RsvpStatus,
}

/// Events in one connected account.
#[derive(Debug)]
pub struct Events<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Events<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    /// Fetches one page of events from `calendar_id`.
    pub async fn list(&self, calendar_id: &str, query: Query) -> Result<ListResponse<Event>> {
        base::list(
            self.transport,
            self.scope.path("events"),
            query.with("calendar_id", calendar_id),
        )
        .await
    }

    /// Iterates over every event in `calendar_id` matching `filters`.
    pub fn all(
        &self,
        calendar_id: &str,
        filters: Query,
        limit: Option<u32>,
    ) -> Result<Paginator<'c, Event>> {
        Paginator::new(
            self.transport,
            self.scope.path("events"),
            filters.with("calendar_id", calendar_id),
            limit,
        )
    }

    pub async fn find(&self, calendar_id: &str, event_id: &str) -> Result<Response<Event>> {
        base::find(
            self.transport,
            self.scope.item_path("events", event_id),
            Query::new().with("calendar_id", calendar_id),
        )
        .await
    }

    pub async fn create(
        &self,
        calendar_id: &str,
        request: &CreateEventRequest,
    ) -> Result<Response<Event>> {
        base::create(
            self.transport,
            self.scope.path("events"),
            request,
            Query::new().with("calendar_id", calendar_id),
        )
        .await
    }

    pub async fn update(
        &self,
        calendar_id: &str,
        event_id: &str,
        request: &UpdateEventRequest,
    ) -> Result<Response<Event>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("events", event_id),
            request,
            Query::new().with("calendar_id", calendar_id),
        )
        .await
    }

    pub async fn destroy(&self, calendar_id: &str, event_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("events", event_id),
            Query::new().with("calendar_id", calendar_id),
        )
        .await
    }

    /// Replies to an invitation on behalf of the connected account.
    pub async fn send_rsvp(
        &self,
        calendar_id: &str,
        event_id: &str,
        status: RsvpStatus,
    ) -> Result<DeleteResponse> {
        let path = format!("{}/send-rsvp", self.scope.item_path("events", event_id));
        let body = serde_json::to_value(RsvpBody { status })
            .map_err(|e| crate::error::Error::Validation(format!("unserializable rsvp: {e}")))?;
        let (value, _headers) = self
            .transport
            .execute(
                RequestSpec::new(reqwest::Method::POST, path)
                    .query(Query::new().with("calendar_id", calendar_id))
                    .json(body),
            )
            .await?;
        DeleteResponse::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{body_json_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport(server: &MockServer) -> Transport {
        Transport::new("k".into(), server.uri(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn create_carries_calendar_id_in_query_not_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/grants/g/events"))
            .and(query_param("calendar_id", "primary"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": {
                    "id": "event-1", "grant_id": "g", "calendar_id": "primary",
                    "when": {"object": "time", "time": 100}
                }}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let events = Events::new(&transport, "g");
        let response = events
            .create(
                "primary",
                &CreateEventRequest::new(When::Time(crate::models::Time {
                    time: 100,
                    timezone: None,
                })),
            )
            .await
            .unwrap();
        assert_eq!(response.data.id, "event-1");

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8(requests[0].body.clone()).unwrap();
        assert!(!body.contains("calendar_id"));
    }

    #[tokio::test]
    async fn rsvp_posts_lowercase_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/grants/g/events/event-1/send-rsvp"))
            .and(query_param("calendar_id", "primary"))
            .and(body_json_string(r#"{"status": "yes"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r2"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let events = Events::new(&transport, "g");
        let ack = events
            .send_rsvp("primary", "event-1", RsvpStatus::Yes)
            .await
            .unwrap();
        assert_eq!(ack.request_id, "r2");
    }

    #[tokio::test]
    async fn destroy_requires_calendar_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v3/grants/g/events/event-1"))
            .and(query_param("calendar_id", "work"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r3"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server);
        let events = Events::new(&transport, "g");
        events.destroy("work", "event-1").await.unwrap();
    }
}
