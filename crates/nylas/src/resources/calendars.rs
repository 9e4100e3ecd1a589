//! Calendars resource.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::Calendar;
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

#[derive(Debug, Serialize)]
pub struct CreateCalendarRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateCalendarRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            location: None,
            timezone: None,
            metadata: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateCalendarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Calendars of one connected account.
#[derive(Debug)]
pub struct Calendars<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Calendars<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Calendar>> {
        base::list(self.transport, self.scope.path("calendars"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Calendar>> {
        Paginator::new(self.transport, self.scope.path("calendars"), filters, limit)
    }

    pub async fn find(&self, calendar_id: &str) -> Result<Response<Calendar>> {
        base::find(
            self.transport,
            self.scope.item_path("calendars", calendar_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: &CreateCalendarRequest) -> Result<Response<Calendar>> {
        base::create(
            self.transport,
            self.scope.path("calendars"),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        calendar_id: &str,
        request: &UpdateCalendarRequest,
    ) -> Result<Response<Calendar>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("calendars", calendar_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, calendar_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("calendars", calendar_id),
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
    async fn find_decodes_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/grants/g/calendars/primary"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": {
                    "id": "primary", "grant_id": "g", "name": "Personal",
                    "is_primary": true, "read_only": false
                }}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let calendars = Calendars::new(&transport, "g");
        let response = calendars.find("primary").await.unwrap();
        assert_eq!(response.request_id, "r1");
        assert_eq!(response.data.name, "Personal");
        assert!(response.data.is_primary);
    }
}
