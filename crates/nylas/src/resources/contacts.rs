//! Contacts resource.

use serde::Serialize;

use crate::error::Result;
use crate::models::{Contact, ContactEmail, PhoneNumber, PhysicalAddress, WebPage};
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, Transport};

use super::base::{self, Scope, UpdateMethod};

/// Fields of a new or replaced contact. The same shape serves create and
/// update since the provider replaces the whole record on update.
#[derive(Debug, Default, Serialize)]
pub struct CreateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ContactEmail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub physical_addresses: Vec<PhysicalAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub web_pages: Vec<WebPage>,
}

/// Contacts of one connected account.
#[derive(Debug)]
pub struct Contacts<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Contacts<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Contact>> {
        base::list(self.transport, self.scope.path("contacts"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Contact>> {
        Paginator::new(self.transport, self.scope.path("contacts"), filters, limit)
    }

    pub async fn find(&self, contact_id: &str) -> Result<Response<Contact>> {
        base::find(
            self.transport,
            self.scope.item_path("contacts", contact_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: &CreateContactRequest) -> Result<Response<Contact>> {
        base::create(
            self.transport,
            self.scope.path("contacts"),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        contact_id: &str,
        request: &CreateContactRequest,
    ) -> Result<Response<Contact>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("contacts", contact_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, contact_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("contacts", contact_id),
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
    async fn create_serializes_typed_subrecords() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/grants/g/contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": {"id": "contact-1", "grant_id": "g"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let contacts = Contacts::new(&transport, "g");
        contacts
            .create(&CreateContactRequest {
                given_name: Some("Ada".into()),
                emails: vec![ContactEmail {
                    kind: Some("work".into()),
                    email: "ada@example.com".into(),
                }],
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        // The wire key is "type", not the field name.
        assert_eq!(body["emails"][0]["type"], "work");
        assert!(body.get("surname").is_none());
    }
}
