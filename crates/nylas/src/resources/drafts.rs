//! Drafts resource.

use serde::Serialize;

use crate::attachments::{CreateAttachment, EncodedBody, encode_send_body};
use crate::error::Result;
use crate::models::{Draft, EmailName, Message};
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, RequestSpec, Transport};

use super::base::{self, Scope};

/// Fields of a new or updated draft. Attachments follow the same
/// JSON-vs-multipart encoding rules as a direct send.
#[derive(Debug, Default, Serialize)]
pub struct CreateDraftRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<EmailName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<String>,
    #[serde(skip)]
    pub attachments: Vec<CreateAttachment>,
}

/// Drafts in one connected account.
#[derive(Debug)]
pub struct Drafts<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Drafts<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    pub async fn list(&self, query: Query) -> Result<ListResponse<Draft>> {
        base::list(self.transport, self.scope.path("drafts"), query).await
    }

    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Draft>> {
        Paginator::new(self.transport, self.scope.path("drafts"), filters, limit)
    }

    pub async fn find(&self, draft_id: &str) -> Result<Response<Draft>> {
        base::find(
            self.transport,
            self.scope.item_path("drafts", draft_id),
            Query::new(),
        )
        .await
    }

    pub async fn create(&self, request: CreateDraftRequest) -> Result<Response<Draft>> {
        let spec = self.encoded_spec(reqwest::Method::POST, self.scope.path("drafts"), request)?;
        let (value, _headers) = self.transport.execute(spec).await?;
        Response::from_value(value)
    }

    pub async fn update(
        &self,
        draft_id: &str,
        request: CreateDraftRequest,
    ) -> Result<Response<Draft>> {
        let spec = self.encoded_spec(
            reqwest::Method::PUT,
            self.scope.item_path("drafts", draft_id),
            request,
        )?;
        let (value, _headers) = self.transport.execute(spec).await?;
        Response::from_value(value)
    }

    pub async fn destroy(&self, draft_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("drafts", draft_id),
            Query::new(),
        )
        .await
    }

    /// Sends an existing draft. The sent copy comes back as a message.
    pub async fn send(&self, draft_id: &str) -> Result<Response<Message>> {
        let path = format!("{}/send", self.scope.item_path("drafts", draft_id));
        let (value, _headers) = self
            .transport
            .execute(RequestSpec::new(reqwest::Method::POST, path))
            .await?;
        Response::from_value(value)
    }

    fn encoded_spec(
        &self,
        http_method: reqwest::Method,
        path: String,
        request: CreateDraftRequest,
    ) -> Result<RequestSpec> {
        let mut request = request;
        let attachments = std::mem::take(&mut request.attachments);
        Ok(match encode_send_body(&request, attachments)? {
            EncodedBody::Json(body) => RequestSpec::new(http_method, path).json(body),
            EncodedBody::Multipart(form) => RequestSpec::new(http_method, path).multipart(form),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn create_sends_utf8_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/grants/g/drafts"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r1", "data": {"id": "draft-1", "grant_id": "g"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let drafts = Drafts::new(&transport, "g");
        drafts
            .create(CreateDraftRequest {
                subject: Some("De l'idée à la post-prod".into()),
                to: vec![EmailName::new("grace@example.com")],
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body = &requests[0].body;
        // The accented characters travel as raw UTF-8 bytes, not escapes.
        let needle = "De l'idée à la post-prod".as_bytes();
        assert!(body.windows(needle.len()).any(|w| w == needle));
        assert!(!String::from_utf8_lossy(body).contains("\\u00e9"));
    }

    #[tokio::test]
    async fn send_posts_to_the_draft_item_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/grants/g/drafts/draft-1/send"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"request_id": "r2", "data": {"id": "msg-1", "grant_id": "g"}}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let drafts = Drafts::new(&transport, "g");
        let response = drafts.send("draft-1").await.unwrap();
        assert_eq!(response.data.id, "msg-1");
    }
}
