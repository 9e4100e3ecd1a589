//! Attachments resource.
//!
//! Attachment metadata and content both hang off the message that carries
//! the attachment, so every call takes the message id as a query
//! parameter.

use crate::error::Result;
use crate::models::Attachment;
use crate::response::Response;
use crate::transport::{Download, Query, RequestSpec, Transport};

use super::base::{self, Scope};

/// Attachments of one connected account's messages.
#[derive(Debug)]
pub struct Attachments<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Attachments<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    /// Fetches an attachment's metadata.
    pub async fn find(
        &self,
        attachment_id: &str,
        message_id: &str,
    ) -> Result<Response<Attachment>> {
        base::find(
            self.transport,
            self.scope.item_path("attachments", attachment_id),
            Query::new().with("message_id", message_id),
        )
        .await
    }

    /// Opens a streaming download of the attachment's binary content.
    ///
    /// The body is never buffered here; the caller drains the returned
    /// [`Download`] chunk by chunk or collects it with
    /// [`Download::bytes`].
    pub async fn download(&self, attachment_id: &str, message_id: &str) -> Result<Download> {
        let path = format!(
            "{}/download",
            self.scope.item_path("attachments", attachment_id)
        );
        self.transport
            .download(
                RequestSpec::new(reqwest::Method::GET, path)
                    .query(Query::new().with("message_id", message_id)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn download_streams_raw_bytes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/grants/g/attachments/att-1/download"))
            .and(query_param("message_id", "msg-1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(b"%PDF-1.7 not json".to_vec(), "application/pdf"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let attachments = Attachments::new(&transport, "g");
        let download = attachments.download("att-1", "msg-1").await.unwrap();
        assert_eq!(
            download.headers().get("content-type").unwrap(),
            "application/pdf"
        );
        let body = download.bytes().await.unwrap();
        assert_eq!(body, b"%PDF-1.7 not json");
    }

    #[tokio::test]
    async fn failed_download_decodes_the_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/grants/g/attachments/att-1/download"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                r#"{"request_id": "r1", "error": {"type": "not_found", "message": "gone"}}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let transport = Transport::new("k".into(), server.uri(), Duration::from_secs(5));
        let attachments = Attachments::new(&transport, "g");
        let err = attachments.download("att-1", "msg-1").await.unwrap_err();
        assert_eq!(err.request_id(), Some("r1"));
    }
}
