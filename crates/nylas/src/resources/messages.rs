//! Messages resource.

use serde::Serialize;

use crate::attachments::{CreateAttachment, EncodedBody, encode_send_body};
use crate::error::Result;
use crate::models::{EmailName, Message, ScheduledMessage};
use crate::pagination::Paginator;
use crate::response::{DeleteResponse, ListResponse, Response};
use crate::transport::{Query, RequestSpec, Transport};

use super::base::{self, Scope, UpdateMethod};

/// An outgoing message.
///
/// Attachments are carried out of band of the JSON fields: the encoder
/// inlines them as base64 or splits them into multipart form parts
/// depending on their cumulative declared size.
#[derive(Debug, Default, Serialize)]
pub struct SendMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub to: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailName>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<EmailName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Message this send replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<String>,
    /// Schedule the send for a future time, Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_at: Option<i64>,
    #[serde(skip)]
    pub attachments: Vec<CreateAttachment>,
}

/// Mutable flags of an existing message.
#[derive(Debug, Default, Clone, Serialize)]
pub struct UpdateMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    /// Move the message to these folders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders: Option<Vec<String>>,
}

/// Messages in one connected account.
#[derive(Debug)]
pub struct Messages<'c> {
    transport: &'c Transport,
    scope: Scope,
}

impl<'c> Messages<'c> {
    pub(crate) fn new(transport: &'c Transport, identifier: &str) -> Self {
        Self {
            transport,
            scope: Scope::Grant(identifier.to_string()),
        }
    }

    /// Fetches one page of messages.
    pub async fn list(&self, query: Query) -> Result<ListResponse<Message>> {
        base::list(self.transport, self.scope.path("messages"), query).await
    }

    /// Iterates over every message matching `filters`.
    pub fn all(&self, filters: Query, limit: Option<u32>) -> Result<Paginator<'c, Message>> {
        Paginator::new(self.transport, self.scope.path("messages"), filters, limit)
    }

    pub async fn find(&self, message_id: &str) -> Result<Response<Message>> {
        base::find(
            self.transport,
            self.scope.item_path("messages", message_id),
            Query::new(),
        )
        .await
    }

    pub async fn update(
        &self,
        message_id: &str,
        request: &UpdateMessageRequest,
    ) -> Result<Response<Message>> {
        base::update(
            self.transport,
            UpdateMethod::Put,
            self.scope.item_path("messages", message_id),
            request,
            Query::new(),
        )
        .await
    }

    pub async fn destroy(&self, message_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("messages", message_id),
            Query::new(),
        )
        .await
    }

    /// Sends a message. The body encoding (JSON+base64 vs multipart) is
    /// chosen from the cumulative declared attachment size.
    pub async fn send(&self, request: SendMessageRequest) -> Result<Response<Message>> {
        let mut request = request;
        let attachments = std::mem::take(&mut request.attachments);
        let encoded = encode_send_body(&request, attachments)?;

        let path = self.scope.path("messages/send");
        let spec = match encoded {
            EncodedBody::Json(body) => RequestSpec::new(reqwest::Method::POST, path).json(body),
            EncodedBody::Multipart(form) => {
                RequestSpec::new(reqwest::Method::POST, path).multipart(form)
            }
        };
        let (value, _headers) = self.transport.execute(spec).await?;
        Response::from_value(value)
    }

    /// Lists pending scheduled sends.
    pub async fn list_scheduled(&self) -> Result<ListResponse<ScheduledMessage>> {
        base::list(
            self.transport,
            self.scope.path("messages/schedules"),
            Query::new(),
        )
        .await
    }

    pub async fn find_scheduled(&self, schedule_id: &str) -> Result<Response<ScheduledMessage>> {
        base::find(
            self.transport,
            self.scope.item_path("messages/schedules", schedule_id),
            Query::new(),
        )
        .await
    }

    /// Cancels a scheduled send before it goes out.
    pub async fn stop_scheduled(&self, schedule_id: &str) -> Result<DeleteResponse> {
        base::destroy(
            self.transport,
            self.scope.item_path("messages/schedules", schedule_id),
            Query::new(),
        )
        .await
    }
}
