//! Message model.

use serde::{Deserialize, Serialize};

use super::Attachment;

/// A name/address pair as it appears in message headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailName {
    /// Display name, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The address itself.
    pub email: String,
}

impl EmailName {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A message in a connected account's mailbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier of the message.
    pub id: String,
    /// The grant (connected account) this message belongs to.
    pub grant_id: String,
    /// The thread containing this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from: Vec<EmailName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<EmailName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<EmailName>,
    /// Delivery date, Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub starred: bool,
    /// A short plain-text preview of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Full message body (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Folder ids the message currently lives in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Identifier of the scheduled send, for messages queued with
    /// `send_at`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A scheduled message send, as reported by the scheduled-sends endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMessage {
    pub schedule_id: String,
    /// Current status, e.g. "pending" or "success".
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_message_with_optional_fields_absent() {
        let message: Message = serde_json::from_value(json!({
            "id": "msg-1",
            "grant_id": "grant-1",
            "subject": "Quarterly review",
            "from": [{"name": "Ada", "email": "ada@example.com"}],
            "to": [{"email": "grace@example.com"}],
            "date": 1_718_000_000,
            "unread": true
        }))
        .unwrap();
        assert_eq!(message.id, "msg-1");
        assert_eq!(message.from[0].name.as_deref(), Some("Ada"));
        assert!(message.to[0].name.is_none());
        assert!(message.attachments.is_empty());
        assert!(!message.starred);
    }

    #[test]
    fn reserialized_message_matches_input_fields() {
        let input = json!({
            "id": "msg-2",
            "grant_id": "grant-1",
            "subject": "De l'idée à la post-prod",
            "from": [{"email": "a@example.com"}],
            "date": 1,
            "unread": false,
            "starred": true
        });
        let message: Message = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&message).unwrap();
        for key in ["id", "grant_id", "subject", "date", "starred"] {
            assert_eq!(output[key], input[key], "field {key} did not round-trip");
        }
    }
}
