//! Thread model and its draft-or-message union.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Draft, EmailName, Message, object_discriminator};

/// The latest item of a thread: either a sent message or a draft,
/// discriminated by the `"object"` field.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOrDraft {
    Message(Message),
    Draft(Draft),
}

impl MessageOrDraft {
    pub fn object(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Draft(_) => "draft",
        }
    }
}

impl<'de> Deserialize<'de> for MessageOrDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tag = object_discriminator(&value).map_err(D::Error::custom)?;
        match tag {
            "message" => serde_json::from_value(value).map(Self::Message),
            "draft" => serde_json::from_value(value).map(Self::Draft),
            other => {
                return Err(D::Error::custom(format!(
                    "unknown `object` discriminator for thread item: {other:?}"
                )));
            }
        }
        .map_err(D::Error::custom)
    }
}

impl Serialize for MessageOrDraft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let inner = match self {
            Self::Message(m) => serde_json::to_value(m),
            Self::Draft(d) => serde_json::to_value(d),
        }
        .map_err(serde::ser::Error::custom)?;

        let Value::Object(fields) = inner else {
            return Err(serde::ser::Error::custom("thread item is not an object"));
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("object", self.object())?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A conversation thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    /// Unique identifier of the thread.
    pub id: String,
    /// The grant (connected account) this thread belongs to.
    pub grant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub has_attachments: bool,
    /// Date of the earliest message, Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_message_date: Option<i64>,
    /// Received date of the latest message, Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_message_received_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<EmailName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub draft_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// The thread's most recent item, when the provider includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_draft_or_message: Option<MessageOrDraft>,
}
