//! Event model and the conferencing union.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::when::When;
use super::{EmailName, object_discriminator};

/// An attendee of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    /// RSVP status: "yes", "no", "maybe" or "noreply".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Dial-in and join details for an existing conference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConferenceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone: Vec<String>,
}

/// Conferencing supplied by the caller with explicit join details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferencingDetails {
    /// Conferencing provider name, e.g. "Google Meet" or "Zoom Meeting".
    pub provider: String,
    pub details: ConferenceDetails,
}

/// Conferencing auto-created by the provider at event creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferencingAutocreate {
    pub provider: String,
    /// Provider-specific autocreate settings, passed through opaquely.
    #[serde(default)]
    pub autocreate: Value,
}

/// An event's conferencing slot: explicit details or an autocreate
/// request, discriminated by `"object"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Conferencing {
    Details(ConferencingDetails),
    Autocreate(ConferencingAutocreate),
}

impl Conferencing {
    pub fn object(&self) -> &'static str {
        match self {
            Self::Details(_) => "details",
            Self::Autocreate(_) => "autocreate",
        }
    }
}

impl<'de> Deserialize<'de> for Conferencing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tag = object_discriminator(&value).map_err(D::Error::custom)?;
        match tag {
            "details" => serde_json::from_value(value).map(Self::Details),
            "autocreate" => serde_json::from_value(value).map(Self::Autocreate),
            other => {
                return Err(D::Error::custom(format!(
                    "unknown `object` discriminator for conferencing: {other:?}"
                )));
            }
        }
        .map_err(D::Error::custom)
    }
}

impl Serialize for Conferencing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let inner = match self {
            Self::Details(v) => serde_json::to_value(v),
            Self::Autocreate(v) => serde_json::to_value(v),
        }
        .map_err(serde::ser::Error::custom)?;

        let Value::Object(fields) = inner else {
            return Err(serde::ser::Error::custom("conferencing is not an object"));
        };

        let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
        map.serialize_entry("object", self.object())?;
        for (key, value) in &fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier of the event.
    pub id: String,
    /// The grant (connected account) this event belongs to.
    pub grant_id: String,
    /// The calendar the event lives in.
    pub calendar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The event's time specification.
    pub when: When,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<Conferencing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<EmailName>,
    /// Whether the event blocks time on the calendar.
    #[serde(default)]
    pub busy: bool,
    #[serde(default)]
    pub read_only: bool,
    /// "confirmed", "tentative" or "cancelled".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
