//! Domain models.
//!
//! Entities are immutable value records once decoded: they carry no
//! network handle and no lazy loading. Any further fetch is a new explicit
//! call through a resource.
//!
//! Sum-typed wire fields (an event's `when`, a thread's latest item, event
//! conferencing) carry an `"object"` discriminator string; each union has
//! a closed tag table and decoding fails explicitly on a missing or
//! unrecognized tag rather than defaulting to any shape.

pub mod attachment;
pub mod calendar;
pub mod connector;
pub mod contact;
pub mod draft;
pub mod event;
pub mod folder;
pub mod grant;
pub mod message;
pub mod notetaker;
pub mod redirect_uri;
pub mod thread;
pub mod when;

pub use attachment::Attachment;
pub use calendar::Calendar;
pub use connector::Connector;
pub use contact::{Contact, ContactEmail, PhoneNumber, PhysicalAddress, WebPage};
pub use draft::Draft;
pub use event::{
    ConferenceDetails, Conferencing, ConferencingAutocreate, ConferencingDetails, Event,
    Participant,
};
pub use folder::Folder;
pub use grant::Grant;
pub use message::{EmailName, Message, ScheduledMessage};
pub use notetaker::{MeetingSettings, Notetaker};
pub use redirect_uri::RedirectUri;
pub use thread::{MessageOrDraft, Thread};
pub use when::{Date, Datespan, Time, Timespan, When};

/// Reads the `"object"` discriminator of a union-typed JSON object.
///
/// Missing or non-string discriminators are reported as-is; the caller
/// wraps the message into a serde/decode error.
pub(crate) fn object_discriminator(value: &serde_json::Value) -> Result<&str, String> {
    match value.get("object") {
        Some(serde_json::Value::String(tag)) => Ok(tag),
        Some(other) => Err(format!("`object` discriminator is not a string: {other}")),
        None => Err("missing `object` discriminator".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn discriminator_read() {
        let value = json!({"object": "timespan", "start_time": 1});
        assert_eq!(object_discriminator(&value).unwrap(), "timespan");
    }

    #[test]
    fn discriminator_missing() {
        let err = object_discriminator(&json!({"start_time": 1})).unwrap_err();
        assert!(err.contains("missing"));
    }

    #[test]
    fn discriminator_not_a_string() {
        let err = object_discriminator(&json!({"object": 12})).unwrap_err();
        assert!(err.contains("not a string"));
    }
}
