//! Notetaker model.

use serde::{Deserialize, Serialize};

/// Recording and transcription switches for a notetaker bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingSettings {
    #[serde(default)]
    pub video_recording: bool,
    #[serde(default)]
    pub audio_recording: bool,
    #[serde(default)]
    pub transcription: bool,
}

/// A notetaker bot scheduled to join a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notetaker {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the bot should join, Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_time: Option<i64>,
    pub meeting_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_provider: Option<String>,
    /// Lifecycle state, e.g. "scheduled", "attending", "media_available".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub meeting_settings: MeetingSettings,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_notetaker() {
        let notetaker: Notetaker = serde_json::from_value(json!({
            "id": "nt-1",
            "meeting_link": "https://meet.example.com/abc",
            "state": "scheduled",
            "meeting_settings": {"transcription": true}
        }))
        .unwrap();
        assert!(notetaker.meeting_settings.transcription);
        assert!(!notetaker.meeting_settings.video_recording);
    }
}
