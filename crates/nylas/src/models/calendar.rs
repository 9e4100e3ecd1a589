//! Calendar model.

use serde::{Deserialize, Serialize};

/// A calendar in a connected account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub grant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// IANA timezone identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_owned_by_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_calendar() {
        let calendar: Calendar = serde_json::from_value(json!({
            "id": "primary",
            "grant_id": "grant-1",
            "name": "Work",
            "timezone": "Europe/Paris",
            "is_primary": true
        }))
        .unwrap();
        assert!(calendar.is_primary);
        assert!(!calendar.read_only);
    }
}
