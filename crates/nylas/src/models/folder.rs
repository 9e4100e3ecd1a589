//! Folder model.

use serde::{Deserialize, Serialize};

/// A mail folder (or label, on providers that use labels).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub grant_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// True for provider-defined folders such as INBOX or SENT.
    #[serde(default)]
    pub system_folder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_folder() {
        let folder: Folder = serde_json::from_value(json!({
            "id": "folder-1",
            "grant_id": "grant-1",
            "name": "INBOX",
            "system_folder": true,
            "unread_count": 3
        }))
        .unwrap();
        assert!(folder.system_folder);
        assert_eq!(folder.unread_count, Some(3));
    }
}
