//! Attachment metadata model.

use serde::{Deserialize, Serialize};

/// Metadata for a file attached to a message or draft.
///
/// The binary content is never inlined here; it is fetched separately
/// through the attachments resource as a download stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier of the attachment.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Declared size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Content id for inline attachments referenced as `cid:` URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_disposition: Option<String>,
    #[serde(default)]
    pub is_inline: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_attachment() {
        let attachment: Attachment = serde_json::from_value(json!({
            "id": "att-1",
            "filename": "report.pdf",
            "content_type": "application/pdf",
            "size": 52_133,
            "is_inline": false
        }))
        .unwrap();
        assert_eq!(attachment.size, 52_133);
        assert!(attachment.content_id.is_none());
    }
}
