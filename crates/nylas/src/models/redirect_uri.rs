//! Redirect URI model (application-scoped).

use serde::{Deserialize, Serialize};

/// A redirect URI registered for the application's OAuth flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectUri {
    pub id: String,
    pub url: String,
    /// "web", "desktop", "js", "ios" or "android".
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_redirect_uri() {
        let uri: RedirectUri = serde_json::from_value(json!({
            "id": "uri-1",
            "url": "https://app.example.com/oauth/callback",
            "platform": "web"
        }))
        .unwrap();
        assert_eq!(uri.platform, "web");
    }
}
