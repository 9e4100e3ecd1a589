//! Grant model.

use serde::{Deserialize, Serialize};

/// A grant: the provider's record of one connected end-user account.
///
/// Most resource paths are scoped under a grant's identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    pub id: String,
    /// The upstream provider, e.g. "google", "microsoft", "imap".
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// "valid" or "invalid" (e.g. after the user revoked access).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_grant() {
        let grant: Grant = serde_json::from_value(json!({
            "id": "grant-1",
            "provider": "google",
            "email": "ada@example.com",
            "grant_status": "valid",
            "scope": ["email.read_only"]
        }))
        .unwrap();
        assert_eq!(grant.provider, "google");
        assert_eq!(grant.scope.len(), 1);
    }
}
