//! Connector model (application-scoped).

use serde::{Deserialize, Serialize};

/// An application-level connector: the credentials and scopes used to
/// connect end-user accounts for one upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// The upstream provider, e.g. "google" or "microsoft".
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}
