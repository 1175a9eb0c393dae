use serde::{Deserialize, Serialize};

/// One active login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Backend identifier.
    pub id: String,
    /// Device / browser description.
    pub device: String,
    /// Coarse location.
    pub location: Option<String>,
    /// Whether this is the session issuing the request.
    #[serde(default)]
    pub is_current: bool,
    /// Last activity, as the backend formats it.
    pub last_active: Option<String>,
}

/// A stored API key (without its secret material).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// Backend identifier.
    pub id: String,
    /// User-chosen key name.
    pub name: String,
    /// Creation date, as the backend formats it.
    pub created_at: Option<String>,
}

/// A freshly created API key. The plaintext is shown once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedApiKey {
    /// The stored key record.
    #[serde(flatten)]
    pub key: ApiKey,
    /// One-time plaintext of the key.
    pub secret: String,
}
