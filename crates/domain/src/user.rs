use serde::{Deserialize, Serialize};

use crate::Role;

/// Identity record for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address as stored by the backend.
    pub email: String,
    /// Avatar image URL, if one is set.
    pub avatar_url: Option<String>,
    /// Access tier used by the section gate.
    pub role: Role,
}

impl User {
    /// Fallback identity used when the session endpoint is unreachable and
    /// no cached user exists.
    ///
    /// Carries [`Role::Member`] so a fetch failure can only narrow, never
    /// widen, what the console shows.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            id: String::new(),
            name: "User".to_owned(),
            email: String::new(),
            avatar_url: None,
            role: Role::Member,
        }
    }
}
