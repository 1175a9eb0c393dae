use serde::{Deserialize, Serialize};

use crate::Role;

/// Membership state of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Invitation accepted, member is active.
    Active,
    /// Invitation sent but not yet accepted.
    Pending,
}

/// One row of the team list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Access tier.
    pub role: Role,
    /// Active or pending invite.
    pub status: MemberStatus,
    /// Last activity, as the backend formats it.
    pub last_active: Option<String>,
}

impl TeamMember {
    /// Returns whether this row represents the signed-in user.
    #[must_use]
    pub fn is_self(&self, user_id: &str, user_email: &str) -> bool {
        self.id == user_id || self.email == user_email
    }
}
