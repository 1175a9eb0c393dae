use std::str::FromStr;

use mitto_core::AppError;
use serde::{Deserialize, Serialize};

/// Access tier of a workspace member.
///
/// Only `Owner` and `Admin` carry elevated section visibility; the three
/// remaining roles share the restricted tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Workspace owner. Full control including billing and deletion.
    Owner,
    /// Administrator. Everything except billing and the danger zone.
    Admin,
    /// Staff member.
    Staff,
    /// Moderator.
    Moderator,
    /// Regular member.
    Member,
}

impl Role {
    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Moderator => "moderator",
            Self::Member => "member",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Owner,
            Role::Admin,
            Role::Staff,
            Role::Moderator,
            Role::Member,
        ];

        ALL
    }

    /// Parses a wire value, coercing anything unrecognized to [`Role::Member`].
    ///
    /// The backend role enumeration is not under this client's control; a
    /// value it does not know must land in the most restrictive visibility
    /// tier, never in an elevated one. Used at the gateway decode boundary.
    #[must_use]
    pub fn parse_lossy(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::Member)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "moderator" => Ok(Self::Moderator),
            "member" => Ok(Self::Member),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Role;

    #[test]
    fn role_roundtrips_wire_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Role::Member), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected_by_strict_parse() {
        assert!(Role::from_str("superuser").is_err());
    }

    #[test]
    fn lossy_parse_coerces_unknown_to_member() {
        assert_eq!(Role::parse_lossy("superuser"), Role::Member);
        assert_eq!(Role::parse_lossy(""), Role::Member);
        assert_eq!(Role::parse_lossy("OWNER"), Role::Member);
    }

    #[test]
    fn lossy_parse_preserves_known_roles() {
        assert_eq!(Role::parse_lossy("admin"), Role::Admin);
    }
}
