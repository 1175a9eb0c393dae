use std::str::FromStr;

use mitto_core::AppError;
use serde::{Deserialize, Serialize};

/// One top-level panel of the settings console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Personal profile, preferences, password.
    Account,
    /// Subscription plan and invoices.
    Billing,
    /// Workspace identity and regional settings.
    Workspace,
    /// Team members and invites.
    Team,
    /// Auto-reply and auto-tagging rules.
    Automation,
    /// Connected external platforms.
    Integrations,
    /// Notification preferences.
    Notifications,
    /// Two-factor, active sessions, API keys.
    Security,
    /// Activity log and the danger zone.
    Advanced,
}

impl Section {
    /// Returns all sections in sidebar order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Section] = &[
            Section::Account,
            Section::Billing,
            Section::Workspace,
            Section::Team,
            Section::Automation,
            Section::Integrations,
            Section::Notifications,
            Section::Security,
            Section::Advanced,
        ];

        ALL
    }

    /// Returns the stable wire value for this section.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Billing => "billing",
            Self::Workspace => "workspace",
            Self::Team => "team",
            Self::Automation => "automation",
            Self::Integrations => "integrations",
            Self::Notifications => "notifications",
            Self::Security => "security",
            Self::Advanced => "advanced",
        }
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "account" => Ok(Self::Account),
            "billing" => Ok(Self::Billing),
            "workspace" => Ok(Self::Workspace),
            "team" => Ok(Self::Team),
            "automation" => Ok(Self::Automation),
            "integrations" => Ok(Self::Integrations),
            "notifications" => Ok(Self::Notifications),
            "security" => Ok(Self::Security),
            "advanced" => Ok(Self::Advanced),
            _ => Err(AppError::Validation(format!("unknown section '{value}'"))),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Section;

    #[test]
    fn all_lists_nine_sections_starting_with_account() {
        assert_eq!(Section::all().len(), 9);
        assert_eq!(Section::all()[0], Section::Account);
    }

    #[test]
    fn section_roundtrips_wire_value() {
        for section in Section::all() {
            let restored = Section::from_str(section.as_str());
            assert!(restored.is_ok());
            assert_eq!(restored.unwrap_or(Section::Account), *section);
        }
    }
}
