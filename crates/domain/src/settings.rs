//! Per-section editable settings models.
//!
//! Each struct is the complete model behind one form card; the application
//! layer wraps them in a form session for dirty-tracking and save guards.

use serde::{Deserialize, Serialize};

/// Personal profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSettings {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number in display format.
    pub phone: String,
}

impl ProfileSettings {
    /// Splits a single display name into first/last parts, the way the
    /// backend's combined `name` field is decomposed for editing.
    #[must_use]
    pub fn from_display_name(name: &str, email: &str) -> Self {
        let mut parts = name.split_whitespace();
        let first_name = parts.next().unwrap_or_default().to_owned();
        let last_name = parts.collect::<Vec<_>>().join(" ");

        Self {
            first_name,
            last_name,
            email: email.to_owned(),
            phone: String::new(),
        }
    }

    /// Recombines the name parts for the backend's `name` field.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }
}

/// Personal locale preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSettings {
    /// Timezone label.
    pub timezone: String,
    /// Interface language.
    pub language: String,
}

/// Workspace identity and regional settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    /// Workspace display name. Also the delete-confirmation phrase.
    pub name: String,
    /// Default timezone for scheduling.
    pub default_timezone: String,
    /// Date format label.
    pub date_format: String,
    /// Billing/display currency code.
    pub currency: String,
}

/// Automation rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationSettings {
    /// Send an automatic reply outside working hours.
    pub auto_reply: bool,
    /// Tag incoming messages automatically.
    pub auto_tag: bool,
    /// Message body for the automatic reply.
    pub auto_reply_message: String,
}

/// Notification preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Email on new campaigns.
    pub new_campaigns: bool,
    /// Email on new leads.
    pub new_leads: bool,
    /// Email on billing events.
    pub billing_updates: bool,
    /// Real-time browser notifications.
    pub browser_notifications: bool,
}
