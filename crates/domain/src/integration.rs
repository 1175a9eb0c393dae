//! External platform catalog and credential field schemas.
//!
//! The catalog and every field schema are static: the backend reports which
//! providers are connected, but never defines what fields a provider has.

use std::str::FromStr;

use mitto_core::AppError;
use serde::{Deserialize, Serialize};

/// Character the backend uses when returning an obscured secret.
pub const MASK_CHAR: char = '\u{2022}';

/// Secrets shorter than this are assumed to be masked placeholders.
///
/// Heuristic carried over from the backend contract, which has no explicit
/// masked/unmasked indicator yet. A legitimately short token would be
/// misclassified; replace this once the API reports masking explicitly.
pub const MASKED_SECRET_LENGTH_THRESHOLD: usize = 20;

/// Returns whether a fetched secret value is a masked placeholder rather
/// than plaintext.
///
/// A non-empty value that contains [`MASK_CHAR`] or is shorter than
/// [`MASKED_SECRET_LENGTH_THRESHOLD`] characters means "a secret exists
/// server-side but its plaintext is not being shown".
#[must_use]
pub fn is_masked_placeholder(value: &str) -> bool {
    !value.is_empty()
        && (value.contains(MASK_CHAR) || value.chars().count() < MASKED_SECRET_LENGTH_THRESHOLD)
}

/// A connectable external platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Instagram comment and DM automation.
    Instagram,
    /// Facebook post and comment automation.
    Facebook,
    /// Brevo email campaigns.
    Brevo,
    /// GoHighLevel contact sync and CRM.
    GoHighLevel,
}

impl Provider {
    /// Returns all providers in catalog order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Provider] = &[
            Provider::Instagram,
            Provider::Facebook,
            Provider::Brevo,
            Provider::GoHighLevel,
        ];

        ALL
    }

    /// Returns the stable wire identifier for this provider.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Brevo => "brevo",
            Self::GoHighLevel => "gohighlevel",
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Brevo => "Brevo",
            Self::GoHighLevel => "GoHighLevel",
        }
    }

    /// Short catalog description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Instagram => "Automate Instagram comments and direct messages",
            Self::Facebook => "Automate Facebook posts and comments",
            Self::Brevo => "Send email campaigns through Brevo",
            Self::GoHighLevel => "Sync contacts and manage the CRM",
        }
    }

    /// Returns the ordered credential field schema for this provider.
    #[must_use]
    pub fn field_schema(&self) -> &'static [CredentialFieldSpec] {
        match self {
            Self::Instagram => &[
                CredentialFieldSpec {
                    key: "accessToken",
                    label_primary: "Access token",
                    label_secondary: "Long-lived Graph API token",
                    kind: FieldKind::Secret,
                },
                CredentialFieldSpec {
                    key: "businessAccountId",
                    label_primary: "Business account ID",
                    label_secondary: "Instagram business account",
                    kind: FieldKind::Text,
                },
            ],
            Self::Facebook => &[
                CredentialFieldSpec {
                    key: "pageAccessToken",
                    label_primary: "Page access token",
                    label_secondary: "Token scoped to the connected page",
                    kind: FieldKind::Secret,
                },
                CredentialFieldSpec {
                    key: "pageId",
                    label_primary: "Page ID",
                    label_secondary: "Facebook page identifier",
                    kind: FieldKind::Text,
                },
            ],
            Self::Brevo => &[
                CredentialFieldSpec {
                    key: "apiKey",
                    label_primary: "API key",
                    label_secondary: "Brevo v3 API key",
                    kind: FieldKind::Secret,
                },
                CredentialFieldSpec {
                    key: "senderEmail",
                    label_primary: "Sender email",
                    label_secondary: "Verified sender address",
                    kind: FieldKind::Text,
                },
            ],
            Self::GoHighLevel => &[
                CredentialFieldSpec {
                    key: "apiKey",
                    label_primary: "API key",
                    label_secondary: "Agency or location API key",
                    kind: FieldKind::Secret,
                },
                CredentialFieldSpec {
                    key: "locationId",
                    label_primary: "Location ID",
                    label_secondary: "Issued at connect time",
                    kind: FieldKind::ReadonlySecret,
                },
            ],
        }
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "instagram" => Ok(Self::Instagram),
            "facebook" => Ok(Self::Facebook),
            "brevo" => Ok(Self::Brevo),
            "gohighlevel" => Ok(Self::GoHighLevel),
            _ => Err(AppError::Validation(format!(
                "unknown integration provider '{value}'"
            ))),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// How a credential field is fetched, displayed, and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Editable secret. Masked placeholders from the backend are never
    /// redisplayed; an empty submission means "leave unchanged".
    Secret,
    /// Editable plain text, always populated verbatim.
    Text,
    /// Display-only secret, populated verbatim, never editable.
    ReadonlySecret,
}

/// One entry of a provider's credential field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialFieldSpec {
    /// Wire key in the settings payload.
    pub key: &'static str,
    /// Primary field label.
    pub label_primary: &'static str,
    /// Secondary label / hint.
    pub label_secondary: &'static str,
    /// Edit and masking behavior.
    pub kind: FieldKind,
}

/// Runtime connection state of one provider, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    /// Which platform this record is for.
    pub provider: Provider,
    /// Whether the workspace currently has a live connection.
    pub connected: bool,
    /// Connected account display name, when connected.
    pub account_name: Option<String>,
    /// Last successful sync, as the backend formats it.
    pub last_sync: Option<String>,
}

impl Integration {
    /// A catalog placeholder for a provider the backend has no record of.
    #[must_use]
    pub fn disconnected(provider: Provider) -> Self {
        Self {
            provider,
            connected: false,
            account_name: None,
            last_sync: None,
        }
    }
}
