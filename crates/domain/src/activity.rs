use serde::{Deserialize, Serialize};

/// Severity of an activity log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Routine change.
    Info,
    /// Change worth reviewing.
    Warning,
    /// Security- or billing-relevant change.
    Danger,
}

impl Default for ActivityKind {
    fn default() -> Self {
        Self::Info
    }
}

/// One entry of the workspace activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// Backend identifier.
    pub id: String,
    /// Short headline.
    pub title: String,
    /// Detail line.
    pub description: Option<String>,
    /// When it happened, as the backend formats it.
    pub occurred_at: Option<String>,
    /// Severity.
    #[serde(default)]
    pub kind: ActivityKind,
}
