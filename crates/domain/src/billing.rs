use serde::{Deserialize, Serialize};

/// Plan usage allowances shown on the subscription card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    /// Concurrent active campaigns.
    pub active_campaigns: Option<String>,
    /// Contact storage limit.
    pub contacts: Option<String>,
    /// Messages per month.
    pub messages_per_month: Option<String>,
}

/// Current subscription for the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Plan display name.
    pub plan_name: String,
    /// Billing status ("active", "past_due", ...), verbatim from the backend.
    pub status: String,
    /// Marketing description of the plan.
    pub description: Option<String>,
    /// Price in the workspace currency, as the backend formats it.
    pub price: Option<String>,
    /// Billing interval label.
    pub interval: Option<String>,
    /// Next renewal date, as the backend formats it.
    pub renewal_date: Option<String>,
    /// Usage allowances.
    #[serde(default)]
    pub limits: Option<PlanLimits>,
}

/// One historical invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Invoice date, as the backend formats it.
    pub date: String,
    /// Line description.
    pub description: String,
    /// Formatted amount.
    pub amount: String,
    /// Payment status label.
    pub status: Option<String>,
}
