//! Subscription and invoice flows for the billing section.

use std::sync::Arc;

use tracing::warn;

use mitto_core::AppResult;
use mitto_domain::{Invoice, Subscription};

use crate::ports::BillingGateway;

/// Everything the billing section renders.
///
/// The two fetches are independent: a failed invoice history never hides
/// the subscription card, and vice versa.
#[derive(Debug, Clone, Default)]
pub struct BillingOverview {
    /// Current subscription, when the fetch succeeded.
    pub subscription: Option<Subscription>,
    /// Invoice history, oldest last.
    pub invoices: Vec<Invoice>,
    /// Set when the invoice fetch failed (distinct from an empty history).
    pub invoices_failed: bool,
}

/// Service behind the billing section.
pub struct BillingService {
    gateway: Arc<dyn BillingGateway>,
}

impl BillingService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn BillingGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the overview, degrading each half independently.
    pub async fn load_overview(&self) -> BillingOverview {
        let subscription = match self.gateway.subscription().await {
            Ok(subscription) => Some(subscription),
            Err(error) => {
                warn!(%error, "subscription fetch failed");
                None
            }
        };

        let (invoices, invoices_failed) = match self.gateway.invoices().await {
            Ok(invoices) => (invoices, false),
            Err(error) => {
                warn!(%error, "invoice history fetch failed");
                (Vec::new(), true)
            }
        };

        BillingOverview {
            subscription,
            invoices,
            invoices_failed,
        }
    }

    /// Requests an upgrade to the named plan.
    pub async fn upgrade_plan(&self, plan_id: &str) -> AppResult<()> {
        self.gateway.upgrade_plan(plan_id).await
    }

    /// Cancels the subscription at period end.
    pub async fn cancel_subscription(&self) -> AppResult<()> {
        self.gateway.cancel_subscription().await
    }
}
