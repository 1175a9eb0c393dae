//! Backend adapter for subscription and invoice data.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mitto_application::BillingGateway;
use mitto_core::AppResult;
use mitto_domain::{Invoice, Subscription};

use crate::api_client::ApiClient;

/// HTTP implementation of [`BillingGateway`].
pub struct HttpBillingGateway {
    client: Arc<ApiClient>,
}

impl HttpBillingGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BillingGateway for HttpBillingGateway {
    async fn subscription(&self) -> AppResult<Subscription> {
        self.client.get("/billing/subscription", "subscription").await
    }

    async fn invoices(&self) -> AppResult<Vec<Invoice>> {
        self.client.get("/billing/invoices", "invoices").await
    }

    async fn upgrade_plan(&self, plan_id: &str) -> AppResult<()> {
        self.client
            .post_unit("/billing/upgrade", &json!({ "planId": plan_id }))
            .await
    }

    async fn cancel_subscription(&self) -> AppResult<()> {
        self.client.post_unit("/billing/cancel", &json!({})).await
    }
}
