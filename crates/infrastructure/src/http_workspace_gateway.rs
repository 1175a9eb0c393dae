//! Backend adapter for workspace settings, automation, notifications, the
//! activity log, and the danger-zone actions.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mitto_application::WorkspaceGateway;
use mitto_core::{AppError, AppResult};
use mitto_domain::{
    ActivityEntry, AutomationSettings, NotificationSettings, WorkspaceSettings,
};

use crate::api_client::ApiClient;

/// HTTP implementation of [`WorkspaceGateway`].
pub struct HttpWorkspaceGateway {
    client: Arc<ApiClient>,
}

impl HttpWorkspaceGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

fn to_body<T: serde::Serialize>(settings: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(settings).map_err(|error| AppError::Internal(error.to_string()))
}

#[async_trait]
impl WorkspaceGateway for HttpWorkspaceGateway {
    async fn workspace(&self) -> AppResult<WorkspaceSettings> {
        self.client.get("/workspace/settings", "workspace").await
    }

    async fn update_workspace(&self, settings: &WorkspaceSettings) -> AppResult<()> {
        self.client
            .put_unit("/workspace/settings", &to_body(settings)?)
            .await
    }

    async fn automation(&self) -> AppResult<AutomationSettings> {
        self.client.get("/workspace/automation", "automation").await
    }

    async fn update_automation(&self, settings: &AutomationSettings) -> AppResult<()> {
        self.client
            .put_unit("/workspace/automation", &to_body(settings)?)
            .await
    }

    async fn notifications(&self) -> AppResult<NotificationSettings> {
        self.client
            .get("/workspace/notifications", "notifications")
            .await
    }

    async fn update_notifications(&self, settings: &NotificationSettings) -> AppResult<()> {
        self.client
            .put_unit("/workspace/notifications", &to_body(settings)?)
            .await
    }

    async fn activity_log(&self, limit: usize) -> AppResult<Vec<ActivityEntry>> {
        self.client
            .get(&format!("/workspace/activity?limit={limit}"), "activity")
            .await
    }

    async fn transfer_ownership(&self, new_owner_id: &str, confirmation: &str) -> AppResult<()> {
        self.client
            .post_unit(
                "/workspace/transfer-ownership",
                &json!({
                    "newOwnerId": new_owner_id,
                    "confirmation": confirmation,
                }),
            )
            .await
    }

    async fn delete_workspace(&self, confirmation: &str) -> AppResult<()> {
        self.client
            .post_unit(
                "/workspace/delete",
                &json!({ "confirmation": confirmation }),
            )
            .await
    }
}
