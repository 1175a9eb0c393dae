//! Backend adapter for the account section's profile and preferences.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mitto_application::ProfileGateway;
use mitto_core::{AppError, AppResult};
use mitto_domain::{PreferenceSettings, ProfileSettings};

use crate::api_client::ApiClient;

/// HTTP implementation of [`ProfileGateway`].
pub struct HttpProfileGateway {
    client: Arc<ApiClient>,
}

impl HttpProfileGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileGateway for HttpProfileGateway {
    async fn profile(&self) -> AppResult<ProfileSettings> {
        self.client.get("/account/profile", "profile").await
    }

    async fn update_profile(&self, settings: &ProfileSettings) -> AppResult<()> {
        let body = serde_json::to_value(settings)
            .map_err(|error| AppError::Internal(error.to_string()))?;
        self.client.put_unit("/account/profile", &body).await
    }

    async fn update_preferences(&self, settings: &PreferenceSettings) -> AppResult<()> {
        let body = serde_json::to_value(settings)
            .map_err(|error| AppError::Internal(error.to_string()))?;
        self.client.put_unit("/account/preferences", &body).await
    }

    async fn request_password_change(&self) -> AppResult<()> {
        self.client
            .post_unit("/account/password-reset", &json!({}))
            .await
    }
}
