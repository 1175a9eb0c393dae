//! Backend adapter for sessions, two-factor, and API keys.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use mitto_application::SecurityGateway;
use mitto_core::{AppResult, NonEmptyString};
use mitto_domain::{ApiKey, CreatedApiKey, SessionRecord};

use crate::api_client::ApiClient;

/// HTTP implementation of [`SecurityGateway`].
pub struct HttpSecurityGateway {
    client: Arc<ApiClient>,
}

impl HttpSecurityGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecurityGateway for HttpSecurityGateway {
    async fn sessions(&self) -> AppResult<Vec<SessionRecord>> {
        self.client.get("/security/sessions", "sessions").await
    }

    async fn revoke_session(&self, session_id: &str) -> AppResult<()> {
        self.client
            .delete_unit(&format!("/security/sessions/{session_id}"))
            .await
    }

    async fn enable_two_factor(&self) -> AppResult<()> {
        self.client
            .post_unit("/security/two-factor/enable", &json!({}))
            .await
    }

    async fn api_keys(&self) -> AppResult<Vec<ApiKey>> {
        self.client.get("/security/api-keys", "apiKeys").await
    }

    async fn create_api_key(&self, name: &NonEmptyString) -> AppResult<CreatedApiKey> {
        self.client
            .post(
                "/security/api-keys",
                &json!({ "name": name.as_str() }),
                "apiKey",
            )
            .await
    }

    async fn delete_api_key(&self, key_id: &str) -> AppResult<()> {
        self.client
            .delete_unit(&format!("/security/api-keys/{key_id}"))
            .await
    }
}
