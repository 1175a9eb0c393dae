//! Backend adapter for integration connections and credential settings.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use mitto_application::IntegrationsGateway;
use mitto_core::{AppError, AppResult};
use mitto_domain::{Integration, Provider};

use crate::api_client::ApiClient;

/// Wire shape of one integration record. The provider arrives as a string;
/// records for providers outside the catalog are dropped with a warning
/// rather than failing the whole listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegrationDto {
    provider: String,
    #[serde(default)]
    connected: bool,
    #[serde(default)]
    account_name: Option<String>,
    #[serde(default)]
    last_sync: Option<String>,
}

impl IntegrationDto {
    fn into_integration(self) -> Option<Integration> {
        match Provider::from_str(&self.provider) {
            Ok(provider) => Some(Integration {
                provider,
                connected: self.connected,
                account_name: self.account_name,
                last_sync: self.last_sync,
            }),
            Err(_) => {
                warn!(provider = %self.provider, "dropping integration record for unknown provider");
                None
            }
        }
    }
}

/// HTTP implementation of [`IntegrationsGateway`].
pub struct HttpIntegrationsGateway {
    client: Arc<ApiClient>,
}

impl HttpIntegrationsGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IntegrationsGateway for HttpIntegrationsGateway {
    async fn list(&self) -> AppResult<Vec<Integration>> {
        let rows: Vec<IntegrationDto> = self.client.get("/integrations", "integrations").await?;
        Ok(rows
            .into_iter()
            .filter_map(IntegrationDto::into_integration)
            .collect())
    }

    async fn connect(&self, provider: Provider) -> AppResult<()> {
        self.client
            .post_unit(&format!("/integrations/{provider}/connect"), &json!({}))
            .await
    }

    async fn disconnect(&self, provider: Provider) -> AppResult<()> {
        self.client
            .post_unit(&format!("/integrations/{provider}/disconnect"), &json!({}))
            .await
    }

    async fn credential_settings(
        &self,
        provider: Provider,
    ) -> AppResult<BTreeMap<String, String>> {
        self.client
            .get(&format!("/integrations/{provider}/settings"), "settings")
            .await
    }

    async fn update_credential_settings(
        &self,
        provider: Provider,
        values: &BTreeMap<String, String>,
    ) -> AppResult<()> {
        let body =
            serde_json::to_value(values).map_err(|error| AppError::Internal(error.to_string()))?;
        self.client
            .put_unit(&format!("/integrations/{provider}/settings"), &body)
            .await
    }
}
