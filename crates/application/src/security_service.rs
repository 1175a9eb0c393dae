//! Sessions, two-factor, and API key flows for the security section.

use std::sync::Arc;

use tracing::warn;

use mitto_core::{AppError, AppResult, NonEmptyString};
use mitto_domain::{ApiKey, CreatedApiKey, SessionRecord};

use crate::ports::SecurityGateway;

/// Everything the security section renders.
#[derive(Debug, Clone, Default)]
pub struct SecurityOverview {
    /// Active login sessions, current session first when the backend
    /// orders them so.
    pub sessions: Vec<SessionRecord>,
    /// Stored API keys (no secret material).
    pub api_keys: Vec<ApiKey>,
}

/// Service behind the security section.
pub struct SecurityService {
    gateway: Arc<dyn SecurityGateway>,
}

impl SecurityService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn SecurityGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the overview, degrading each list independently to empty.
    pub async fn load_overview(&self) -> SecurityOverview {
        let sessions = match self.gateway.sessions().await {
            Ok(sessions) => sessions,
            Err(error) => {
                warn!(%error, "session list fetch failed");
                Vec::new()
            }
        };
        let api_keys = match self.gateway.api_keys().await {
            Ok(keys) => keys,
            Err(error) => {
                warn!(%error, "api key list fetch failed");
                Vec::new()
            }
        };

        SecurityOverview { sessions, api_keys }
    }

    /// Revokes another session and returns the refreshed list.
    ///
    /// The current session is rejected locally; signing out is the logout
    /// flow, not a revocation. The list on screen is only updated from the
    /// backend's answer, never optimistically.
    pub async fn revoke_session(&self, session: &SessionRecord) -> AppResult<Vec<SessionRecord>> {
        if session.is_current {
            return Err(AppError::Validation(
                "the current session is ended by signing out".to_owned(),
            ));
        }

        self.gateway.revoke_session(&session.id).await?;
        self.gateway.sessions().await
    }

    /// Enables two-factor authentication for the account.
    pub async fn enable_two_factor(&self) -> AppResult<()> {
        self.gateway.enable_two_factor().await
    }

    /// Creates a named API key. The returned plaintext is shown once and
    /// must not be retained by the caller beyond that.
    pub async fn create_api_key(&self, name: &str) -> AppResult<CreatedApiKey> {
        let name = NonEmptyString::new(name)?;
        self.gateway.create_api_key(&name).await
    }

    /// Deletes an API key and returns the refreshed list.
    pub async fn delete_api_key(&self, key_id: &str) -> AppResult<Vec<ApiKey>> {
        self.gateway.delete_api_key(key_id).await?;
        self.gateway.api_keys().await
    }
}
