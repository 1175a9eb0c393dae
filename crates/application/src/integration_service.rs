//! Integration cards, the disconnect flow, and the credential save flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use mitto_core::AppResult;
use mitto_domain::{Integration, Provider};

use crate::credential_editor::CredentialEditor;
use crate::notice::Notice;
use crate::ports::IntegrationsGateway;

/// Fallback error message for a failed disconnect.
const DISCONNECT_FAILED_MESSAGE: &str = "Failed to disconnect";

/// Lifecycle of one integration card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    /// Live connection; the card offers configure and disconnect.
    Connected,
    /// The disconnect confirmation is showing.
    ConfirmingDisconnect {
        /// Inline error from a failed disconnect attempt, if any.
        error: Option<Notice>,
    },
    /// No connection; the card offers connect.
    Disconnected,
}

/// One provider's card: the backend record plus the interaction state.
#[derive(Debug, Clone)]
pub struct IntegrationCard {
    /// Backend connection record (or a catalog placeholder).
    pub integration: Integration,
    /// Interaction state of the card.
    pub state: CardState,
}

/// The full integrations panel: one card per catalog provider.
#[derive(Debug, Clone, Default)]
pub struct IntegrationsPanel {
    cards: Vec<IntegrationCard>,
}

impl IntegrationsPanel {
    /// Builds the panel by merging the backend listing over the static
    /// catalog. Providers the backend has no record of appear as
    /// disconnected; records for unknown providers were already dropped at
    /// the decode boundary.
    #[must_use]
    pub fn from_listing(listing: &[Integration]) -> Self {
        let cards = Provider::all()
            .iter()
            .map(|provider| {
                let integration = listing
                    .iter()
                    .find(|record| record.provider == *provider)
                    .cloned()
                    .unwrap_or_else(|| Integration::disconnected(*provider));
                let state = if integration.connected {
                    CardState::Connected
                } else {
                    CardState::Disconnected
                };

                IntegrationCard { integration, state }
            })
            .collect();

        Self { cards }
    }

    /// Returns the cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[IntegrationCard] {
        &self.cards
    }

    fn card_mut(&mut self, provider: Provider) -> Option<&mut IntegrationCard> {
        self.cards
            .iter_mut()
            .find(|card| card.integration.provider == provider)
    }

    /// Shows the disconnect confirmation on a connected card.
    pub fn request_disconnect(&mut self, provider: Provider) -> bool {
        let Some(card) = self.card_mut(provider) else {
            return false;
        };
        if card.state != CardState::Connected {
            return false;
        }

        card.state = CardState::ConfirmingDisconnect { error: None };
        true
    }

    /// Dismisses the disconnect confirmation, back to connected.
    pub fn cancel_disconnect(&mut self, provider: Provider) {
        if let Some(card) = self.card_mut(provider)
            && matches!(card.state, CardState::ConfirmingDisconnect { .. })
        {
            card.state = CardState::Connected;
        }
    }

    /// Records the outcome of a confirmed disconnect call.
    ///
    /// Success drops the card to disconnected. Failure keeps the
    /// confirmation showing with an inline error, so the connection state
    /// on screen never disagrees with the backend.
    pub fn apply_disconnect_result(
        &mut self,
        provider: Provider,
        outcome: AppResult<()>,
        now: DateTime<Utc>,
    ) {
        let Some(card) = self.card_mut(provider) else {
            return;
        };
        if !matches!(card.state, CardState::ConfirmingDisconnect { .. }) {
            return;
        }

        match outcome {
            Ok(()) => {
                card.integration = Integration::disconnected(provider);
                card.state = CardState::Disconnected;
            }
            Err(error) => {
                card.state = CardState::ConfirmingDisconnect {
                    error: Some(Notice::from_error(&error, DISCONNECT_FAILED_MESSAGE, now)),
                };
            }
        }
    }
}

/// Service behind the integrations section: the card panel plus the
/// credential editor modal.
pub struct IntegrationService {
    gateway: Arc<dyn IntegrationsGateway>,
}

impl IntegrationService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn IntegrationsGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the panel. A failed listing degrades to an all-disconnected
    /// catalog rather than blocking the section.
    pub async fn load_panel(&self) -> IntegrationsPanel {
        match self.gateway.list().await {
            Ok(listing) => IntegrationsPanel::from_listing(&listing),
            Err(error) => {
                warn!(%error, "integration listing failed, showing catalog as disconnected");
                IntegrationsPanel::from_listing(&[])
            }
        }
    }

    /// Starts a connection and reloads the panel so the card reflects the
    /// backend's record.
    pub async fn connect(&self, provider: Provider) -> AppResult<IntegrationsPanel> {
        self.gateway.connect(provider).await?;
        Ok(self.load_panel().await)
    }

    /// Runs a confirmed disconnect and applies the outcome to the panel.
    pub async fn confirm_disconnect(
        &self,
        panel: &mut IntegrationsPanel,
        provider: Provider,
        now: DateTime<Utc>,
    ) {
        let outcome = self.gateway.disconnect(provider).await;
        panel.apply_disconnect_result(provider, outcome, now);
    }

    /// Opens the credential editor for a provider and runs the settings
    /// fetch it needs.
    pub async fn open_editor(&self, editor: &mut CredentialEditor, provider: Provider) {
        if !editor.open(provider) {
            return;
        }

        let result = self.gateway.credential_settings(provider).await;
        editor.apply_fetch_result(provider, result);
    }

    /// Submits the editor's pending save, if it has one, and applies the
    /// outcome. Returns `true` when the save succeeded and the caller
    /// should refresh the panel.
    pub async fn save_credentials(
        &self,
        editor: &mut CredentialEditor,
        now: DateTime<Utc>,
    ) -> bool {
        let Some((provider, payload)) = editor.begin_save() else {
            return false;
        };

        let outcome = self
            .gateway
            .update_credential_settings(provider, &payload)
            .await;
        editor.complete_save(outcome, now)
    }
}
