//! Activity log and the danger zone: ownership transfer and workspace
//! deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use mitto_domain::ActivityEntry;

use crate::confirmation::ConfirmationGate;
use crate::ports::WorkspaceGateway;

/// Phrase the owner must type to transfer ownership.
pub const TRANSFER_CONFIRMATION_PHRASE: &str = "TRANSFER";

/// How many activity entries the section shows.
const ACTIVITY_LOG_LIMIT: usize = 20;

/// Service behind the advanced section. Owner-only by the section gate;
/// the backend enforces the same policy on every call.
pub struct AdvancedService {
    gateway: Arc<dyn WorkspaceGateway>,
}

impl AdvancedService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn WorkspaceGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the recent activity log. A failed fetch yields an empty log;
    /// the danger zone must stay usable regardless.
    pub async fn load_activity_log(&self) -> Vec<ActivityEntry> {
        match self.gateway.activity_log(ACTIVITY_LOG_LIMIT).await {
            Ok(entries) => entries,
            Err(error) => {
                warn!(%error, "activity log fetch failed");
                Vec::new()
            }
        }
    }

    /// Creates the confirmation gate for an ownership transfer.
    #[must_use]
    pub fn transfer_gate(&self) -> ConfirmationGate {
        ConfirmationGate::new(TRANSFER_CONFIRMATION_PHRASE)
    }

    /// Creates the confirmation gate for deleting the workspace. The
    /// required phrase is the workspace's own name.
    #[must_use]
    pub fn delete_gate(&self, workspace_name: &str) -> ConfirmationGate {
        ConfirmationGate::new(workspace_name)
    }

    /// Runs a confirmed ownership transfer through its gate.
    pub async fn transfer_ownership(
        &self,
        gate: &mut ConfirmationGate,
        new_owner_id: &str,
        now: DateTime<Utc>,
    ) {
        if !gate.begin_submit() {
            return;
        }

        let outcome = self
            .gateway
            .transfer_ownership(new_owner_id, TRANSFER_CONFIRMATION_PHRASE)
            .await;
        gate.complete_submit(outcome, "Failed to transfer ownership", now);
    }

    /// Runs a confirmed workspace deletion through its gate.
    pub async fn delete_workspace(&self, gate: &mut ConfirmationGate, now: DateTime<Utc>) {
        if !gate.begin_submit() {
            return;
        }

        let confirmation = gate.required_phrase().to_owned();
        let outcome = self.gateway.delete_workspace(&confirmation).await;
        gate.complete_submit(outcome, "Failed to delete workspace", now);
    }
}
