//! Workspace, automation, and notification form flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use mitto_domain::{AutomationSettings, NotificationSettings, WorkspaceSettings};

use crate::form_session::FormSession;
use crate::ports::WorkspaceGateway;

/// Service behind the workspace, automation, and notifications sections.
pub struct WorkspaceService {
    gateway: Arc<dyn WorkspaceGateway>,
}

impl WorkspaceService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn WorkspaceGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the workspace form, resolving with defaults on a failed read.
    pub async fn load_workspace(&self, form: &mut FormSession<WorkspaceSettings>) {
        let model = match self.gateway.workspace().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "workspace fetch failed, starting from defaults");
                WorkspaceSettings::default()
            }
        };
        form.finish_load(model);
    }

    /// Submits the workspace form's pending save, if it has one.
    pub async fn save_workspace(
        &self,
        form: &mut FormSession<WorkspaceSettings>,
        now: DateTime<Utc>,
    ) {
        let Some(payload) = form.begin_save() else {
            return;
        };

        let outcome = self.gateway.update_workspace(&payload).await;
        form.complete_save(outcome, now);
    }

    /// Loads the automation form, resolving with defaults on a failed read.
    pub async fn load_automation(&self, form: &mut FormSession<AutomationSettings>) {
        let model = match self.gateway.automation().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "automation fetch failed, starting from defaults");
                AutomationSettings::default()
            }
        };
        form.finish_load(model);
    }

    /// Submits the automation form's pending save, if it has one.
    pub async fn save_automation(
        &self,
        form: &mut FormSession<AutomationSettings>,
        now: DateTime<Utc>,
    ) {
        let Some(payload) = form.begin_save() else {
            return;
        };

        let outcome = self.gateway.update_automation(&payload).await;
        form.complete_save(outcome, now);
    }

    /// Loads the notifications form, resolving with defaults on a failed
    /// read.
    pub async fn load_notifications(&self, form: &mut FormSession<NotificationSettings>) {
        let model = match self.gateway.notifications().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "notification settings fetch failed, starting from defaults");
                NotificationSettings::default()
            }
        };
        form.finish_load(model);
    }

    /// Submits the notifications form's pending save, if it has one.
    pub async fn save_notifications(
        &self,
        form: &mut FormSession<NotificationSettings>,
        now: DateTime<Utc>,
    ) {
        let Some(payload) = form.begin_save() else {
            return;
        };

        let outcome = self.gateway.update_notifications(&payload).await;
        form.complete_save(outcome, now);
    }
}

#[cfg(test)]
mod tests;
