use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use mitto_core::{AppError, AppResult};
use mitto_domain::{
    ActivityEntry, AutomationSettings, NotificationSettings, WorkspaceSettings,
};

use super::WorkspaceService;
use crate::form_session::FormSession;
use crate::notice::NoticeKind;
use crate::ports::WorkspaceGateway;

struct FakeWorkspaceGateway {
    workspace: Mutex<AppResult<WorkspaceSettings>>,
    update_workspace_result: Mutex<AppResult<()>>,
    saved_workspaces: Mutex<Vec<WorkspaceSettings>>,
    saved_automation: Mutex<Vec<AutomationSettings>>,
    saved_notifications: Mutex<Vec<NotificationSettings>>,
}

impl Default for FakeWorkspaceGateway {
    fn default() -> Self {
        Self {
            workspace: Mutex::new(Ok(sample_workspace())),
            update_workspace_result: Mutex::new(Ok(())),
            saved_workspaces: Mutex::new(Vec::new()),
            saved_automation: Mutex::new(Vec::new()),
            saved_notifications: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WorkspaceGateway for FakeWorkspaceGateway {
    async fn workspace(&self) -> AppResult<WorkspaceSettings> {
        self.workspace.lock().await.clone()
    }

    async fn update_workspace(&self, settings: &WorkspaceSettings) -> AppResult<()> {
        self.saved_workspaces.lock().await.push(settings.clone());
        self.update_workspace_result.lock().await.clone()
    }

    async fn automation(&self) -> AppResult<AutomationSettings> {
        Ok(AutomationSettings::default())
    }

    async fn update_automation(&self, settings: &AutomationSettings) -> AppResult<()> {
        self.saved_automation.lock().await.push(settings.clone());
        Ok(())
    }

    async fn notifications(&self) -> AppResult<NotificationSettings> {
        Ok(NotificationSettings::default())
    }

    async fn update_notifications(&self, settings: &NotificationSettings) -> AppResult<()> {
        self.saved_notifications.lock().await.push(settings.clone());
        Ok(())
    }

    async fn activity_log(&self, _limit: usize) -> AppResult<Vec<ActivityEntry>> {
        Ok(Vec::new())
    }

    async fn transfer_ownership(&self, _new_owner_id: &str, _confirmation: &str) -> AppResult<()> {
        Ok(())
    }

    async fn delete_workspace(&self, _confirmation: &str) -> AppResult<()> {
        Ok(())
    }
}

fn sample_workspace() -> WorkspaceSettings {
    WorkspaceSettings {
        name: "Mitto Marketing".to_owned(),
        default_timezone: "(GMT+3:00) Baghdad".to_owned(),
        date_format: "DD/MM/YYYY".to_owned(),
        currency: "USD".to_owned(),
    }
}

fn service() -> (WorkspaceService, Arc<FakeWorkspaceGateway>) {
    let gateway = Arc::new(FakeWorkspaceGateway::default());
    let service = WorkspaceService::new(Arc::clone(&gateway) as Arc<dyn WorkspaceGateway>);

    (service, gateway)
}

#[tokio::test]
async fn workspace_load_and_save_round_trip() {
    let (service, gateway) = service();

    let mut form = FormSession::new();
    service.load_workspace(&mut form).await;
    assert_eq!(
        form.model().map(|model| model.name.as_str()),
        Some("Mitto Marketing")
    );

    form.edit(|model| model.currency = "EUR".to_owned());
    service.save_workspace(&mut form, Utc::now()).await;

    assert!(!form.is_dirty());
    let saved = gateway.saved_workspaces.lock().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].currency, "EUR");
}

#[tokio::test]
async fn failed_workspace_read_resolves_with_defaults() {
    let (service, gateway) = service();
    *gateway.workspace.lock().await = Err(AppError::Network("offline".to_owned()));

    let mut form = FormSession::new();
    service.load_workspace(&mut form).await;
    assert!(!form.is_loading());
    assert_eq!(form.model(), Some(&WorkspaceSettings::default()));
}

#[tokio::test]
async fn failed_workspace_save_keeps_the_form_dirty() {
    let now = Utc::now();
    let (service, gateway) = service();
    *gateway.update_workspace_result.lock().await =
        Err(AppError::Api("name already taken".to_owned()));

    let mut form = FormSession::new();
    service.load_workspace(&mut form).await;
    form.edit(|model| model.name = "Taken Name".to_owned());
    service.save_workspace(&mut form, now).await;

    assert!(form.is_dirty());
    let notice = form.notice(now);
    assert!(notice.is_some_and(|notice| notice.kind() == NoticeKind::Error));
}

#[tokio::test]
async fn save_without_edits_never_calls_the_gateway() {
    let (service, gateway) = service();

    let mut form = FormSession::new();
    service.load_workspace(&mut form).await;
    service.save_workspace(&mut form, Utc::now()).await;

    assert!(gateway.saved_workspaces.lock().await.is_empty());
}

#[tokio::test]
async fn automation_save_round_trips_through_the_gateway() {
    let (service, gateway) = service();

    let mut form = FormSession::new();
    service.load_automation(&mut form).await;
    form.edit(|model| {
        model.auto_reply = true;
        model.auto_reply_message = "We are away until Sunday".to_owned();
    });
    service.save_automation(&mut form, Utc::now()).await;

    let saved = gateway.saved_automation.lock().await;
    assert_eq!(saved.len(), 1);
    assert!(saved[0].auto_reply);
}

#[tokio::test]
async fn notifications_save_round_trips_through_the_gateway() {
    let (service, gateway) = service();

    let mut form = FormSession::new();
    service.load_notifications(&mut form).await;
    form.edit(|model| model.billing_updates = true);
    service.save_notifications(&mut form, Utc::now()).await;

    let saved = gateway.saved_notifications.lock().await;
    assert_eq!(saved.len(), 1);
    assert!(saved[0].billing_updates);
}
