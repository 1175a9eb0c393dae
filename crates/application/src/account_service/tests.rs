use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use mitto_core::{AppError, AppResult};
use mitto_domain::{PreferenceSettings, ProfileSettings, Role, User};

use super::AccountService;
use crate::form_session::FormSession;
use crate::ports::{AuthGateway, ProfileGateway, SessionStore};

struct FakeAuthGateway {
    current_user: Mutex<AppResult<User>>,
    logout_result: Mutex<AppResult<()>>,
}

impl Default for FakeAuthGateway {
    fn default() -> Self {
        Self {
            current_user: Mutex::new(Ok(owner())),
            logout_result: Mutex::new(Ok(())),
        }
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn current_user(&self) -> AppResult<User> {
        self.current_user.lock().await.clone()
    }

    async fn logout(&self) -> AppResult<()> {
        self.logout_result.lock().await.clone()
    }
}

struct FakeProfileGateway {
    profile: Mutex<AppResult<ProfileSettings>>,
    update_result: Mutex<AppResult<()>>,
    updates: Mutex<Vec<ProfileSettings>>,
}

impl Default for FakeProfileGateway {
    fn default() -> Self {
        Self {
            profile: Mutex::new(Ok(ProfileSettings::default())),
            update_result: Mutex::new(Ok(())),
            updates: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProfileGateway for FakeProfileGateway {
    async fn profile(&self) -> AppResult<ProfileSettings> {
        self.profile.lock().await.clone()
    }

    async fn update_profile(&self, settings: &ProfileSettings) -> AppResult<()> {
        self.updates.lock().await.push(settings.clone());
        self.update_result.lock().await.clone()
    }

    async fn update_preferences(&self, _settings: &PreferenceSettings) -> AppResult<()> {
        self.update_result.lock().await.clone()
    }

    async fn request_password_change(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeSessionStore {
    token: std::sync::Mutex<Option<String>>,
    user: std::sync::Mutex<Option<User>>,
}

impl SessionStore for FakeSessionStore {
    fn token(&self) -> Option<String> {
        self.token.lock().map(|token| token.clone()).unwrap_or(None)
    }

    fn cached_user(&self) -> Option<User> {
        self.user.lock().map(|user| user.clone()).unwrap_or(None)
    }

    fn remember_user(&self, user: &User) {
        if let Ok(mut slot) = self.user.lock() {
            *slot = Some(user.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut token) = self.token.lock() {
            *token = None;
        }
        if let Ok(mut user) = self.user.lock() {
            *user = None;
        }
    }
}

fn owner() -> User {
    User {
        id: "usr_01".to_owned(),
        name: "Haider Al Don".to_owned(),
        email: "haider@mitto.example".to_owned(),
        avatar_url: None,
        role: Role::Owner,
    }
}

fn service() -> (
    AccountService,
    Arc<FakeAuthGateway>,
    Arc<FakeProfileGateway>,
    Arc<FakeSessionStore>,
) {
    let auth = Arc::new(FakeAuthGateway::default());
    let profile = Arc::new(FakeProfileGateway::default());
    let session = Arc::new(FakeSessionStore::default());
    let service = AccountService::new(
        Arc::clone(&auth) as Arc<dyn AuthGateway>,
        Arc::clone(&profile) as Arc<dyn ProfileGateway>,
        Arc::clone(&session) as Arc<dyn SessionStore>,
    );

    (service, auth, profile, session)
}

#[tokio::test]
async fn fresh_identity_is_cached_in_the_session() {
    let (service, _auth, _profile, session) = service();

    let current = service
        .load_current_user()
        .await
        .unwrap_or_else(|_| panic!("load should succeed"));
    assert!(!current.degraded);
    assert_eq!(current.user.role, Role::Owner);
    assert_eq!(session.cached_user().map(|user| user.id), Some("usr_01".to_owned()));
}

#[tokio::test]
async fn rejected_session_propagates_unauthorized() {
    let (service, auth, _profile, _session) = service();
    *auth.current_user.lock().await = Err(AppError::Unauthorized("token expired".to_owned()));

    let result = service.load_current_user().await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn network_failure_degrades_to_the_cached_record() {
    let (service, auth, _profile, session) = service();
    session.remember_user(&owner());
    *auth.current_user.lock().await = Err(AppError::Network("offline".to_owned()));

    let current = service
        .load_current_user()
        .await
        .unwrap_or_else(|_| panic!("load should degrade, not fail"));
    assert!(current.degraded);
    assert_eq!(current.user.role, Role::Owner);
}

#[tokio::test]
async fn network_failure_without_a_cache_falls_back_least_privileged() {
    let (service, auth, _profile, _session) = service();
    *auth.current_user.lock().await = Err(AppError::Network("offline".to_owned()));

    let current = service
        .load_current_user()
        .await
        .unwrap_or_else(|_| panic!("load should degrade, not fail"));
    assert!(current.degraded);
    assert_eq!(current.user.role, Role::Member);
}

#[tokio::test]
async fn failed_profile_read_resolves_an_empty_form() {
    let (service, _auth, profile, _session) = service();
    *profile.profile.lock().await = Err(AppError::Network("offline".to_owned()));

    let mut form = FormSession::new();
    service.load_profile(&mut form).await;
    assert!(!form.is_loading());
    assert_eq!(form.model(), Some(&ProfileSettings::default()));
}

#[tokio::test]
async fn profile_save_round_trips_through_the_gateway() {
    let (service, _auth, profile, _session) = service();
    *profile.profile.lock().await = Ok(ProfileSettings::from_display_name(
        "Haider Al Don",
        "haider@mitto.example",
    ));

    let mut form = FormSession::new();
    service.load_profile(&mut form).await;
    form.edit(|model| model.phone = "+964 770 000 0000".to_owned());
    service.save_profile(&mut form, Utc::now()).await;

    assert!(!form.is_dirty());
    let updates = profile.updates.lock().await;
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].phone, "+964 770 000 0000");
}

#[tokio::test]
async fn logout_clears_local_state_even_when_the_server_fails() {
    let (service, auth, _profile, session) = service();
    session.remember_user(&owner());
    if let Ok(mut token) = session.token.lock() {
        *token = Some("tok_123".to_owned());
    }
    *auth.logout_result.lock().await = Err(AppError::Network("offline".to_owned()));

    service.logout().await;
    assert!(session.token().is_none());
    assert!(session.cached_user().is_none());
}
