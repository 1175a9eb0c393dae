//! Identity, profile, and preference flows for the account section.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use mitto_core::{AppError, AppResult};
use mitto_domain::{PreferenceSettings, ProfileSettings, User};

use crate::form_session::FormSession;
use crate::ports::{AuthGateway, ProfileGateway, SessionStore};

/// The resolved viewer identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// The user record driving role checks and display.
    pub user: User,
    /// `true` when the fetch failed and the record came from the session
    /// cache or the built-in fallback.
    pub degraded: bool,
}

/// Service behind the account section and the screen's identity bootstrap.
pub struct AccountService {
    auth: Arc<dyn AuthGateway>,
    profile: Arc<dyn ProfileGateway>,
    session: Arc<dyn SessionStore>,
}

impl AccountService {
    /// Creates the service over its gateways and session store.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        profile: Arc<dyn ProfileGateway>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            auth,
            profile,
            session,
        }
    }

    /// Resolves the signed-in user for the screen.
    ///
    /// A rejected session propagates so the caller redirects to sign-in.
    /// Any other failure degrades to the session's cached record, or to the
    /// least-privileged fallback when nothing is cached, so the screen
    /// still renders its restricted sections offline.
    pub async fn load_current_user(&self) -> AppResult<CurrentUser> {
        match self.auth.current_user().await {
            Ok(user) => {
                self.session.remember_user(&user);
                Ok(CurrentUser {
                    user,
                    degraded: false,
                })
            }
            Err(AppError::Unauthorized(message)) => Err(AppError::Unauthorized(message)),
            Err(error) => {
                warn!(%error, "current user fetch failed, degrading to cached identity");
                let user = self.session.cached_user().unwrap_or_else(User::fallback);
                Ok(CurrentUser {
                    user,
                    degraded: true,
                })
            }
        }
    }

    /// Loads the profile form. A failed read resolves the form with empty
    /// fields rather than leaving it stuck loading.
    pub async fn load_profile(&self, form: &mut FormSession<ProfileSettings>) {
        let model = match self.profile.profile().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, "profile fetch failed, starting from an empty form");
                ProfileSettings::default()
            }
        };
        form.finish_load(model);
    }

    /// Submits the profile form's pending save, if it has one.
    pub async fn save_profile(&self, form: &mut FormSession<ProfileSettings>, now: DateTime<Utc>) {
        let Some(payload) = form.begin_save() else {
            return;
        };

        let outcome = self.profile.update_profile(&payload).await;
        form.complete_save(outcome, now);
    }

    /// Submits the preferences form's pending save, if it has one.
    pub async fn save_preferences(
        &self,
        form: &mut FormSession<PreferenceSettings>,
        now: DateTime<Utc>,
    ) {
        let Some(payload) = form.begin_save() else {
            return;
        };

        let outcome = self.profile.update_preferences(&payload).await;
        form.complete_save(outcome, now);
    }

    /// Requests a password-reset email for the signed-in user.
    pub async fn request_password_change(&self) -> AppResult<()> {
        self.profile.request_password_change().await
    }

    /// Signs out: best-effort server invalidation, then drops local state.
    ///
    /// The local session is cleared even when the server call fails, so the
    /// user is never trapped signed-in by an unreachable backend.
    pub async fn logout(&self) {
        if let Err(error) = self.auth.logout().await {
            warn!(%error, "server-side logout failed, clearing local session anyway");
        }
        self.session.clear();
    }
}

#[cfg(test)]
mod tests;
