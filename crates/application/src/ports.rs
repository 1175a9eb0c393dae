//! Gateway and session-store ports.
//!
//! The console core never talks HTTP directly; it consumes these traits.
//! The infrastructure crate implements them against the product backend,
//! tests substitute fakes.

use std::collections::BTreeMap;

use async_trait::async_trait;

use mitto_core::{AppResult, EmailAddress, NonEmptyString};
use mitto_domain::{
    ActivityEntry, ApiKey, AutomationSettings, CreatedApiKey, Integration, Invoice,
    NotificationSettings, PreferenceSettings, ProfileSettings, Provider, Role, SessionRecord,
    Subscription, TeamMember, User, WorkspaceSettings,
};

/// Session identity endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Fetches the signed-in user.
    async fn current_user(&self) -> AppResult<User>;

    /// Invalidates the session server-side.
    async fn logout(&self) -> AppResult<()>;
}

/// Personal profile and preference endpoints.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetches the editable profile.
    async fn profile(&self) -> AppResult<ProfileSettings>;

    /// Persists profile changes.
    async fn update_profile(&self, settings: &ProfileSettings) -> AppResult<()>;

    /// Persists locale preferences.
    async fn update_preferences(&self, settings: &PreferenceSettings) -> AppResult<()>;

    /// Requests a password-reset email for the signed-in user.
    async fn request_password_change(&self) -> AppResult<()>;
}

/// Workspace-level settings, automation, notifications, and the danger zone.
#[async_trait]
pub trait WorkspaceGateway: Send + Sync {
    /// Fetches workspace identity and regional settings.
    async fn workspace(&self) -> AppResult<WorkspaceSettings>;

    /// Persists workspace settings.
    async fn update_workspace(&self, settings: &WorkspaceSettings) -> AppResult<()>;

    /// Fetches automation rules.
    async fn automation(&self) -> AppResult<AutomationSettings>;

    /// Persists automation rules.
    async fn update_automation(&self, settings: &AutomationSettings) -> AppResult<()>;

    /// Fetches notification preferences.
    async fn notifications(&self) -> AppResult<NotificationSettings>;

    /// Persists notification preferences.
    async fn update_notifications(&self, settings: &NotificationSettings) -> AppResult<()>;

    /// Fetches the most recent activity log entries.
    async fn activity_log(&self, limit: usize) -> AppResult<Vec<ActivityEntry>>;

    /// Transfers workspace ownership to another member.
    async fn transfer_ownership(&self, new_owner_id: &str, confirmation: &str) -> AppResult<()>;

    /// Permanently deletes the workspace.
    async fn delete_workspace(&self, confirmation: &str) -> AppResult<()>;
}

/// Team roster and invite endpoints.
#[async_trait]
pub trait TeamGateway: Send + Sync {
    /// Lists all members and pending invites.
    async fn members(&self) -> AppResult<Vec<TeamMember>>;

    /// Invites a new member by email.
    async fn invite(&self, email: &EmailAddress, role: Role) -> AppResult<()>;

    /// Changes an existing member's role.
    async fn update_member_role(&self, member_id: &str, role: Role) -> AppResult<()>;

    /// Removes a member from the workspace.
    async fn remove_member(&self, member_id: &str) -> AppResult<()>;

    /// Re-sends a pending invitation email.
    async fn resend_invite(&self, member_id: &str) -> AppResult<()>;

    /// Cancels a pending invitation.
    async fn cancel_invite(&self, member_id: &str) -> AppResult<()>;
}

/// Subscription and invoice endpoints.
#[async_trait]
pub trait BillingGateway: Send + Sync {
    /// Fetches the current subscription.
    async fn subscription(&self) -> AppResult<Subscription>;

    /// Fetches the invoice history.
    async fn invoices(&self) -> AppResult<Vec<Invoice>>;

    /// Requests an upgrade to the named plan.
    async fn upgrade_plan(&self, plan_id: &str) -> AppResult<()>;

    /// Cancels the subscription at period end.
    async fn cancel_subscription(&self) -> AppResult<()>;
}

/// External platform connection endpoints.
#[async_trait]
pub trait IntegrationsGateway: Send + Sync {
    /// Lists the backend's integration records.
    async fn list(&self) -> AppResult<Vec<Integration>>;

    /// Starts a connection for the given provider.
    async fn connect(&self, provider: Provider) -> AppResult<()>;

    /// Severs the connection for the given provider.
    async fn disconnect(&self, provider: Provider) -> AppResult<()>;

    /// Fetches stored credential settings as field key/value pairs.
    /// Secret values may arrive masked; see the credential editor.
    async fn credential_settings(&self, provider: Provider)
    -> AppResult<BTreeMap<String, String>>;

    /// Persists credential settings. Omitted secret keys are left unchanged
    /// server-side.
    async fn update_credential_settings(
        &self,
        provider: Provider,
        values: &BTreeMap<String, String>,
    ) -> AppResult<()>;
}

/// Sessions, two-factor, and API key endpoints.
#[async_trait]
pub trait SecurityGateway: Send + Sync {
    /// Lists active login sessions.
    async fn sessions(&self) -> AppResult<Vec<SessionRecord>>;

    /// Revokes another session.
    async fn revoke_session(&self, session_id: &str) -> AppResult<()>;

    /// Enables two-factor authentication for the account.
    async fn enable_two_factor(&self) -> AppResult<()>;

    /// Lists stored API keys.
    async fn api_keys(&self) -> AppResult<Vec<ApiKey>>;

    /// Creates a new API key and returns its one-time plaintext.
    async fn create_api_key(&self, name: &NonEmptyString) -> AppResult<CreatedApiKey>;

    /// Deletes an API key.
    async fn delete_api_key(&self, key_id: &str) -> AppResult<()>;
}

/// Client-side session state: the bearer token and the cached user record.
///
/// Injected explicitly so services never reach for ambient global state and
/// tests can substitute a fake.
pub trait SessionStore: Send + Sync {
    /// Returns the bearer token, if a session exists.
    fn token(&self) -> Option<String>;

    /// Returns the last user record fetched in this session.
    fn cached_user(&self) -> Option<User>;

    /// Caches a freshly fetched user record.
    fn remember_user(&self, user: &User);

    /// Drops the token and cached user. Called on logout and on 401.
    fn clear(&self);
}
