//! Team roster, invites, and membership management.

use std::sync::Arc;

use tracing::warn;

use mitto_core::{AppError, AppResult, EmailAddress};
use mitto_domain::{MemberStatus, Role, TeamMember, User, can_manage_member};

use crate::ports::TeamGateway;

/// The team section's list state.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    /// Members and pending invites, in backend order.
    pub members: Vec<TeamMember>,
    /// Set when the list fetch failed and the roster shown is empty.
    pub load_failed: bool,
}

/// Service behind the team section.
pub struct TeamService {
    gateway: Arc<dyn TeamGateway>,
}

impl TeamService {
    /// Creates the service over its gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn TeamGateway>) -> Self {
        Self { gateway }
    }

    /// Loads the roster. A failed fetch yields an empty, flagged roster so
    /// the section renders with a retry affordance instead of blocking.
    pub async fn load_roster(&self) -> TeamRoster {
        match self.gateway.members().await {
            Ok(members) => TeamRoster {
                members,
                load_failed: false,
            },
            Err(error) => {
                warn!(%error, "team roster fetch failed");
                TeamRoster {
                    members: Vec::new(),
                    load_failed: true,
                }
            }
        }
    }

    /// Invites a new member. The email is validated before any request is
    /// made, and the invited role can never be owner.
    pub async fn invite(&self, email: &str, role: Role) -> AppResult<()> {
        if role == Role::Owner {
            return Err(AppError::Validation(
                "ownership is transferred, not granted by invite".to_owned(),
            ));
        }

        let email = EmailAddress::new(email)?;
        self.gateway.invite(&email, role).await
    }

    /// Changes a member's role on behalf of `actor`.
    ///
    /// Rejected locally when the actor's role may not manage the target,
    /// or when the target row is the actor themself.
    pub async fn change_role(
        &self,
        actor: &User,
        target: &TeamMember,
        role: Role,
    ) -> AppResult<()> {
        self.authorize(actor, target)?;
        if role == Role::Owner {
            return Err(AppError::Validation(
                "ownership is transferred, not granted by role change".to_owned(),
            ));
        }

        self.gateway.update_member_role(&target.id, role).await
    }

    /// Removes a member on behalf of `actor`.
    pub async fn remove(&self, actor: &User, target: &TeamMember) -> AppResult<()> {
        self.authorize(actor, target)?;
        self.gateway.remove_member(&target.id).await
    }

    /// Re-sends a pending invitation email.
    pub async fn resend_invite(&self, target: &TeamMember) -> AppResult<()> {
        self.require_pending(target)?;
        self.gateway.resend_invite(&target.id).await
    }

    /// Cancels a pending invitation.
    pub async fn cancel_invite(&self, actor: &User, target: &TeamMember) -> AppResult<()> {
        self.require_pending(target)?;
        self.authorize(actor, target)?;
        self.gateway.cancel_invite(&target.id).await
    }

    fn authorize(&self, actor: &User, target: &TeamMember) -> AppResult<()> {
        if target.is_self(&actor.id, &actor.email) {
            return Err(AppError::Validation(
                "you cannot manage your own membership".to_owned(),
            ));
        }
        if !can_manage_member(actor.role, target.role) {
            return Err(AppError::Forbidden(
                "your role cannot manage this member".to_owned(),
            ));
        }

        Ok(())
    }

    fn require_pending(&self, target: &TeamMember) -> AppResult<()> {
        if target.status != MemberStatus::Pending {
            return Err(AppError::Validation(
                "only pending invitations can be modified".to_owned(),
            ));
        }

        Ok(())
    }
}
