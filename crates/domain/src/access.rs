//! Role-based section visibility.
//!
//! This is the single source of the visibility policy. Both the sidebar and
//! the content area must consult [`can_view`]; there is deliberately no
//! second place where the table lives.

use crate::{Role, Section};

/// Returns whether `role` may see `section`.
///
/// Policy table:
///
/// | role | visible sections |
/// |---|---|
/// | owner | all |
/// | admin | all except billing and advanced |
/// | staff, moderator, member | account, notifications, security |
///
/// Unknown backend role values never reach this function: the decode
/// boundary coerces them to [`Role::Member`], so they land in the
/// restricted tier.
#[must_use]
pub fn can_view(role: Role, section: Section) -> bool {
    match role {
        Role::Owner => true,
        Role::Admin => !matches!(section, Section::Billing | Section::Advanced),
        Role::Staff | Role::Moderator | Role::Member => matches!(
            section,
            Section::Account | Section::Notifications | Section::Security
        ),
    }
}

/// Returns the sections visible to `role`, in sidebar order.
#[must_use]
pub fn visible_sections(role: Role) -> Vec<Section> {
    Section::all()
        .iter()
        .copied()
        .filter(|section| can_view(role, *section))
        .collect()
}

/// Returns whether `actor` may manage the team membership of `target`.
///
/// Owners manage everyone else; admins manage members who are neither the
/// owner nor another admin; all other roles manage nobody. Self-management
/// is the caller's concern (an identity check, not a role check).
#[must_use]
pub fn can_manage_member(actor: Role, target: Role) -> bool {
    match actor {
        Role::Owner => true,
        Role::Admin => !matches!(target, Role::Owner | Role::Admin),
        Role::Staff | Role::Moderator | Role::Member => false,
    }
}
