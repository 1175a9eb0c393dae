//! Settings-domain types for the Mitto console.
//!
//! Everything here is pure data and pure policy: no I/O, no async, no
//! gateway coupling. The application crate drives these types.

#![forbid(unsafe_code)]

mod access;
mod activity;
mod billing;
mod integration;
mod role;
mod section;
mod security;
mod settings;
mod team;
mod user;

pub use access::{can_manage_member, can_view, visible_sections};
pub use activity::{ActivityEntry, ActivityKind};
pub use billing::{Invoice, PlanLimits, Subscription};
pub use integration::{
    CredentialFieldSpec, FieldKind, Integration, MASKED_SECRET_LENGTH_THRESHOLD, MASK_CHAR,
    Provider, is_masked_placeholder,
};
pub use role::Role;
pub use section::Section;
pub use security::{ApiKey, CreatedApiKey, SessionRecord};
pub use settings::{
    AutomationSettings, NotificationSettings, PreferenceSettings, ProfileSettings,
    WorkspaceSettings,
};
pub use team::{MemberStatus, TeamMember};
pub use user::User;
