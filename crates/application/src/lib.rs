//! Application services, ports, and interaction state machines for the
//! Mitto settings console.
//!
//! Every panel of the console is modeled here as explicit state rather
//! than scattered flags: a navigation gate, a generic form session for the
//! simple sections, and dedicated machines for the credential editor, the
//! integration cards, and the confirmation-gated destructive actions.

#![forbid(unsafe_code)]

mod account_service;
mod advanced_service;
mod billing_service;
mod confirmation;
mod credential_editor;
mod form_session;
mod integration_service;
mod navigation;
mod notice;
mod ports;
mod security_service;
mod team_service;
mod workspace_service;

pub use account_service::{AccountService, CurrentUser};
pub use advanced_service::{AdvancedService, TRANSFER_CONFIRMATION_PHRASE};
pub use billing_service::{BillingOverview, BillingService};
pub use confirmation::{ConfirmationGate, ConfirmationState};
pub use credential_editor::{CloseOutcome, CredentialEditor, CredentialForm, EditorState};
pub use form_session::{FormSession, FormState};
pub use integration_service::{
    CardState, IntegrationCard, IntegrationService, IntegrationsPanel,
};
pub use navigation::SettingsNav;
pub use notice::{ERROR_NOTICE_SECONDS, Notice, NoticeKind, SUCCESS_NOTICE_SECONDS};
pub use ports::{
    AuthGateway, BillingGateway, IntegrationsGateway, ProfileGateway, SecurityGateway,
    SessionStore, TeamGateway, WorkspaceGateway,
};
pub use security_service::{SecurityOverview, SecurityService};
pub use team_service::{TeamRoster, TeamService};
pub use workspace_service::WorkspaceService;
