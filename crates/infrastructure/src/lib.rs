//! HTTP gateway implementations and session storage for the Mitto
//! settings console.
//!
//! Every gateway shares one [`ApiClient`], which owns the envelope
//! decoding and the 401 session-clearing behavior.

#![forbid(unsafe_code)]

mod api_client;
mod config;
mod http_auth_gateway;
mod http_billing_gateway;
mod http_integrations_gateway;
mod http_profile_gateway;
mod http_security_gateway;
mod http_team_gateway;
mod http_workspace_gateway;
mod memory_session_store;

pub use api_client::ApiClient;
pub use config::{API_BASE_URL_ENV, API_TOKEN_ENV, GatewayConfig};
pub use http_auth_gateway::HttpAuthGateway;
pub use http_billing_gateway::HttpBillingGateway;
pub use http_integrations_gateway::HttpIntegrationsGateway;
pub use http_profile_gateway::HttpProfileGateway;
pub use http_security_gateway::HttpSecurityGateway;
pub use http_team_gateway::HttpTeamGateway;
pub use http_workspace_gateway::HttpWorkspaceGateway;
pub use memory_session_store::MemorySessionStore;
