//! Mitto settings console composition root.
//!
//! Wires the HTTP gateways into the application services and prints a
//! summary of what the signed-in user would see on the settings screen.

#![forbid(unsafe_code)]

use std::sync::Arc;

use mitto_application::{
    AccountService, AdvancedService, BillingService, FormSession, IntegrationService,
    SecurityService, SessionStore, SettingsNav, TeamService, WorkspaceService,
};
use mitto_core::AppError;
use mitto_domain::{ProfileSettings, Section, WorkspaceSettings};
use mitto_infrastructure::{
    ApiClient, GatewayConfig, HttpAuthGateway, HttpBillingGateway, HttpIntegrationsGateway,
    HttpProfileGateway, HttpSecurityGateway, HttpTeamGateway, HttpWorkspaceGateway,
    MemorySessionStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = GatewayConfig::from_env()?;
    let session: Arc<dyn SessionStore> = match &config.token {
        Some(token) => Arc::new(MemorySessionStore::with_token(token.clone())),
        None => Arc::new(MemorySessionStore::new()),
    };

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()
        .map_err(|error| AppError::Internal(error.to_string()))?;
    let client = Arc::new(ApiClient::new(
        http,
        config.base_url.clone(),
        Arc::clone(&session),
    ));

    let account = AccountService::new(
        Arc::new(HttpAuthGateway::new(Arc::clone(&client))),
        Arc::new(HttpProfileGateway::new(Arc::clone(&client))),
        Arc::clone(&session),
    );
    let workspace = WorkspaceService::new(Arc::new(HttpWorkspaceGateway::new(Arc::clone(&client))));
    let team = TeamService::new(Arc::new(HttpTeamGateway::new(Arc::clone(&client))));
    let billing = BillingService::new(Arc::new(HttpBillingGateway::new(Arc::clone(&client))));
    let integrations =
        IntegrationService::new(Arc::new(HttpIntegrationsGateway::new(Arc::clone(&client))));
    let security = SecurityService::new(Arc::new(HttpSecurityGateway::new(Arc::clone(&client))));
    let advanced = AdvancedService::new(Arc::new(HttpWorkspaceGateway::new(Arc::clone(&client))));

    info!(base_url = %config.base_url, "resolving settings screen");

    let current = account.load_current_user().await?;
    if current.degraded {
        info!("identity fetch degraded, showing cached or fallback user");
    }
    println!(
        "Signed in as {} <{}> ({})",
        current.user.name, current.user.email, current.user.role
    );

    let nav = SettingsNav::new(current.user.role);
    println!("Visible sections:");
    for section in nav.visible_sections() {
        println!("  - {section}");
    }

    let mut profile: FormSession<ProfileSettings> = FormSession::new();
    account.load_profile(&mut profile).await;
    if let Some(model) = profile.model() {
        println!("Profile: {} <{}>", model.display_name(), model.email);
    }

    if nav.visible_sections().contains(&Section::Workspace) {
        let mut form: FormSession<WorkspaceSettings> = FormSession::new();
        workspace.load_workspace(&mut form).await;
        if let Some(model) = form.model() {
            println!(
                "Workspace: {} ({}, {})",
                model.name, model.default_timezone, model.currency
            );
        }
    }

    if nav.visible_sections().contains(&Section::Team) {
        let roster = team.load_roster().await;
        if roster.load_failed {
            println!("Team: unavailable");
        } else {
            println!("Team: {} member(s)", roster.members.len());
        }
    }

    if nav.visible_sections().contains(&Section::Integrations) {
        let panel = integrations.load_panel().await;
        println!("Integrations:");
        for card in panel.cards() {
            let status = if card.integration.connected {
                "connected"
            } else {
                "not connected"
            };
            println!(
                "  - {}: {}",
                card.integration.provider.display_name(),
                status
            );
        }
    }

    if nav.visible_sections().contains(&Section::Billing) {
        let overview = billing.load_overview().await;
        match overview.subscription {
            Some(subscription) => println!(
                "Billing: {} ({})",
                subscription.plan_name, subscription.status
            ),
            None => println!("Billing: no subscription on file"),
        }
        println!("  {} invoice(s)", overview.invoices.len());
    }

    let overview = security.load_overview().await;
    println!(
        "Security: {} active session(s), {} API key(s)",
        overview.sessions.len(),
        overview.api_keys.len()
    );

    if nav.visible_sections().contains(&Section::Advanced) {
        let log = advanced.load_activity_log().await;
        println!("Recent activity: {} entr(y/ies)", log.len());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
