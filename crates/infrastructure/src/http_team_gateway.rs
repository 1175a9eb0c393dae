//! Backend adapter for the team roster and invitations.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use mitto_application::TeamGateway;
use mitto_core::{AppResult, EmailAddress};
use mitto_domain::{MemberStatus, Role, TeamMember};

use crate::api_client::ApiClient;

/// Wire shape of a roster row. Role strings are coerced the same way the
/// signed-in user's role is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberDto {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    role: String,
    status: MemberStatus,
    #[serde(default)]
    last_active: Option<String>,
}

impl TeamMemberDto {
    fn into_member(self) -> TeamMember {
        TeamMember {
            id: self.id,
            name: self.name,
            email: self.email,
            role: Role::parse_lossy(&self.role),
            status: self.status,
            last_active: self.last_active,
        }
    }
}

/// HTTP implementation of [`TeamGateway`].
pub struct HttpTeamGateway {
    client: Arc<ApiClient>,
}

impl HttpTeamGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeamGateway for HttpTeamGateway {
    async fn members(&self) -> AppResult<Vec<TeamMember>> {
        let rows: Vec<TeamMemberDto> = self.client.get("/team/members", "members").await?;
        Ok(rows.into_iter().map(TeamMemberDto::into_member).collect())
    }

    async fn invite(&self, email: &EmailAddress, role: Role) -> AppResult<()> {
        self.client
            .post_unit(
                "/team/invitations",
                &json!({
                    "email": email.as_str(),
                    "role": role.as_str(),
                }),
            )
            .await
    }

    async fn update_member_role(&self, member_id: &str, role: Role) -> AppResult<()> {
        self.client
            .put_unit(
                &format!("/team/members/{member_id}/role"),
                &json!({ "role": role.as_str() }),
            )
            .await
    }

    async fn remove_member(&self, member_id: &str) -> AppResult<()> {
        self.client
            .delete_unit(&format!("/team/members/{member_id}"))
            .await
    }

    async fn resend_invite(&self, member_id: &str) -> AppResult<()> {
        self.client
            .post_unit(&format!("/team/invitations/{member_id}/resend"), &json!({}))
            .await
    }

    async fn cancel_invite(&self, member_id: &str) -> AppResult<()> {
        self.client
            .delete_unit(&format!("/team/invitations/{member_id}"))
            .await
    }
}
