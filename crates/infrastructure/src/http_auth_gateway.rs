//! Backend adapter for session identity.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use mitto_application::AuthGateway;
use mitto_core::AppResult;
use mitto_domain::{Role, User};

use crate::api_client::ApiClient;

/// Wire shape of a user record.
///
/// The role arrives as a free-form string and is coerced at this boundary:
/// anything the catalog does not know lands in the least-privileged tier.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    role: String,
}

impl UserDto {
    pub(crate) fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
            role: Role::parse_lossy(&self.role),
        }
    }
}

/// HTTP implementation of [`AuthGateway`].
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    /// Creates the gateway over a shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn current_user(&self) -> AppResult<User> {
        let dto: UserDto = self.client.get("/auth/me", "user").await?;
        Ok(dto.into_user())
    }

    async fn logout(&self) -> AppResult<()> {
        self.client.post_unit("/auth/logout", &json!({})).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use mitto_domain::Role;

    use super::UserDto;

    #[test]
    fn unknown_role_string_is_coerced_to_member() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "usr_01",
            "name": "Haider",
            "email": "haider@mitto.example",
            "role": "superadmin"
        }))
        .unwrap_or_else(|_| panic!("dto should decode"));

        assert_eq!(dto.into_user().role, Role::Member);
    }

    #[test]
    fn missing_role_is_coerced_to_member() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "usr_01",
            "name": "Haider",
            "email": "haider@mitto.example"
        }))
        .unwrap_or_else(|_| panic!("dto should decode"));

        assert_eq!(dto.into_user().role, Role::Member);
    }
}
