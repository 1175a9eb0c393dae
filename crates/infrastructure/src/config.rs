//! Environment-driven gateway configuration.

use url::Url;

use mitto_core::{AppError, AppResult};

/// Environment variable naming the backend base URL.
pub const API_BASE_URL_ENV: &str = "MITTO_API_BASE_URL";

/// Environment variable carrying an initial bearer token.
pub const API_TOKEN_ENV: &str = "MITTO_API_TOKEN";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/";

/// Configuration for the HTTP gateways.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL; endpoint paths are joined onto it.
    pub base_url: Url,
    /// Bearer token to seed the session store with, if already signed in.
    pub token: Option<String>,
}

impl GatewayConfig {
    /// Reads configuration from the environment, defaulting the base URL
    /// to the local development backend.
    pub fn from_env() -> AppResult<Self> {
        let raw_base = std::env::var(API_BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        // A base URL without a trailing slash would drop its last path
        // segment when endpoints are joined onto it.
        let normalized = if raw_base.ends_with('/') {
            raw_base
        } else {
            format!("{raw_base}/")
        };
        let base_url = Url::parse(&normalized).map_err(|error| {
            AppError::Validation(format!("{API_BASE_URL_ENV} is not a valid URL: {error}"))
        })?;

        let token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(Self { base_url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::GatewayConfig;

    #[test]
    fn default_base_url_parses_and_joins() {
        let config = GatewayConfig {
            base_url: url::Url::parse("http://localhost:5000/api/")
                .unwrap_or_else(|_| panic!("default url should parse")),
            token: None,
        };
        let joined = config
            .base_url
            .join("auth/me")
            .unwrap_or_else(|_| panic!("join should succeed"));
        assert_eq!(joined.as_str(), "http://localhost:5000/api/auth/me");
    }
}
