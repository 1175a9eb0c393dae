//! Thin typed client over the Mitto backend's JSON envelope.
//!
//! Every response body is an object wrapping the resource either under the
//! generic `data` key or under a key named after the resource. Anything
//! else is a decode error, never a silent empty default.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use mitto_application::SessionStore;
use mitto_core::{AppError, AppResult};

/// Extracts the resource from a response envelope.
///
/// Accepts `{ "data": ... }` or `{ "<resource_key>": ... }`. Any other
/// shape is rejected so a contract drift surfaces as [`AppError::Decode`]
/// instead of an empty screen.
pub(crate) fn unwrap_envelope(body: Value, resource_key: &str) -> AppResult<Value> {
    let Value::Object(mut object) = body else {
        return Err(AppError::Decode(format!(
            "expected a response envelope object for '{resource_key}'"
        )));
    };

    if let Some(inner) = object.remove("data") {
        return Ok(inner);
    }
    if let Some(inner) = object.remove(resource_key) {
        return Ok(inner);
    }

    Err(AppError::Decode(format!(
        "response envelope has neither 'data' nor '{resource_key}'"
    )))
}

/// Authenticated JSON client shared by all HTTP gateways.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Creates a client rooted at `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: Url, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|error| AppError::Internal(format!("invalid endpoint path '{path}': {error}")))
    }

    fn build(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header("X-Request-Id", Uuid::new_v4().to_string());
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> AppResult<Value> {
        let url = self.endpoint(path)?;
        debug!(%method, %url, "api request");

        let mut builder = self.build(method, url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|error| AppError::Network(error.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|error| AppError::Network(error.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            // The stored token is dead; drop it so the caller redirects to
            // sign-in instead of retrying forever.
            self.session.clear();
            return Err(AppError::Unauthorized(backend_message(&text).unwrap_or_else(
                || "session expired".to_owned(),
            )));
        }
        if !status.is_success() {
            let message = backend_message(&text)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return match status {
                reqwest::StatusCode::FORBIDDEN => Err(AppError::Forbidden(message)),
                reqwest::StatusCode::NOT_FOUND => Err(AppError::NotFound(message)),
                _ => Err(AppError::Api(message)),
            };
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|error| AppError::Decode(error.to_string()))
    }

    /// GET a resource from its envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, resource_key: &str) -> AppResult<T> {
        let body = self.execute(reqwest::Method::GET, path, None).await?;
        decode(unwrap_envelope(body, resource_key)?)
    }

    /// POST a body and decode a resource from the response envelope.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
        resource_key: &str,
    ) -> AppResult<T> {
        let body = self.execute(reqwest::Method::POST, path, Some(body)).await?;
        decode(unwrap_envelope(body, resource_key)?)
    }

    /// POST a body, ignoring the response payload.
    pub async fn post_unit(&self, path: &str, body: &Value) -> AppResult<()> {
        self.execute(reqwest::Method::POST, path, Some(body)).await?;
        Ok(())
    }

    /// PUT a body, ignoring the response payload.
    pub async fn put_unit(&self, path: &str, body: &Value) -> AppResult<()> {
        self.execute(reqwest::Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// DELETE, ignoring the response payload.
    pub async fn delete_unit(&self, path: &str) -> AppResult<()> {
        self.execute(reqwest::Method::DELETE, path, None).await?;
        Ok(())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|error| AppError::Decode(error.to_string()))
}

fn backend_message(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;
    object
        .get("message")
        .or_else(|| object.get("error"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use mitto_core::AppError;

    use super::{backend_message, unwrap_envelope};

    #[test]
    fn envelope_prefers_the_data_key() {
        let unwrapped = unwrap_envelope(json!({"data": {"id": "u1"}}), "user");
        assert_eq!(
            unwrapped.unwrap_or_else(|_| panic!("should unwrap")),
            json!({"id": "u1"})
        );
    }

    #[test]
    fn envelope_falls_back_to_the_resource_key() {
        let unwrapped = unwrap_envelope(json!({"user": {"id": "u1"}}), "user");
        assert_eq!(
            unwrapped.unwrap_or_else(|_| panic!("should unwrap")),
            json!({"id": "u1"})
        );
    }

    #[test]
    fn unexpected_envelope_shape_is_a_decode_error() {
        let unwrapped = unwrap_envelope(json!({"result": {"id": "u1"}}), "user");
        assert!(matches!(unwrapped, Err(AppError::Decode(_))));

        let unwrapped = unwrap_envelope(json!([1, 2, 3]), "user");
        assert!(matches!(unwrapped, Err(AppError::Decode(_))));
    }

    #[test]
    fn backend_message_reads_message_then_error() {
        assert_eq!(
            backend_message(r#"{"message":"plan limit reached"}"#),
            Some("plan limit reached".to_owned())
        );
        assert_eq!(
            backend_message(r#"{"error":"bad request"}"#),
            Some("bad request".to_owned())
        );
        assert_eq!(backend_message("not json"), None);
    }
}
