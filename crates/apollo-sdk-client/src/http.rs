//! HTTP client for the Apollo Portal OpenAPI
//!
//! This module turns a (method, path, body) tuple into an authenticated
//! request against the portal and normalizes the response: 2xx returns the
//! body text unchanged, everything else becomes an [`ApolloError`].

use std::time::Duration;

use reqwest::{Client, Method, Response};
use tracing::{debug, error, warn};

use crate::error::ApolloError;

/// Configuration for the portal HTTP client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the Apollo portal (e.g. "http://apollo-portal.example.com")
    pub portal_url: String,
    /// OpenAPI access token; blank means no Authorization header is sent
    pub token: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            portal_url: "http://127.0.0.1:8070".to_string(),
            token: String::new(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Create a new config for the given portal URL
    pub fn new(portal_url: &str) -> Self {
        Self {
            portal_url: portal_url.to_string(),
            ..Default::default()
        }
    }

    /// Set the OpenAPI access token
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}

/// Join base URL and path with exactly one separating slash.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Build the Authorization header value for a configured token.
///
/// A token that already carries the "Bearer " scheme prefix (any case) is
/// used unmodified; otherwise the prefix is prepended. Blank token means no
/// header at all.
fn bearer_value(token: &str) -> Option<String> {
    if token.trim().is_empty() {
        return None;
    }
    let prefix = b"bearer ";
    let has_prefix = token
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
    if has_prefix {
        Some(token.to_string())
    } else {
        Some(format!("Bearer {token}"))
    }
}

/// Stateless HTTP client for the portal; one instance is shared by all calls
pub struct ApolloHttpClient {
    client: Client,
    config: ClientConfig,
}

impl ApolloHttpClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ApolloError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a GET request and return the raw body text
    pub async fn get(&self, path: &str) -> Result<String, ApolloError> {
        self.execute(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body and return the raw body text
    pub async fn post(&self, path: &str, json_body: &str) -> Result<String, ApolloError> {
        self.execute(Method::POST, path, Some(json_body.to_string()))
            .await
    }

    /// Make a PUT request with a JSON body and return the raw body text
    pub async fn put(&self, path: &str, json_body: &str) -> Result<String, ApolloError> {
        self.execute(Method::PUT, path, Some(json_body.to_string()))
            .await
    }

    /// Make a DELETE request and return the raw body text
    pub async fn delete(&self, path: &str) -> Result<String, ApolloError> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApolloError> {
        let url = join_url(&self.config.portal_url, path);
        debug!(%method, %url, "sending portal request");

        let mut request = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        if let Some(auth) = bearer_value(&self.config.token) {
            request = request.header("Authorization", auth);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        match request.send().await {
            Ok(response) => Self::unwrap_response(response).await,
            Err(e) => {
                warn!("portal request failed: {}", e);
                Err(e.into())
            }
        }
    }

    /// Map the response status: 2xx returns the body unchanged, anything
    /// else carries the exact status code and body.
    async fn unwrap_response(response: Response) -> Result<String, ApolloError> {
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "portal returned error status");
            Err(ApolloError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.portal_url, "http://127.0.0.1:8070");
        assert!(config.token.is_empty());
        assert_eq!(config.connect_timeout_ms, 5000);
        assert_eq!(config.read_timeout_ms, 30000);
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("http://apollo-portal:8070")
            .with_token("abc123")
            .with_timeouts(3000, 15000);

        assert_eq!(config.portal_url, "http://apollo-portal:8070");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.connect_timeout_ms, 3000);
        assert_eq!(config.read_timeout_ms, 15000);
    }

    #[test]
    fn test_join_url_single_slash() {
        assert_eq!(
            join_url("http://portal:8070", "/openapi/v1/apps"),
            "http://portal:8070/openapi/v1/apps"
        );
        assert_eq!(
            join_url("http://portal:8070/", "/openapi/v1/apps"),
            "http://portal:8070/openapi/v1/apps"
        );
        assert_eq!(
            join_url("http://portal:8070/", "openapi/v1/apps"),
            "http://portal:8070/openapi/v1/apps"
        );
        assert_eq!(
            join_url("http://portal:8070", "openapi/v1/apps"),
            "http://portal:8070/openapi/v1/apps"
        );
    }

    #[test]
    fn test_bearer_value_prepends_prefix() {
        assert_eq!(bearer_value("abc123"), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_bearer_value_keeps_existing_prefix() {
        assert_eq!(
            bearer_value("Bearer abc123"),
            Some("Bearer abc123".to_string())
        );
        // Prefix detection is case-insensitive; the token is used unmodified.
        assert_eq!(
            bearer_value("bearer abc123"),
            Some("bearer abc123".to_string())
        );
    }

    #[test]
    fn test_bearer_value_multibyte_token() {
        // The prefix check works on bytes; a multi-byte character straddling
        // the prefix length must not panic.
        assert_eq!(
            bearer_value("abcdefé"),
            Some("Bearer abcdefé".to_string())
        );
        assert_eq!(bearer_value("é"), Some("Bearer é".to_string()));
    }

    #[test]
    fn test_bearer_value_blank_token() {
        assert_eq!(bearer_value(""), None);
        assert_eq!(bearer_value("   "), None);
    }
}
