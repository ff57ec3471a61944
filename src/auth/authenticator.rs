//! Authenticator implementation
//!
//! Fetches OAuth2 client-credentials tokens from the Camunda login
//! service and caches them for the lifetime of the client.

use super::types::CachedToken;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

/// Default token endpoint for Camunda 8 SaaS
pub const DEFAULT_OAUTH_URL: &str = "https://login.cloud.camunda.io/oauth/token";

/// Token audience for the Zeebe API
pub const ZEEBE_AUDIENCE: &str = "zeebe.camunda.io";

/// Fetches and caches bearer tokens for one set of client credentials
#[derive(Debug)]
pub struct Authenticator {
    token_url: String,
    client_id: String,
    client_secret: String,
    audience: String,
    /// HTTP client for token requests
    http_client: Client,
    /// Cached token, refreshed when expired
    cached_token: RwLock<Option<CachedToken>>,
}

impl Authenticator {
    /// Create a new authenticator
    pub fn new(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self::with_client(token_url, client_id, client_secret, audience, Client::new())
    }

    /// Create an authenticator with a custom HTTP client
    pub fn with_client(
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        audience: impl Into<String>,
        http_client: Client,
    ) -> Self {
        Self {
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            audience: audience.into(),
            http_client,
            cached_token: RwLock::new(None),
        }
    }

    /// Get a valid access token, fetching a new one if necessary
    pub async fn access_token(&self) -> Result<String> {
        // Check if we have a valid cached token
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        // Need to refresh - acquire write lock
        let mut cached = self.cached_token.write().await;

        // Double-check after acquiring write lock (another task might have refreshed)
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_token().await?;
        let token = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token)
    }

    /// Fetch a token using the client-credentials flow
    async fn fetch_token(&self) -> Result<CachedToken> {
        debug!(url = %self.token_url, audience = %self.audience, "requesting access token");

        let form = [
            ("grant_type", "client_credentials"),
            ("audience", self.audience.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::oauth2(format!(
                "Token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(Error::Http)?;
        Ok(token_response.into_cached_token())
    }

    /// Clear the cached token (useful for testing or forced refresh)
    pub async fn clear_cache(&self) {
        let mut cached = self.cached_token.write().await;
        *cached = None;
    }
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: Option<String>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}
