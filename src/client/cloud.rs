//! SaaS client and builder
//!
//! The builder carries the connection coordinates the way the vendor
//! SDKs do (cluster id, client id, client secret, region), derives the
//! production endpoints from them, and validates everything before the
//! first request.

use super::types::Topology;
use crate::auth::{Authenticator, DEFAULT_OAUTH_URL, ZEEBE_AUDIENCE};
use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default request timeout for SaaS round-trips
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for [`CamundaClient`]
#[derive(Debug, Default)]
pub struct CamundaClientBuilder {
    cluster_id: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    region: Option<String>,
    oauth_url: Option<String>,
    rest_address: Option<String>,
}

impl CamundaClientBuilder {
    /// Set the cluster id
    pub fn cluster_id(mut self, value: impl Into<String>) -> Self {
        self.cluster_id = Some(value.into());
        self
    }

    /// Set the OAuth client id
    pub fn client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }

    /// Set the OAuth client secret
    pub fn client_secret(mut self, value: impl Into<String>) -> Self {
        self.client_secret = Some(value.into());
        self
    }

    /// Set the cluster region
    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    /// Override the OAuth token endpoint (defaults to the SaaS login service)
    pub fn oauth_url(mut self, value: impl Into<String>) -> Self {
        self.oauth_url = Some(value.into());
        self
    }

    /// Override the Zeebe REST base address (defaults to the address
    /// derived from cluster id and region)
    pub fn rest_address(mut self, value: impl Into<String>) -> Self {
        self.rest_address = Some(value.into());
        self
    }

    /// Build the client.
    ///
    /// Validates that all four coordinates are present and that the REST
    /// base address parses as a URL, so a malformed region surfaces here
    /// before any request is made.
    pub fn build(self) -> Result<CamundaClient> {
        let cluster_id = require(self.cluster_id, "cluster id")?;
        let client_id = require(self.client_id, "client id")?;
        let client_secret = require(self.client_secret, "client secret")?;
        let region = require(self.region, "cluster region")?;

        let rest_base = match self.rest_address {
            Some(address) => address,
            None => format!("https://{region}.zeebe.camunda.io:443/{cluster_id}"),
        };
        let rest_base = Url::parse(&rest_base)?;

        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("camunda-conncheck/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Http)?;

        let oauth_url = self
            .oauth_url
            .unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string());
        let authenticator = Authenticator::with_client(
            oauth_url,
            client_id,
            client_secret,
            ZEEBE_AUDIENCE,
            http_client.clone(),
        );

        Ok(CamundaClient {
            http_client,
            rest_base,
            authenticator,
        })
    }
}

fn require(value: Option<String>, what: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config(format!("{what} is required")))
}

/// Client for a single Camunda 8 SaaS cluster
///
/// Owns its connection pool; dropping the client releases it. Built per
/// probe and scoped to the probe call.
#[derive(Debug)]
pub struct CamundaClient {
    http_client: Client,
    rest_base: Url,
    authenticator: Authenticator,
}

impl CamundaClient {
    /// Create a builder
    pub fn builder() -> CamundaClientBuilder {
        CamundaClientBuilder::default()
    }

    /// The REST base address this client talks to
    pub fn rest_base(&self) -> &Url {
        &self.rest_base
    }

    /// Query the cluster topology once.
    ///
    /// 401 and 403 map to an authentication error; any other non-success
    /// status carries status and body. Transport failures propagate with
    /// their full source chain intact so callers see the real cause.
    pub async fn topology(&self) -> Result<Topology> {
        let token = self.authenticator.access_token().await?;

        let url = format!(
            "{}/v2/topology",
            self.rest_base.as_str().trim_end_matches('/')
        );
        debug!(%url, "requesting topology");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::auth(format!(
                "topology request rejected with status {status}: {body}"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        response.json::<Topology>().await.map_err(Error::Http)
    }
}
