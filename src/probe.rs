//! Connectivity probe
//!
//! One round-trip against the configured cluster. The client is owned by
//! the probe call and dropped on every exit path, success or failure.

use crate::client::{CamundaClient, Topology};
use crate::config::Credentials;
use crate::error::{Error, Result};
use tracing::debug;

/// Build a client for the configured cluster and perform a single
/// topology round-trip.
///
/// A response with zero brokers is a failure in its own right: transport
/// and credentials worked, but the cluster is not serving. That case is
/// kept distinct from transport errors via [`Error::EmptyTopology`].
pub async fn probe(credentials: &Credentials) -> Result<Topology> {
    let mut builder = CamundaClient::builder()
        .cluster_id(&credentials.cluster_id)
        .client_id(&credentials.client_id)
        .client_secret(&credentials.client_secret)
        .region(&credentials.cluster_region);
    if let Some(oauth_url) = &credentials.oauth_url {
        builder = builder.oauth_url(oauth_url);
    }
    if let Some(rest_address) = &credentials.rest_address {
        builder = builder.rest_address(rest_address);
    }
    let client = builder.build()?;

    debug!(base = %client.rest_base(), "probing cluster");
    let topology = client.topology().await?;

    if topology.brokers.is_empty() {
        return Err(Error::EmptyTopology);
    }
    Ok(topology)
}
