//! Tests for the client module

use super::*;
use crate::error::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-abc",
            "token_type": "Bearer",
            "expires_in": 300
        })))
        .mount(server)
        .await;
}

fn client_for(server: &MockServer) -> CamundaClient {
    CamundaClient::builder()
        .cluster_id("357ba225-cluster")
        .client_id("client-abcdef12")
        .client_secret("hunter2hunter2")
        .region("bru-2")
        .oauth_url(format!("{}/oauth/token", server.uri()))
        .rest_address(format!("{}/357ba225-cluster", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_topology_round_trip() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/357ba225-cluster/v2/topology"))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "brokers": [
                {
                    "nodeId": 0,
                    "host": "zeebe-0",
                    "port": 26501,
                    "partitions": [],
                    "version": "8.6.0"
                }
            ],
            "clusterSize": 1,
            "partitionsCount": 1,
            "replicationFactor": 1,
            "gatewayVersion": "8.6.0"
        })))
        .mount(&server)
        .await;

    let topology = client_for(&server).topology().await.unwrap();
    assert_eq!(topology.brokers.len(), 1);
    assert_eq!(topology.brokers[0].address(), "zeebe-0:26501");
}

#[tokio::test]
async fn test_unauthorized_topology_is_an_auth_error() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/357ba225-cluster/v2/topology"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let err = client_for(&server).topology().await.unwrap_err();
    match err {
        Error::Auth { message } => assert!(message.contains("401")),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server).await;

    Mock::given(method("GET"))
        .and(path("/357ba225-cluster/v2/topology"))
        .respond_with(ResponseTemplate::new(503).set_body_string("gateway unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).topology().await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "gateway unavailable");
        }
        other => panic!("expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_builder_requires_all_coordinates() {
    let err = CamundaClient::builder()
        .cluster_id("357ba225-cluster")
        .client_secret("hunter2hunter2")
        .region("bru-2")
        .build()
        .unwrap_err();
    match err {
        Error::Config { message } => assert_eq!(message, "client id is required"),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_builder_rejects_empty_coordinates() {
    let err = CamundaClient::builder()
        .cluster_id("")
        .client_id("client-abcdef12")
        .client_secret("hunter2hunter2")
        .region("bru-2")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_builder_rejects_malformed_region() {
    let err = CamundaClient::builder()
        .cluster_id("357ba225-cluster")
        .client_id("client-abcdef12")
        .client_secret("hunter2hunter2")
        .region("not a region")
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_default_addresses_derive_from_region_and_cluster() {
    let client = CamundaClient::builder()
        .cluster_id("357ba225-cluster")
        .client_id("client-abcdef12")
        .client_secret("hunter2hunter2")
        .region("bru-2")
        .build()
        .unwrap();
    assert_eq!(client.rest_base().host_str(), Some("bru-2.zeebe.camunda.io"));
    assert_eq!(client.rest_base().path(), "/357ba225-cluster");
}
