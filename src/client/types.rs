//! Topology response types
//!
//! Mirrors the Zeebe REST API v2 topology payload. The diagnostic only
//! branches on the broker list; the remaining fields feed success
//! logging.

use serde::{Deserialize, Serialize};

/// Cluster topology as reported by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    /// Currently visible brokers
    #[serde(default)]
    pub brokers: Vec<BrokerInfo>,

    /// Configured cluster size
    #[serde(default)]
    pub cluster_size: Option<u32>,

    /// Number of partitions in the cluster
    #[serde(default)]
    pub partitions_count: Option<u32>,

    /// Configured replication factor
    #[serde(default)]
    pub replication_factor: Option<u32>,

    /// Version of the gateway that answered
    #[serde(default)]
    pub gateway_version: Option<String>,
}

/// One broker node in the topology
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerInfo {
    /// Node id within the cluster
    pub node_id: i32,

    /// Broker host name
    pub host: String,

    /// Broker command port
    pub port: u16,

    /// Partitions this broker participates in
    #[serde(default)]
    pub partitions: Vec<PartitionInfo>,

    /// Broker software version
    #[serde(default)]
    pub version: Option<String>,
}

/// Partition membership of a broker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionInfo {
    /// Partition id
    pub partition_id: i32,

    /// Raft role for this partition (leader/follower)
    #[serde(default)]
    pub role: Option<String>,

    /// Partition health as seen by the broker
    #[serde(default)]
    pub health: Option<String>,
}

impl BrokerInfo {
    /// Address in host:port form, for logging
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_gateway_payload() {
        let payload = r#"{
            "brokers": [
                {
                    "nodeId": 0,
                    "host": "zeebe-0.zeebe-broker-service",
                    "port": 26501,
                    "partitions": [
                        { "partitionId": 1, "role": "leader", "health": "healthy" }
                    ],
                    "version": "8.6.0"
                }
            ],
            "clusterSize": 3,
            "partitionsCount": 3,
            "replicationFactor": 3,
            "gatewayVersion": "8.6.0"
        }"#;

        let topology: Topology = serde_json::from_str(payload).unwrap();
        assert_eq!(topology.brokers.len(), 1);
        assert_eq!(topology.brokers[0].node_id, 0);
        assert_eq!(
            topology.brokers[0].address(),
            "zeebe-0.zeebe-broker-service:26501"
        );
        assert_eq!(topology.brokers[0].partitions[0].role.as_deref(), Some("leader"));
        assert_eq!(topology.cluster_size, Some(3));
        assert_eq!(topology.gateway_version.as_deref(), Some("8.6.0"));
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let topology: Topology = serde_json::from_str("{}").unwrap();
        assert!(topology.brokers.is_empty());
        assert_eq!(topology.cluster_size, None);
    }
}
