//! Test fixtures and builder patterns for Cluster.

#![allow(dead_code)]

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ObjectReference, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use redpanda_operator::crd::{
    CloudStorageConfig, Cluster, ClusterSpec, ExternalConnectivityConfig, IssuerRef, KafkaApi,
};

/// Builder for creating Cluster test fixtures.
///
/// The defaults describe a cluster every policy admits: one internal Kafka
/// listener on 9092, admin API on 9644, RPC on 33145 and 2Gi of memory.
///
/// # Example
/// ```
/// let cluster = ClusterBuilder::new("test-cluster")
///     .namespace("test-ns")
///     .replicas(3)
///     .external_listener()
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ClusterBuilder {
    name: String,
    namespace: Option<String>,
    replicas: Option<i32>,
    kafka_api: Vec<KafkaApi>,
    admin_port: i32,
    rpc_port: i32,
    external_connectivity: bool,
    memory: Option<String>,
    developer_mode: bool,
    tls_enabled: bool,
    require_client_auth: bool,
    issuer_ref: Option<IssuerRef>,
    node_secret_ref: Option<ObjectReference>,
    cloud_storage: CloudStorageConfig,
}

impl ClusterBuilder {
    /// Create a new builder with the given cluster name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some("default".to_string()),
            replicas: Some(1),
            kafka_api: vec![KafkaApi {
                port: 9092,
                ..Default::default()
            }],
            admin_port: 9644,
            rpc_port: 33145,
            external_connectivity: false,
            memory: Some("2Gi".to_string()),
            developer_mode: false,
            tls_enabled: false,
            require_client_auth: false,
            issuer_ref: None,
            node_secret_ref: None,
            cloud_storage: CloudStorageConfig::default(),
        }
    }

    /// Set the namespace for the cluster.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the number of replicas.
    pub fn replicas(mut self, replicas: i32) -> Self {
        self.replicas = Some(replicas);
        self
    }

    /// Leave the number of replicas unset.
    pub fn no_replicas(mut self) -> Self {
        self.replicas = None;
        self
    }

    /// Replace the internal listener port.
    pub fn kafka_port(mut self, port: i32) -> Self {
        self.kafka_api = vec![KafkaApi {
            port,
            ..Default::default()
        }];
        self
    }

    /// Replace all Kafka listeners.
    pub fn kafka_listeners(mut self, listeners: Vec<KafkaApi>) -> Self {
        self.kafka_api = listeners;
        self
    }

    /// Add an external Kafka listener and enable external connectivity.
    pub fn external_listener(mut self) -> Self {
        self.kafka_api.push(external_kafka_listener());
        self.external_connectivity = true;
        self
    }

    /// Toggle external connectivity without touching the listeners.
    pub fn external_connectivity(mut self, enabled: bool) -> Self {
        self.external_connectivity = enabled;
        self
    }

    /// Set the admin API port.
    pub fn admin_port(mut self, port: i32) -> Self {
        self.admin_port = port;
        self
    }

    /// Set the RPC server port.
    pub fn rpc_port(mut self, port: i32) -> Self {
        self.rpc_port = port;
        self
    }

    /// Set the memory limit quantity.
    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = Some(memory.into());
        self
    }

    /// Remove the memory limit.
    pub fn no_memory(mut self) -> Self {
        self.memory = None;
        self
    }

    /// Enable developer mode.
    pub fn developer_mode(mut self) -> Self {
        self.developer_mode = true;
        self
    }

    /// Configure Kafka API TLS.
    pub fn tls(mut self, enabled: bool, require_client_auth: bool) -> Self {
        self.tls_enabled = enabled;
        self.require_client_auth = require_client_auth;
        self
    }

    /// Sign the node certificate with a cert-manager issuer.
    pub fn issuer(mut self, name: impl Into<String>) -> Self {
        self.issuer_ref = Some(IssuerRef {
            name: name.into(),
            ..Default::default()
        });
        self
    }

    /// Use a pre-provisioned node certificate secret.
    pub fn node_secret(mut self, name: impl Into<String>) -> Self {
        self.node_secret_ref = Some(ObjectReference {
            name: Some(name.into()),
            ..Default::default()
        });
        self
    }

    /// Set the cloud storage configuration.
    pub fn cloud_storage(mut self, cloud_storage: CloudStorageConfig) -> Self {
        self.cloud_storage = cloud_storage;
        self
    }

    /// Build the Cluster.
    pub fn build(self) -> Cluster {
        let mut spec = ClusterSpec {
            replicas: self.replicas,
            resources: ResourceRequirements {
                limits: self
                    .memory
                    .map(|m| BTreeMap::from([("memory".to_string(), Quantity(m))])),
                ..Default::default()
            },
            external_connectivity: ExternalConnectivityConfig {
                enabled: self.external_connectivity,
                subdomain: None,
            },
            cloud_storage: self.cloud_storage,
            ..Default::default()
        };
        let config = &mut spec.configuration;
        config.kafka_api = self.kafka_api;
        config.admin_api.port = self.admin_port;
        config.rpc_server.port = self.rpc_port;
        config.developer_mode = self.developer_mode;
        config.tls.kafka_api.enabled = self.tls_enabled;
        config.tls.kafka_api.require_client_auth = self.require_client_auth;
        config.tls.kafka_api.issuer_ref = self.issuer_ref;
        config.tls.kafka_api.node_secret_ref = self.node_secret_ref;

        Cluster {
            metadata: ObjectMeta {
                name: Some(self.name),
                namespace: self.namespace,
                ..Default::default()
            },
            spec,
            status: None,
        }
    }
}

impl Default for ClusterBuilder {
    fn default() -> Self {
        Self::new("test-cluster")
    }
}

/// An external Kafka listener, declared without a port.
pub fn external_kafka_listener() -> KafkaApi {
    KafkaApi {
        port: 0,
        external: ExternalConnectivityConfig {
            enabled: true,
            subdomain: None,
        },
    }
}

/// An internal Kafka listener on `port`.
pub fn internal_kafka_listener(port: i32) -> KafkaApi {
    KafkaApi {
        port,
        ..Default::default()
    }
}

/// Cloud storage with every required field filled in.
pub fn complete_cloud_storage() -> CloudStorageConfig {
    CloudStorageConfig {
        enabled: true,
        access_key: "AKIA0000".to_string(),
        secret_key_ref: ObjectReference {
            name: Some("s3-secret".to_string()),
            namespace: Some("default".to_string()),
            ..Default::default()
        },
        region: "us-east-1".to_string(),
        bucket: "redpanda-archive".to_string(),
    }
}

/// Create a Cluster every policy admits.
pub fn valid_cluster(name: &str) -> Cluster {
    ClusterBuilder::new(name).build()
}
