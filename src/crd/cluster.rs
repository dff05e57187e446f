//! Cluster Custom Resource Definition.
//!
//! Defines the Cluster CRD describing a Redpanda deployment: listeners,
//! TLS, memory limits and tiered (cloud) storage. The admission policies in
//! [`crate::webhooks::policies`] validate instances of this type.

use k8s_openapi::api::core::v1::{ObjectReference, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cluster is a custom resource for deploying Redpanda clusters.
///
/// Example:
/// ```yaml
/// apiVersion: redpanda.vectorized.io/v1alpha1
/// kind: Cluster
/// metadata:
///   name: one-node
/// spec:
///   replicas: 1
///   configuration:
///     kafkaApi:
///       - port: 9092
///     adminApi:
///       port: 9644
///     rpcServer:
///       port: 33145
///   resources:
///     limits:
///       memory: 2Gi
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "redpanda.vectorized.io",
    version = "v1alpha1",
    kind = "Cluster",
    plural = "clusters",
    shortname = "rp",
    status = "ClusterStatus",
    namespaced,
    printcolumn = r#"{"name":"Replicas", "type":"integer", "jsonPath":".spec.replicas"}"#,
    printcolumn = r#"{"name":"Ready", "type":"integer", "jsonPath":".status.readyReplicas"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Container image repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Redpanda version, used as the image tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Number of Redpanda nodes. Unset means "leave as is".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Resource requests and limits for Redpanda pods.
    #[serde(default)]
    pub resources: ResourceRequirements,

    /// Redpanda process configuration.
    #[serde(default)]
    pub configuration: RedpandaConfig,

    /// External connectivity (NodePort) configuration.
    #[serde(default)]
    pub external_connectivity: ExternalConnectivityConfig,

    /// Tiered storage configuration.
    #[serde(default)]
    pub cloud_storage: CloudStorageConfig,
}

/// Redpanda process configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedpandaConfig {
    /// Internal RPC listener.
    #[serde(default)]
    pub rpc_server: SocketAddress,

    /// Kafka API listeners: one internal and at most one external.
    #[serde(default)]
    pub kafka_api: Vec<KafkaApi>,

    /// Admin API listener.
    #[serde(default)]
    pub admin_api: SocketAddress,

    /// Relax production checks (memory floor) for local development.
    #[serde(default)]
    pub developer_mode: bool,

    /// TLS configuration for the Kafka API.
    #[serde(default)]
    pub tls: TlsConfig,
}

/// A listener port.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocketAddress {
    #[serde(default)]
    pub port: i32,
}

/// A Kafka API listener.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaApi {
    /// Listener port. Must be left unset on the external listener; its
    /// port is assigned by the node port allocation.
    #[serde(default)]
    pub port: i32,

    /// External exposure of this listener.
    #[serde(default)]
    pub external: ExternalConnectivityConfig,
}

impl KafkaApi {
    /// Whether this is the externally exposed listener.
    pub fn is_external(&self) -> bool {
        self.external.enabled
    }
}

/// External connectivity toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalConnectivityConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Subdomain used to advertise external addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
}

/// TLS configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    #[serde(default)]
    pub kafka_api: KafkaApiTls,
}

/// TLS settings of the Kafka API.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaApiTls {
    /// Serve the Kafka API over TLS.
    #[serde(default)]
    pub enabled: bool,

    /// Require mutual TLS. Only valid together with `enabled`.
    #[serde(default)]
    pub require_client_auth: bool,

    /// cert-manager issuer signing the node certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_ref: Option<IssuerRef>,

    /// Secret holding a pre-provisioned node certificate.
    /// Mutually exclusive with `issuerRef`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_secret_ref: Option<ObjectReference>,
}

/// Reference to a cert-manager Issuer or ClusterIssuer.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuerRef {
    /// Name of the Issuer or ClusterIssuer.
    pub name: String,

    /// Kind of the issuer (Issuer or ClusterIssuer, default: Issuer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Group of the issuer (default: cert-manager.io).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Tiered storage in an S3 compatible bucket.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudStorageConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub access_key: String,

    /// Reference to the Secret holding the secret key.
    #[serde(default)]
    pub secret_key_ref: ObjectReference,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub bucket: String,
}

/// Status of a Cluster.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Number of nodes the StatefulSet currently runs.
    #[serde(default)]
    pub replicas: i32,

    /// Number of ready nodes.
    #[serde(default)]
    pub ready_replicas: i32,
}

impl Cluster {
    /// The externally exposed Kafka listener, if any.
    pub fn external_listener(&self) -> Option<&KafkaApi> {
        self.spec
            .configuration
            .kafka_api
            .iter()
            .find(|l| l.is_external())
    }

    /// The first internal Kafka listener, if any.
    pub fn internal_listener(&self) -> Option<&KafkaApi> {
        self.spec
            .configuration
            .kafka_api
            .iter()
            .find(|l| !l.is_external())
    }

    /// The container memory limit, if set.
    pub fn memory_limit(&self) -> Option<&Quantity> {
        self.spec
            .resources
            .limits
            .as_ref()
            .and_then(|limits| limits.get("memory"))
    }
}
