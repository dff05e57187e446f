//! Port collision policy.
//!
//! Listeners exposed outside the cluster get their node port at
//! `<internal port> + 1`. That port never appears in the Cluster resource,
//! so collisions with it are checked here explicitly: the external Kafka
//! listener occupies `kafka port + 1` and, with external connectivity
//! enabled, the admin API occupies `admin port + 1`.

use super::ValidationContext;
use crate::webhooks::{FieldPath, Violation, ViolationKind};

/// Port the external counterpart of a listener on `port` binds to.
pub fn implied_external_port(port: i32) -> i64 {
    i64::from(port) + 1
}

fn configuration_path(listener: &str) -> FieldPath {
    FieldPath::new("spec")
        .child("configuration")
        .child(listener)
        .child("port")
}

/// Validate that no two listeners share a port
pub fn validate(ctx: &ValidationContext<'_>) -> Vec<Violation> {
    let spec = &ctx.resource.spec;
    let listeners = &spec.configuration.kafka_api;
    let admin = spec.configuration.admin_api.port;
    let rpc = spec.configuration.rpc_server.port;
    let external_connectivity = spec.external_connectivity.enabled;
    let has_external_listener = ctx.resource.external_listener().is_some();

    let admin_collision = |message: &str| {
        Violation::new(
            ViolationKind::PortCollision,
            configuration_path("admin"),
            &admin,
            message,
        )
    };
    let rpc_collision = |message: &str| {
        Violation::new(
            ViolationKind::PortCollision,
            configuration_path("rpcServer"),
            &rpc,
            message,
        )
    };

    let mut violations = Vec::new();

    for kafka in listeners {
        if admin == kafka.port {
            violations.push(admin_collision(
                "admin port collides with Spec.Configuration.KafkaAPI port",
            ));
        }
        if external_connectivity && implied_external_port(admin) == i64::from(kafka.port) {
            violations.push(admin_collision(
                "external admin port collides with Spec.Configuration.KafkaAPI port",
            ));
        }
    }

    for kafka in listeners {
        if rpc == kafka.port {
            violations.push(rpc_collision(
                "rpc port collides with Spec.Configuration.KafkaAPI port",
            ));
        }
    }

    if admin == rpc {
        violations.push(admin_collision(
            "admin port collides with Spec.Configuration.RPCServer port",
        ));
    }

    if has_external_listener {
        for kafka in listeners {
            if implied_external_port(kafka.port) == i64::from(rpc) {
                violations.push(rpc_collision(
                    "rpc port collides with external Kafka API that is not visible in the Cluster",
                ));
            }
        }

        for kafka in listeners {
            if implied_external_port(kafka.port) == i64::from(admin) {
                violations.push(admin_collision(
                    "admin port collides with external Kafka API that is not visible in the Cluster",
                ));
            }
        }
    }

    if external_connectivity && implied_external_port(admin) == i64::from(rpc) {
        violations.push(rpc_collision(
            "rpc port collides with external Admin API port that is not visible in the Cluster",
        ));
    }

    if has_external_listener && external_connectivity {
        for kafka in listeners {
            if implied_external_port(admin) == implied_external_port(kafka.port) {
                violations.push(Violation::new(
                    ViolationKind::PortCollision,
                    configuration_path("kafka"),
                    &kafka.port,
                    "kafka port collides with external Admin API port that is not visible in the Cluster",
                ));
            }
        }
    }

    violations
}
