//! TLS consistency policy.
//!
//! Validates:
//! - Client authentication is only requested when TLS is enabled
//! - The node certificate comes from an issuer or a secret, not both

use super::ValidationContext;
use crate::webhooks::{FieldPath, Violation, ViolationKind};

fn tls_path(field: &str) -> FieldPath {
    FieldPath::new("spec")
        .child("configuration")
        .child("tls")
        .child(field)
}

/// Validate the Kafka API TLS settings
pub fn validate(ctx: &ValidationContext<'_>) -> Vec<Violation> {
    let tls = &ctx.resource.spec.configuration.tls.kafka_api;
    let mut violations = Vec::new();

    if tls.require_client_auth && !tls.enabled {
        violations.push(Violation::new(
            ViolationKind::InvalidTlsConfig,
            tls_path("requireClientAuth"),
            &tls.require_client_auth,
            "Enabled has to be set to true for RequireClientAuth to be allowed to be true",
        ));
    }

    if tls.issuer_ref.is_some() && tls.node_secret_ref.is_some() {
        violations.push(Violation::new(
            ViolationKind::InvalidTlsConfig,
            tls_path("nodeSecretRef"),
            &tls.node_secret_ref,
            "Cannot provide both IssuerRef and NodeSecretRef",
        ));
    }

    violations
}
