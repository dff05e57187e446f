//! Kafka listener topology policy.
//!
//! Validates:
//! - At least one Kafka API listener is declared
//! - At most one listener is marked external
//! - The external listener leaves its port unset (it is assigned on exposure)
//! - The layout is one internal listener, optionally plus one external

use super::ValidationContext;
use crate::webhooks::{FieldPath, Violation, ViolationKind};

fn kafka_api_path() -> FieldPath {
    FieldPath::new("spec")
        .child("configuration")
        .child("kafkaApi")
}

/// Validate the Kafka listener layout
pub fn validate(ctx: &ValidationContext<'_>) -> Vec<Violation> {
    let listeners = &ctx.resource.spec.configuration.kafka_api;
    let invalid = |message: &str| {
        Violation::new(
            ViolationKind::InvalidTopology,
            kafka_api_path(),
            listeners,
            message,
        )
    };

    let mut violations = Vec::new();
    if listeners.is_empty() {
        violations.push(invalid("need at least one kafka api listener"));
    }

    let mut external_count = 0usize;
    for listener in listeners.iter().filter(|l| l.is_external()) {
        if external_count > 0 {
            violations.push(invalid(
                "only one kafka api listener can be marked as external",
            ));
        }
        external_count += 1;
        if listener.port != 0 {
            violations.push(invalid(
                "external kafka api listener cannot have port specified, it's autogenerated",
            ));
        }
    }

    if !matches!((listeners.len(), external_count), (1, 0) | (2, 1)) {
        violations.push(invalid(
            "one internal listener and up to one external kafka api listener is required",
        ));
    }

    violations
}
