//! Replica count transition policy.
//!
//! UPDATE only. Validates that the cluster is never scaled down: removing
//! Redpanda nodes is not supported. An unset replica count on either side
//! leaves the count unchanged and is not checked.

use super::ValidationContext;
use crate::webhooks::{FieldPath, Violation, ViolationKind};

/// Validate the replica count transition
pub fn validate(ctx: &ValidationContext<'_>) -> Vec<Violation> {
    let Some(old) = ctx.old_resource else {
        return Vec::new(); // Not an UPDATE
    };

    match (old.spec.replicas, ctx.resource.spec.replicas) {
        (Some(old_replicas), Some(new_replicas)) if new_replicas < old_replicas => {
            vec![Violation::new(
                ViolationKind::UnsupportedTransition,
                FieldPath::new("spec").child("replicas"),
                &new_replicas,
                "scaling down is not supported",
            )]
        }
        _ => Vec::new(),
    }
}
