//! Memory sizing policy.
//!
//! Redpanda needs at least 1GiB of memory per node. The container limit must
//! cover that floor plus the memory reserved for the other processes in the
//! container. Developer mode lifts the requirement.

use super::ValidationContext;
use crate::error::Result;
use crate::quantity::{self, GIB};
use crate::webhooks::{FieldPath, Violation, ViolationKind};

/// Memory reserved for processes other than Redpanda in the container
pub const RESERVE_MEMORY: &str = "1Mi";

/// Memory Redpanda itself needs on each node
pub const MINIMUM_MEMORY_BYTES: i128 = GIB;

fn memory_limit_path() -> FieldPath {
    FieldPath::new("spec")
        .child("resources")
        .child("limits")
        .child("memory")
}

/// Validate the memory limit.
///
/// Fails only when [`RESERVE_MEMORY`] itself does not parse. An unset limit
/// counts as zero bytes.
pub fn validate(ctx: &ValidationContext<'_>) -> Result<Vec<Violation>> {
    let reserve = quantity::parse_bytes(RESERVE_MEMORY)?;
    if ctx.resource.spec.configuration.developer_mode {
        return Ok(Vec::new());
    }

    let limit = ctx.resource.memory_limit();
    let limit_bytes = match limit {
        None => 0,
        Some(q) => match quantity::parse_bytes(&q.0) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Ok(vec![Violation::new(
                    ViolationKind::InvalidQuantity,
                    memory_limit_path(),
                    q,
                    e.to_string(),
                )]);
            }
        },
    };

    if limit_bytes.saturating_sub(reserve) < MINIMUM_MEMORY_BYTES {
        return Ok(vec![Violation::new(
            ViolationKind::InsufficientMemory,
            memory_limit_path(),
            &limit,
            "need minimum of 1GiB + 1MiB of memory per node",
        )]);
    }

    Ok(Vec::new())
}
