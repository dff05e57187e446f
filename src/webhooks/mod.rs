//! Admission validation for Cluster resources.
//!
//! This module provides the checks behind the Cluster validating webhook.
//! Policies accumulate field-scoped violations instead of failing fast:
//! - CREATE: listener topology, port collisions, memory, TLS, cloud storage
//! - UPDATE: no scale down, plus everything checked on CREATE
//! - DELETE: always allowed

pub mod policies;
mod violation;

pub use policies::{ValidationContext, on_create, on_delete, on_update, validate_all};
pub use violation::{FieldPath, Verdict, Violation, ViolationKind};

// Re-export the kube-rs admission operation for callers building contexts
pub use kube::core::admission::Operation;
