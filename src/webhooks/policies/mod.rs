//! Validation policies for Cluster admission.
//!
//! Every policy inspects the proposed Cluster and returns all violations it
//! finds. Policies never stop each other: the orchestrator concatenates
//! their results so the caller sees every problem at once.
//!
//! - CREATE: listeners, ports, memory, tls, cloud storage
//! - UPDATE: replicas (no scale down), then the CREATE set
//! - DELETE: always allowed

pub mod cloud_storage;
pub mod listeners;
pub mod memory;
pub mod ports;
pub mod replicas;
pub mod tls;

use kube::ResourceExt;
use kube::core::admission::Operation;
use tracing::{debug, info};

use super::violation::{Verdict, Violation};
use crate::crd::Cluster;
use crate::error::{Error, Result};

/// Context for validation
pub struct ValidationContext<'a> {
    /// The resource being validated
    pub resource: &'a Cluster,
    /// The old resource (for UPDATE operations)
    pub old_resource: Option<&'a Cluster>,
    /// The admission operation
    pub operation: Operation,
    /// Whether this is a dry-run request
    pub dry_run: bool,
    /// The namespace of the resource
    pub namespace: Option<&'a str>,
}

impl<'a> ValidationContext<'a> {
    /// Context for creating `resource`.
    pub fn create(resource: &'a Cluster) -> Self {
        Self {
            resource,
            old_resource: None,
            operation: Operation::Create,
            dry_run: false,
            namespace: resource.metadata.namespace.as_deref(),
        }
    }

    /// Context for replacing `old` with `new`.
    pub fn update(old: &'a Cluster, new: &'a Cluster) -> Self {
        Self {
            resource: new,
            old_resource: Some(old),
            operation: Operation::Update,
            dry_run: false,
            namespace: new.metadata.namespace.as_deref(),
        }
    }
}

/// Run all validation policies that apply to the operation.
pub fn validate_all(ctx: &ValidationContext<'_>) -> Result<Verdict> {
    let name = ctx.resource.name_any();
    debug!(
        name = %name,
        namespace = ?ctx.namespace,
        operation = ?ctx.operation,
        dry_run = ctx.dry_run,
        "Validating Cluster"
    );

    let mut violations: Vec<Violation> = Vec::new();
    match ctx.operation {
        Operation::Create => {}
        Operation::Update => {
            if ctx.old_resource.is_none() {
                return Err(Error::MissingObject(format!(
                    "update of Cluster {name} carries no old object"
                )));
            }
            violations.extend(replicas::validate(ctx));
        }
        Operation::Delete | Operation::Connect => return Ok(Verdict::Admit),
    }

    violations.extend(listeners::validate(ctx));
    violations.extend(ports::validate(ctx));
    violations.extend(memory::validate(ctx)?);
    violations.extend(tls::validate(ctx));
    violations.extend(cloud_storage::validate(ctx));

    if !violations.is_empty() {
        info!(
            name = %name,
            operation = ?ctx.operation,
            violations = violations.len(),
            "Cluster rejected"
        );
    }
    Ok(Verdict::from_violations(violations))
}

/// Admission hook for CREATE.
pub fn on_create(new: &Cluster) -> Result<Verdict> {
    validate_all(&ValidationContext::create(new))
}

/// Admission hook for UPDATE.
pub fn on_update(old: &Cluster, new: &Cluster) -> Result<Verdict> {
    validate_all(&ValidationContext::update(old, new))
}

/// Admission hook for DELETE. Deletion is never blocked.
pub fn on_delete(old: &Cluster) -> Verdict {
    debug!(name = %old.name_any(), "Cluster deletion allowed");
    Verdict::Admit
}

/// Defaulting hook. Clusters are admitted as submitted.
pub fn apply_defaults(resource: &mut Cluster) {
    debug!(name = %resource.name_any(), "No defaults to apply");
}
