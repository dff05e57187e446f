//! Cloud (tiered) storage policy.
//!
//! When cloud storage is enabled every credential and bucket coordinate
//! must be provided. All missing fields are reported together.
//!
//! Violations are reported under `spec.cloudStorage`, where the settings
//! live in the resource. Older Redpanda operators reported the same problems
//! under `spec.configuration.cloudStorage`.

use super::ValidationContext;
use crate::webhooks::{FieldPath, Violation, ViolationKind};

fn cloud_storage_path() -> FieldPath {
    FieldPath::new("spec").child("cloudStorage")
}

/// Validate cloud storage settings
pub fn validate(ctx: &ValidationContext<'_>) -> Vec<Violation> {
    let storage = &ctx.resource.spec.cloud_storage;
    if !storage.enabled {
        return Vec::new();
    }

    let secret_name = storage.secret_key_ref.name.as_deref().unwrap_or_default();
    let secret_namespace = storage
        .secret_key_ref
        .namespace
        .as_deref()
        .unwrap_or_default();

    let required = [
        (
            cloud_storage_path().child("accessKey"),
            storage.access_key.as_str(),
            "AccessKey has to be provided for cloud storage to be enabled",
        ),
        (
            cloud_storage_path().child("bucket"),
            storage.bucket.as_str(),
            "Bucket has to be provided for cloud storage to be enabled",
        ),
        (
            cloud_storage_path().child("region"),
            storage.region.as_str(),
            "Region has to be provided for cloud storage to be enabled",
        ),
        (
            cloud_storage_path().child("secretKeyRef").child("name"),
            secret_name,
            "SecretKeyRef name has to be provided for cloud storage to be enabled",
        ),
        (
            cloud_storage_path().child("secretKeyRef").child("namespace"),
            secret_namespace,
            "SecretKeyRef namespace has to be provided for cloud storage to be enabled",
        ),
    ];

    required
        .into_iter()
        .filter(|(_, value, _)| value.is_empty())
        .map(|(field, value, message)| {
            Violation::new(ViolationKind::MissingRequiredField, field, value, message)
        })
        .collect()
}
