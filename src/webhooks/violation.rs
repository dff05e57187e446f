//! Admission outcome types.
//!
//! Every policy returns a list of [`Violation`]s instead of stopping at the
//! first problem, so a single round trip reports everything that is wrong
//! with a Cluster. The lists are merged into a [`Verdict`], which can be
//! rendered as the `Status` the API server returns for invalid objects.

use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{Status, StatusCause, StatusDetails};
use kube::Resource;
use serde::Serialize;
use serde_json::Value;

/// HTTP code of an `Invalid` status
const UNPROCESSABLE_ENTITY: i32 = 422;

/// Dotted path to a field of the resource, e.g. `spec.configuration.kafkaApi`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Start a path at the given root segment.
    pub fn new(root: impl Into<String>) -> Self {
        Self(vec![root.into()])
    }

    /// Append a child segment.
    pub fn child(mut self, name: impl Into<String>) -> Self {
        self.0.push(name.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Category of a policy violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Kafka listener layout is not one internal plus at most one external listener
    InvalidTopology,
    /// Two listeners share a port, including implied external ports
    PortCollision,
    /// Memory limit below the per-node floor
    InsufficientMemory,
    /// A quantity supplied by the user cannot be parsed
    InvalidQuantity,
    /// Contradictory TLS settings
    InvalidTlsConfig,
    /// A field required by an enabled feature is empty
    MissingRequiredField,
    /// The update moves the resource somewhere it cannot go
    UnsupportedTransition,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::InvalidTopology => write!(f, "InvalidTopology"),
            ViolationKind::PortCollision => write!(f, "PortCollision"),
            ViolationKind::InsufficientMemory => write!(f, "InsufficientMemory"),
            ViolationKind::InvalidQuantity => write!(f, "InvalidQuantity"),
            ViolationKind::InvalidTlsConfig => write!(f, "InvalidTLSConfig"),
            ViolationKind::MissingRequiredField => write!(f, "MissingRequiredField"),
            ViolationKind::UnsupportedTransition => write!(f, "UnsupportedTransition"),
        }
    }
}

/// One field-scoped reason a resource is inadmissible.
#[derive(Clone, Debug, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub field: FieldPath,
    /// The offending value as it appeared in the request
    pub value: Value,
    pub message: String,
}

impl Violation {
    pub fn new<T: Serialize + ?Sized>(
        kind: ViolationKind,
        field: FieldPath,
        value: &T,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field,
            value: serde_json::to_value(value).unwrap_or(Value::Null),
            message: message.into(),
        }
    }

    /// Body of the message without the field, `Invalid value: <value>: <message>`.
    pub fn body(&self) -> String {
        format!("Invalid value: {}: {}", self.value, self.message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.body())
    }
}

/// Overall outcome of an admission check.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Admit,
    /// Every violation found, in the order the policies ran
    Reject(Vec<Violation>),
}

impl Verdict {
    /// Admit when there is nothing to report, reject otherwise.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Verdict::Admit
        } else {
            Verdict::Reject(violations)
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admit)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Verdict::Admit => &[],
            Verdict::Reject(violations) => violations,
        }
    }

    /// Render the verdict as an API `Status` for the object `name` of kind `K`.
    ///
    /// A rejection becomes a single `Invalid` status carrying one cause per
    /// violation, in the same shape the API server uses for schema errors.
    pub fn into_status<K: Resource<DynamicType = ()>>(self, name: &str) -> Status {
        let violations = match self {
            Verdict::Admit => {
                return Status {
                    status: Some("Success".to_string()),
                    code: Some(200),
                    ..Default::default()
                };
            }
            Verdict::Reject(violations) => violations,
        };

        let kind = K::kind(&()).to_string();
        let group = K::group(&()).to_string();
        let qualified_kind = if group.is_empty() {
            kind.clone()
        } else {
            format!("{kind}.{group}")
        };

        let summary = match violations.as_slice() {
            [single] => single.to_string(),
            many => format!(
                "[{}]",
                many.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };

        let causes = violations
            .iter()
            .map(|v| StatusCause {
                field: Some(v.field.to_string()),
                message: Some(v.body()),
                reason: Some("FieldValueInvalid".to_string()),
            })
            .collect();

        Status {
            status: Some("Failure".to_string()),
            code: Some(UNPROCESSABLE_ENTITY),
            reason: Some("Invalid".to_string()),
            message: Some(format!("{qualified_kind} {name:?} is invalid: {summary}")),
            details: Some(StatusDetails {
                name: Some(name.to_string()),
                group: Some(group),
                kind: Some(kind),
                causes: Some(causes),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
