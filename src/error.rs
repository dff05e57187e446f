//! Error types for redpanda-operator.
//!
//! These are faults, not admission outcomes: a specification that breaks a
//! policy produces a [`crate::webhooks::Violation`], never an `Error`.

use thiserror::Error;

/// Error type for validation and tooling operations
#[derive(Error, Debug)]
pub enum Error {
    /// A quantity string could not be turned into a byte count
    #[error("invalid quantity {quantity:?}: {reason}")]
    InvalidQuantity {
        quantity: String,
        reason: &'static str,
    },

    /// A certificate common name suffix leaves no room for the prefix
    #[error("common name suffix {suffix:?} ({length} bytes) leaves no room for a prefix within {limit} bytes")]
    NameTooLong {
        suffix: String,
        length: usize,
        limit: usize,
    },

    /// A required object is missing from the request
    #[error("Missing object: {0}")]
    MissingObject(String),

    /// File access error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for redpanda-operator operations
pub type Result<T> = std::result::Result<T, Error>;
