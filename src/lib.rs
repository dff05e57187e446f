//! redpanda-operator library crate
//!
//! This module exports the Cluster CRD, the admission policies that decide
//! whether a Cluster may be created or updated, and certificate naming.

pub mod crd;
pub mod error;
pub mod quantity;
pub mod resources;
pub mod webhooks;

pub use error::{Error, Result};
pub use resources::CommonName;
pub use webhooks::{Verdict, Violation, ViolationKind, on_create, on_delete, on_update};
