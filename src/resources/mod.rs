//! Resource naming helpers.
//!
//! Contains utilities for deriving names of resources owned by a Cluster.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | `CommonName` | Certificate common names within cert-manager's 64 byte limit |

pub mod certificate;

pub use certificate::{CommonName, certificate_common_name};
