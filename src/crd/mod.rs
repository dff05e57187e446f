//! Custom Resource Definitions for redpanda-operator.
//!
//! - `Cluster`: a Redpanda cluster and its listener, TLS and storage settings

mod cluster;

pub use cluster::*;
