//! Certificate common name derivation.

use redpanda_operator::Error;
use redpanda_operator::resources::certificate::NAME_LIMIT;
use redpanda_operator::resources::{CommonName, certificate_common_name};

use crate::fixtures::ClusterBuilder;

#[test]
fn test_long_cluster_name_shortened() {
    let cluster_name = "a-very-long-cluster-name-that-exceeds-budget-of-the-certificate-common-name";
    let name = CommonName::new(cluster_name, "sts").unwrap();
    assert_eq!(name.as_str().len(), NAME_LIMIT);
    assert!(name.as_str().ends_with("-sts"));
    assert_eq!(&name.as_str()[..60], &cluster_name[..60]);
}

#[test]
fn test_short_cluster_name_kept() {
    let name = CommonName::new("a-very-long-cluster-name-that-exceeds-budget", "sts").unwrap();
    assert_eq!(
        name.as_str(),
        "a-very-long-cluster-name-that-exceeds-budget-sts"
    );
}

#[test]
fn test_common_name_from_cluster() {
    let cluster = ClusterBuilder::new("production-redpanda").build();
    let name = certificate_common_name(&cluster, "operator-client").unwrap();
    assert_eq!(name.to_string(), "production-redpanda-operator-client");
}

#[test]
fn test_oversized_suffix_is_an_error() {
    let cluster = ClusterBuilder::new("c").build();
    let suffix = "x".repeat(63);
    assert!(matches!(
        certificate_common_name(&cluster, &suffix),
        Err(Error::NameTooLong { .. })
    ));
}
