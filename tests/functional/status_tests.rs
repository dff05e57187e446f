//! Rendering of admission verdicts as API Status objects.

use redpanda_operator::crd::Cluster;
use redpanda_operator::on_create;

use crate::fixtures::ClusterBuilder;

#[test]
fn test_rejection_status_lists_every_violation() {
    let cluster = ClusterBuilder::new("broken")
        .kafka_port(9092)
        .admin_port(9092)
        .memory("512Mi")
        .build();
    let verdict = on_create(&cluster).unwrap();
    let count = verdict.violations().len();
    assert_eq!(count, 2);

    let status = verdict.into_status::<Cluster>("broken");
    assert_eq!(status.status.as_deref(), Some("Failure"));
    assert_eq!(status.code, Some(422));

    let message = status.message.unwrap();
    assert!(message.starts_with("Cluster.redpanda.vectorized.io \"broken\" is invalid: ["));
    assert!(message.contains("spec.configuration.admin.port: Invalid value: 9092"));
    assert!(message.contains("spec.resources.limits.memory: Invalid value: \"512Mi\""));

    let details = status.details.unwrap();
    assert_eq!(details.name.as_deref(), Some("broken"));
    assert_eq!(details.group.as_deref(), Some("redpanda.vectorized.io"));
    let causes = details.causes.unwrap();
    assert_eq!(causes.len(), count);
    assert!(
        causes
            .iter()
            .all(|c| c.reason.as_deref() == Some("FieldValueInvalid"))
    );
}

#[test]
fn test_admitted_status() {
    let cluster = ClusterBuilder::new("fine").build();
    let status = on_create(&cluster).unwrap().into_status::<Cluster>("fine");
    assert_eq!(status.status.as_deref(), Some("Success"));
    assert_eq!(status.code, Some(200));
}

#[test]
fn test_status_serializes_for_the_api_server() {
    let cluster = ClusterBuilder::new("broken").no_memory().build();
    let status = on_create(&cluster).unwrap().into_status::<Cluster>("broken");
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["reason"], "Invalid");
    assert_eq!(
        json["details"]["causes"][0]["field"],
        "spec.resources.limits.memory"
    );
}
